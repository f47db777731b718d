//! # Guide Session Entry Point
//!
//! Replays a JSON script of form edits against the guide form and prints the
//! outcome as JSON.
//!
//! ## Startup Sequence
//! 1. Initialize tracing (stderr)
//! 2. Load configuration from `SHIPGUIDE_*` variables
//! 3. Create state objects (FormState, IdentifierState)
//! 4. Read the script (file argument or stdin)
//! 5. Apply edits, submit, print result

fn main() -> anyhow::Result<()> {
    // The actual setup is in lib.rs for better testability
    guide_session_lib::run()
}
