//! # Guide Session Library
//!
//! Host layer for the guide-creation flow: holds the form being edited,
//! keeps its derived weights current and issues guide numbers on submit.
//!
//! ## Module Organization
//! ```text
//! guide_session_lib/
//! ├── lib.rs          ◄─── You are here (logging & run)
//! ├── script.rs       ◄─── JSON session replay
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── form.rs     ◄─── Guide draft + field edits
//! │   ├── identifier.rs ◄─ Seedable guide-number generator
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── form.rs     ◄─── Field edit commands
//! │   ├── guide.rs    ◄─── Submit / lookup commands
//! │   └── config.rs   ◄─── Config command
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod commands;
pub mod error;
pub mod script;
pub mod state;

use std::io::Read;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use script::SessionScript;
use state::{ConfigState, FormState, IdentifierState};

/// Runs one scripted session.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Initialize Logging (stderr, RUST_LOG aware)                         │
/// │  2. Load ConfigState from SHIPGUIDE_* variables                         │
/// │  3. Create FormState + IdentifierState (seeded if configured)           │
/// │  4. Read script: path in argv[1], or stdin                              │
/// │  5. Replay, print SessionOutcome as JSON on stdout                      │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> anyhow::Result<()> {
    init_tracing();

    let config = ConfigState::load().context("loading configuration")?;
    info!(company = %config.company_name, seeded = config.rng_seed.is_some(), "starting guide session");

    let form = FormState::new();
    let ids = IdentifierState::new(config.rng_seed);

    let raw = read_script_source()?;
    let script: SessionScript = serde_json::from_str(&raw).context("parsing session script")?;

    let outcome = script::execute(script, &form, &ids, &config);
    println!("{}", serde_json::to_string_pretty(&outcome)?);

    Ok(())
}

fn read_script_source() -> anyhow::Result<String> {
    match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("reading session script {path}")),
        None => {
            let mut raw = String::new();
            std::io::stdin()
                .read_to_string(&mut raw)
                .context("reading session script from stdin")?;
            Ok(raw)
        }
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - Default: INFO, DEBUG for this crate
///
/// Logs go to stderr; stdout carries only the JSON outcome.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,guide_session_lib=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
