//! # Commands Module
//!
//! Everything the guide UI can ask of the session.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── form.rs     ◄─── get_form, update_field, load_form, reset_form
//! ├── guide.rs    ◄─── submit_guide, lookup_guide_number, guide_summary
//! └── config.rs   ◄─── get_config
//! ```
//!
//! ## State Injection
//! Each command declares only the state it needs:
//! ```rust,ignore
//! // Only needs the form
//! fn update_field(form: &FormState, field: FormField, value: String)
//!
//! // Needs form + generator
//! fn submit_guide(form: &FormState, ids: &IdentifierState)
//! ```

pub mod config;
pub mod form;
pub mod guide;
