//! # State Module
//!
//! Session state, one type per concern.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────┐  ┌──────────────────┐  ┌──────────────────┐           │
//! │  │  FormState   │  │ IdentifierState  │  │   ConfigState    │           │
//! │  │              │  │                  │  │                  │           │
//! │  │  Arc<Mutex<  │  │  Mutex<StdRng>   │  │  company_name    │           │
//! │  │  GuideDraft  │  │                  │  │  currency        │           │
//! │  │  >>          │  │                  │  │  rng_seed        │           │
//! │  └──────────────┘  └──────────────────┘  └──────────────────┘           │
//! │                                                                         │
//! │  Commands take only the states they need.                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod form;
mod identifier;

pub use config::{ConfigError, ConfigState};
pub use form::{FormField, FormState, GuideDraft};
pub use identifier::IdentifierState;
