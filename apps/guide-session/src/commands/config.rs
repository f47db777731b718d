//! # Config Commands

use tracing::debug;

use crate::state::ConfigState;

/// Gets the current session configuration.
///
/// ## When Used
/// - Form startup (currency symbol, weight decimals)
/// - Guide summary header (company name)
pub fn get_config(config: &ConfigState) -> ConfigState {
    debug!("get_config command");
    config.clone()
}
