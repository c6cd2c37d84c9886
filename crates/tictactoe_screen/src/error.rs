//! Screen construction errors.

use crate::config::ConfigError;
use derive_more::Display;

/// Failure while building a screen. All variants abort screen construction.
#[derive(Debug, Clone, Display)]
pub enum ScreenError {
    /// A marker texture could not be found.
    #[display("Texture {} is not available", _0)]
    AssetMissing(String),

    /// A widget the screen binds to is absent from the layout.
    #[display("Widget {} not found", _0)]
    WidgetMissing(String),

    /// The configuration could not be loaded.
    #[display("{}", _0)]
    Config(ConfigError),
}

impl std::error::Error for ScreenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScreenError::Config(e) => Some(e),
            ScreenError::AssetMissing(_) | ScreenError::WidgetMissing(_) => None,
        }
    }
}

impl From<ConfigError> for ScreenError {
    fn from(err: ConfigError) -> Self {
        ScreenError::Config(err)
    }
}
