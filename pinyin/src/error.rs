use hanzi_core::DictError;
use thiserror::Error;

/// Failure of a conversion call.
///
/// Conversions are atomic: when one of these is returned no partial output
/// was produced.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The options are unusable (bad separator, conflicting settings).
    /// Reported before the dictionary is consulted.
    #[error("invalid option: {0}")]
    InvalidOption(String),

    /// The dictionary could not be built or loaded.
    #[error(transparent)]
    Dictionary(#[from] DictError),

    /// An options file could not be read or parsed.
    #[error("config error: {0}")]
    Config(String),
}

impl From<toml::de::Error> for ConvertError {
    fn from(err: toml::de::Error) -> Self {
        ConvertError::Config(err.to_string())
    }
}
