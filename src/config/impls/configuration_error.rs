use crate::config::enums::configuration_error::ConfigurationError;

impl std::fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ConfigurationError::IOError(e) => e.fmt(f),
            ConfigurationError::ParseError(e) => e.fmt(f),
            ConfigurationError::SerializeError(e) => e.fmt(f),
            ConfigurationError::ValidationError(e) => write!(f, "invalid configuration: {e}")
        }
    }
}

impl std::error::Error for ConfigurationError {}

impl From<std::io::Error> for ConfigurationError {
    fn from(error: std::io::Error) -> Self {
        ConfigurationError::IOError(error)
    }
}

impl From<toml::de::Error> for ConfigurationError {
    fn from(error: toml::de::Error) -> Self {
        ConfigurationError::ParseError(error)
    }
}

impl From<toml::ser::Error> for ConfigurationError {
    fn from(error: toml::ser::Error) -> Self {
        ConfigurationError::SerializeError(error)
    }
}
