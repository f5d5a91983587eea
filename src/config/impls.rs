/// Configuration loading, saving, overrides and validation.
pub mod configuration;

/// Display and Error implementations for ConfigurationError.
pub mod configuration_error;

/// Default values for the section structs.
pub mod defaults;
