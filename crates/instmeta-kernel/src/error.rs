//! Error types for kernel operations.

/// Errors loading generator settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// The settings file could not be read.
    #[error("failed to read settings {path}: {message}")]
    Io { path: String, message: String },

    /// The settings file is not valid TOML for this schema.
    #[error("invalid settings: {0}")]
    Parse(String),

    /// A setting is present but unusable.
    #[error("invalid setting `{key}`: {message}")]
    Invalid { key: &'static str, message: String },
}
