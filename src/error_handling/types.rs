use std::fmt;

use crate::form_session::Violation;

#[derive(Debug)]
pub enum ConfigError {
    IoError(std::io::Error),
    TomlError(String),
    FacultiesEmpty(String),
    NotInRange(String),
    UnknownRegion(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::TomlError(e) => write!(f, "TOML parsing error: {}", e),
            ConfigError::FacultiesEmpty(e) => write!(f, "Form configuration error: {}", e),
            ConfigError::NotInRange(e) => write!(f, "Value out of range: {}", e),
            ConfigError::UnknownRegion(e) => write!(f, "Unknown summary region: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::IoError(err)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    ConnectionFailed,
    WriteFailed,
    ReadFailed,
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::ConnectionFailed => write!(f, "Storage connection failed"),
            StorageError::WriteFailed => write!(f, "Storage write failed"),
            StorageError::ReadFailed => write!(f, "Storage read failed"),
        }
    }
}

impl std::error::Error for StorageError {}

/// Failures raised while filling in or submitting the survey form.
///
/// `Invalid` deliberately renders as a single user-facing sentence; the
/// individual violations are still carried for callers that want them.
#[derive(Debug)]
pub enum FormError {
    Invalid(Vec<Violation>),
    UnknownTechnology(String),
    StorageError(StorageError),
    IoError(std::io::Error),
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::Invalid(_) => write!(f, "All fields are mandatory"),
            FormError::UnknownTechnology(name) => write!(f, "Unknown technology: {}", name),
            FormError::StorageError(e) => write!(f, "Unable to save the response: {}", e),
            FormError::IoError(e) => write!(f, "Form IO error: {}", e),
        }
    }
}

impl std::error::Error for FormError {}

impl From<StorageError> for FormError {
    fn from(err: StorageError) -> Self {
        FormError::StorageError(err)
    }
}

impl From<std::io::Error> for FormError {
    fn from(err: std::io::Error) -> Self {
        FormError::IoError(err)
    }
}

#[derive(Debug)]
pub enum ControllerError {
    ConfigurationError(ConfigError),
    StorageError(StorageError),
    FormError(FormError),
    SerializationFailed(String),
}

impl fmt::Display for ControllerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControllerError::ConfigurationError(e) => write!(f, "Configuration error: {}", e),
            ControllerError::StorageError(e) => write!(f, "Storage error: {}", e),
            ControllerError::FormError(e) => write!(f, "{}", e),
            ControllerError::SerializationFailed(e) => write!(f, "Serialization failed: {}", e),
        }
    }
}

impl std::error::Error for ControllerError {}

impl From<ConfigError> for ControllerError {
    fn from(err: ConfigError) -> Self {
        ControllerError::ConfigurationError(err)
    }
}

impl From<StorageError> for ControllerError {
    fn from(err: StorageError) -> Self {
        ControllerError::StorageError(err)
    }
}

impl From<FormError> for ControllerError {
    fn from(err: FormError) -> Self {
        ControllerError::FormError(err)
    }
}
