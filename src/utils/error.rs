use thiserror::Error;

#[derive(Error, Debug)]
pub enum WatchError {
    #[error("Page render failed: {message}")]
    Render { message: String },

    #[error("HTTP request failed: {0}")]
    Api(#[from] reqwest::Error),

    #[error("Notification rejected ({status}): {description}")]
    Delivery { status: u16, description: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Credentials file is not valid TOML: {0}")]
    CredentialsParse(#[from] toml::de::Error),

    #[error("Failed to serialize credentials: {0}")]
    CredentialsSerialize(#[from] toml::ser::Error),

    #[error("Invalid selector: {message}")]
    Selector { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error: {message}")]
    Config { message: String },
}

pub type Result<T> = std::result::Result<T, WatchError>;
