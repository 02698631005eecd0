use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoginError {
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("Email and password are required")]
    MissingCredentials,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("runtime config is not readable: {0}")]
    Unreadable(String),
    #[error("runtime config is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl LoginError {
    /// Only a rejected credential pair is surfaced to the user.
    pub fn is_user_visible(&self) -> bool {
        matches!(self, LoginError::InvalidCredentials)
    }
}
