use crate::{error::LoginError, state::session::Session};

pub const DEMO_EMAIL: &str = "test@example.com";
pub const DEMO_PASSWORD: &str = "password";
pub const DEMO_NAME: &str = "John Doe";

/// The single hardcoded account the login form accepts.
#[derive(Debug, Clone)]
pub struct DemoAccountRepository {
    email: &'static str,
    password: &'static str,
    name: &'static str,
}

impl DemoAccountRepository {
    pub fn new() -> Self {
        Self {
            email: DEMO_EMAIL,
            password: DEMO_PASSWORD,
            name: DEMO_NAME,
        }
    }

    /// Exact, case-sensitive comparison. The session keeps the email as typed.
    pub fn authenticate(&self, email: &str, password: &str) -> Result<Session, LoginError> {
        if email == self.email && password == self.password {
            return Ok(Session {
                name: self.name.to_string(),
                email: email.to_string(),
            });
        }
        if email.is_empty() || password.is_empty() {
            return Err(LoginError::MissingCredentials);
        }
        Err(LoginError::InvalidCredentials)
    }
}

impl Default for DemoAccountRepository {
    fn default() -> Self {
        Self::new()
    }
}
