pub mod form;
pub mod welcome;

pub use form::LoginForm;
pub use welcome::WelcomePanel;
