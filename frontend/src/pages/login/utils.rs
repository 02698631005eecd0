use leptos::*;

/// Live, uncommitted values of the two login inputs.
#[derive(Clone, Copy, Debug)]
pub struct LoginFormState {
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
}

impl Default for LoginFormState {
    fn default() -> Self {
        Self {
            email: create_rw_signal(String::new()),
            password: create_rw_signal(String::new()),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConstraintViolation {
    EmailMissing,
    PasswordMissing,
    EmailMalformed,
}

impl ConstraintViolation {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConstraintViolation::EmailMissing => "email_missing",
            ConstraintViolation::PasswordMissing => "password_missing",
            ConstraintViolation::EmailMalformed => "email_malformed",
        }
    }
}

/// Replays the `required` and `type="email"` checks a browser runs before
/// dispatching `submit`.
pub fn check_constraints(email: &str, password: &str) -> Result<(), ConstraintViolation> {
    if email.is_empty() {
        return Err(ConstraintViolation::EmailMissing);
    }
    if !is_valid_email(email) {
        return Err(ConstraintViolation::EmailMalformed);
    }
    if password.is_empty() {
        return Err(ConstraintViolation::PasswordMissing);
    }
    Ok(())
}

/// HTML "valid e-mail address" grammar, applied after the input's value
/// sanitization strips surrounding whitespace.
pub fn is_valid_email(raw: &str) -> bool {
    let value = raw.trim_matches(|c: char| c.is_ascii_whitespace());
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty() && local.chars().all(is_local_char) && is_valid_domain(domain)
}

fn is_local_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || ".!#$%&'*+/=?^_`{|}~-".contains(c)
}

fn is_valid_domain(domain: &str) -> bool {
    !domain.is_empty() && domain.split('.').all(is_valid_label)
}

fn is_valid_label(label: &str) -> bool {
    (1..=63).contains(&label.len())
        && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        && !label.starts_with('-')
        && !label.ends_with('-')
}
