use super::{
    repository::DemoAccountRepository,
    utils::{self, ConstraintViolation, LoginFormState},
};
use crate::{
    error::LoginError,
    state::session::SessionState,
    utils::notify::{use_alert_handle, AlertHandle},
};
use leptos::*;
use log::{debug, info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    LoggedIn,
    Rejected(LoginError),
    Ignored,
    Blocked(ConstraintViolation),
}

#[derive(Clone)]
pub struct LoginViewModel {
    pub form: LoginFormState,
    pub session: SessionState,
    repository: DemoAccountRepository,
    alerts: AlertHandle,
}

pub fn use_login_view_model() -> LoginViewModel {
    LoginViewModel::new(DemoAccountRepository::new(), use_alert_handle())
}

impl LoginViewModel {
    pub fn new(repository: DemoAccountRepository, alerts: AlertHandle) -> Self {
        Self {
            form: LoginFormState::default(),
            session: SessionState::new(),
            repository,
            alerts,
        }
    }

    pub fn set_email(&self, value: String) {
        self.form.email.set(value);
    }

    pub fn set_password(&self, value: String) {
        self.form.password.set(value);
    }

    pub fn submit(&self) -> SubmitOutcome {
        let email = self.form.email.get_untracked();
        let password = self.form.password.get_untracked();

        if let Err(violation) = utils::check_constraints(&email, &password) {
            debug!("login submission blocked: {}", violation.as_str());
            return SubmitOutcome::Blocked(violation);
        }

        match self.repository.authenticate(&email, &password) {
            Ok(session) => {
                info!("logged in as {}", session.email);
                self.session.begin(session);
                SubmitOutcome::LoggedIn
            }
            Err(err) if err.is_user_visible() => {
                warn!("login rejected: invalid credentials");
                self.alerts.alert(&err.to_string());
                SubmitOutcome::Rejected(err)
            }
            Err(_) => SubmitOutcome::Ignored,
        }
    }

    pub fn logout(&self) {
        if let Some(session) = self.session.current_untracked() {
            info!("logged out {}", session.email);
        }
        self.session.end();
    }
}
