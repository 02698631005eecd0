use leptos::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub name: String,
    pub email: String,
}

/// The logged-in identity, held only in memory for the life of the view.
#[derive(Debug, Clone, Copy)]
pub struct SessionState {
    inner: RwSignal<Option<Session>>,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            inner: create_rw_signal(None),
        }
    }

    pub fn begin(&self, session: Session) {
        self.inner.set(Some(session));
    }

    pub fn end(&self) {
        self.inner.set(None);
    }

    pub fn current(&self) -> Option<Session> {
        self.inner.get()
    }

    pub fn current_untracked(&self) -> Option<Session> {
        self.inner.get_untracked()
    }

    pub fn is_present(&self) -> bool {
        self.inner.with(Option::is_some)
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}
