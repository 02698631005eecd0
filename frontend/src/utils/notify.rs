use leptos::*;
use std::rc::Rc;

pub trait Notifier {
    /// Shows a blocking, user-visible message.
    fn alert(&self, message: &str);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserNotifier;

impl Notifier for BrowserNotifier {
    #[cfg(target_arch = "wasm32")]
    fn alert(&self, message: &str) {
        match web_sys::window() {
            Some(window) => {
                if window.alert_with_message(message).is_err() {
                    log::error!("window.alert failed: {}", message);
                }
            }
            None => log::error!("no window to alert on: {}", message),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn alert(&self, message: &str) {
        log::warn!("alert: {}", message);
    }
}

/// Cloneable handle placed in context so views can swap the alert backend.
#[derive(Clone)]
pub struct AlertHandle(Rc<dyn Notifier>);

impl AlertHandle {
    pub fn new(notifier: impl Notifier + 'static) -> Self {
        Self(Rc::new(notifier))
    }

    pub fn browser() -> Self {
        Self::new(BrowserNotifier)
    }

    pub fn alert(&self, message: &str) {
        self.0.alert(message);
    }
}

pub fn provide_alert_handle(handle: AlertHandle) {
    provide_context(handle);
}

pub fn use_alert_handle() -> AlertHandle {
    use_context::<AlertHandle>().unwrap_or_else(AlertHandle::browser)
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::RecordingNotifier;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn provided_handle_is_used_by_views() {
        let recorder = RecordingNotifier::default();
        let probe = recorder.clone();
        with_runtime(move || {
            provide_alert_handle(AlertHandle::new(recorder));
            use_alert_handle().alert("hello");
        });
        assert_eq!(probe.messages(), vec!["hello".to_string()]);
    }

    #[test]
    fn missing_context_falls_back_to_browser_notifier() {
        with_runtime(|| {
            // host fallback only logs, so this must not panic
            use_alert_handle().alert("no context");
        });
    }
}
