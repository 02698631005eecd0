use super::helpers::RecordingNotifier;
use crate::utils::notify::{provide_alert_handle, AlertHandle};
use leptos::*;

pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let runtime = leptos::create_runtime();
    let result = f();
    runtime.dispose();
    result
}

pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    with_runtime(|| view().into_view().render_to_string().to_string())
}

/// Renders with `recorder` installed as the alert backend for the whole tree.
pub fn render_with_alerts<F, N>(recorder: &RecordingNotifier, view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    let handle = AlertHandle::new(recorder.clone());
    render_to_string(move || {
        provide_alert_handle(handle);
        view()
    })
}
