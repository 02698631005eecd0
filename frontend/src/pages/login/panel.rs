use super::{
    components::{LoginForm, WelcomePanel},
    view_model::LoginViewModel,
};
use leptos::{
    ev::{MouseEvent, SubmitEvent},
    *,
};

#[component]
pub fn LoginPanel(vm: LoginViewModel) -> impl IntoView {
    let form = vm.form;
    let session = vm.session;

    let handle_submit = {
        let vm = vm.clone();
        Callback::new(move |ev: SubmitEvent| {
            ev.prevent_default();
            vm.submit();
        })
    };
    let handle_logout = {
        let vm = vm.clone();
        Callback::new(move |_: MouseEvent| vm.logout())
    };
    let email_input = {
        let vm = vm.clone();
        Callback::new(move |value: String| vm.set_email(value))
    };
    let password_input = Callback::new(move |value: String| vm.set_password(value));

    view! {
        <div style="max-width: 400px; margin: 0 auto; padding: 20px;">
            <Show
                when=move || session.is_present()
                fallback=move || view! {
                    <LoginForm
                        form=form
                        on_email_input=email_input
                        on_password_input=password_input
                        on_submit=handle_submit
                    />
                }
            >
                {move || {
                    session
                        .current()
                        .map(|current| view! { <WelcomePanel session=current on_logout=handle_logout /> })
                }}
            </Show>
        </div>
    }
}
