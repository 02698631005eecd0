use crate::pages::login::utils::LoginFormState;
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn LoginForm(
    form: LoginFormState,
    on_email_input: Callback<String>,
    on_password_input: Callback<String>,
    on_submit: Callback<SubmitEvent>,
) -> impl IntoView {
    let email = form.email;
    let password = form.password;

    view! {
        <form on:submit=move |ev| on_submit.call(ev)>
            <h2>"Login"</h2>
            <div>
                <label for="email">"Email:"</label>
                <input
                    type="email"
                    id="email"
                    required
                    prop:value=email
                    on:input=move |ev| on_email_input.call(event_target_value(&ev))
                />
            </div>
            <div>
                <label for="password">"Password:"</label>
                <input
                    type="password"
                    id="password"
                    required
                    prop:value=password
                    on:input=move |ev| on_password_input.call(event_target_value(&ev))
                />
            </div>
            <button data-testid="login" type="submit">"Login"</button>
        </form>
    }
}
