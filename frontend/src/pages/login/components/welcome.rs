use crate::state::session::Session;
use leptos::{ev::MouseEvent, *};

#[component]
pub fn WelcomePanel(session: Session, on_logout: Callback<MouseEvent>) -> impl IntoView {
    view! {
        <div>
            <h2>{format!("Welcome, {}!", session.name)}</h2>
            <p>{format!("Email: {}", session.email)}</p>
            <button on:click=move |ev| on_logout.call(ev)>"Logout"</button>
        </div>
    }
}
