mod api;
mod components;
mod models;
mod state;

use leptos::mount::mount_to_body;
use leptos::prelude::*;

use components::blog::BlogView;
use components::form::BlogForm;
use state::AppState;

/// Root application component.
#[component]
fn App() -> impl IntoView {
    let state = AppState::provide();

    view! {
        <div class="app-container">
            <h1>"Funky Blog Generator"</h1>
            {move || {
                state.error.get().map(|err| {
                    view! { <div class="error-banner">{err}</div> }
                })
            }}
            <BlogForm />
            <BlogView />
        </div>
    }
}

fn main() {
    console_log::init_with_level(log::Level::Debug).expect("Failed to init logger");
    mount_to_body(App);
}
