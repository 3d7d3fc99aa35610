use leptos::ev;
use leptos::prelude::*;

use crate::state::AppState;

/// The request form: topic, word count, tone, and the generate button.
#[component]
pub fn BlogForm() -> impl IntoView {
    let state = expect_context::<AppState>();

    let is_loading = {
        let state = state.clone();
        move || state.is_loading.get()
    };

    let on_submit = {
        let state = state.clone();
        move |ev: ev::SubmitEvent| {
            ev.prevent_default();
            state.generate();
        }
    };

    let on_topic = {
        let state = state.clone();
        move |ev: ev::Event| state.set_topic.set(event_target_value(&ev))
    };

    let on_word_count = {
        let state = state.clone();
        move |ev: ev::Event| state.update_word_count(event_target_value(&ev))
    };

    let on_tone = {
        let state = state.clone();
        move |ev: ev::Event| state.set_tone.set(event_target_value(&ev))
    };

    view! {
        <form class="blog-form" on:submit=on_submit>
            <input
                type="text"
                placeholder="Enter your blog topic"
                maxlength="200"
                prop:value=state.topic
                on:input=on_topic
            />
            <input
                type="text"
                inputmode="numeric"
                placeholder="Number of words"
                prop:value=state.word_count
                on:input=on_word_count
            />
            <select prop:value=state.tone on:change=on_tone>
                <option value="formal">"Formal"</option>
                <option value="informal">"Informal"</option>
                <option value="humorous">"Humorous"</option>
                <option value="serious">"Serious"</option>
            </select>
            <button type="submit" class="generate-btn" disabled=is_loading.clone()>
                {move || if is_loading() { "Generating…" } else { "Generate Blog" }}
            </button>
        </form>
    }
}
