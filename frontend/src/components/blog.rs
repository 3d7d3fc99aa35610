use leptos::prelude::*;

use crate::models::paragraphs;
use crate::state::AppState;

/// Generated blog display: the paragraph view is derived from the raw
/// text on every render, plus the one-shot feedback buttons.
#[component]
pub fn BlogView() -> impl IntoView {
    let state = expect_context::<AppState>();

    view! {
        {move || {
            state.blog.get().map(|text| {
                view! {
                    <section class="blog-container">
                        <h2>"Your Generated Blog:"</h2>
                        <div class="blog-content">
                            {paragraphs(&text)
                                .into_iter()
                                .map(|para| view! { <p>{para}</p> })
                                .collect_view()}
                        </div>
                        <FeedbackBar />
                    </section>
                }
            })
        }}
    }
}

/// Thumbs-up/down row. Hidden after one submission until the next
/// generation resets it.
#[component]
fn FeedbackBar() -> impl IntoView {
    let state = expect_context::<AppState>();

    let feedback_notice = state.feedback_notice;
    let feedback_given = state.feedback_given;

    let on_like = {
        let state = state.clone();
        move |_| state.send_feedback(true)
    };
    let on_dislike = move |_| state.send_feedback(false);

    view! {
        <div class="feedback-bar">
            {move || {
                feedback_notice.get().map(|notice| {
                    view! { <p class="feedback-notice">{notice}</p> }
                })
            }}
            {move || {
                (!feedback_given.get()).then(|| {
                    view! {
                        <div class="feedback-buttons">
                            <p>"Was this blog helpful?"</p>
                            <button on:click=on_like.clone()>"👍 Yes"</button>
                            <button on:click=on_dislike.clone()>"👎 No"</button>
                        </div>
                    }
                })
            }}
        </div>
    }
}
