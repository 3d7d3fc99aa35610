use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::models::GenerateBlogRequest;

const MAX_TOPIC_LENGTH: usize = 200;
const MAX_WORD_COUNT: u32 = 2000;

/// Shared application state, provided via Leptos context.
#[derive(Clone)]
pub struct AppState {
    // --- Read signals (for components to subscribe to) ---
    pub topic: ReadSignal<String>,
    pub word_count: ReadSignal<String>,
    pub tone: ReadSignal<String>,
    /// Canonical raw text of the last generated blog. The paragraph view
    /// is derived from this at render time, never the other way round.
    pub blog: ReadSignal<Option<String>>,
    pub is_loading: ReadSignal<bool>,
    pub error: ReadSignal<Option<String>>,
    pub feedback_given: ReadSignal<bool>,
    pub feedback_notice: ReadSignal<Option<String>>,

    // --- Write signals (for mutating state) ---
    pub set_topic: WriteSignal<String>,
    pub set_word_count: WriteSignal<String>,
    pub set_tone: WriteSignal<String>,
    pub set_blog: WriteSignal<Option<String>>,
    pub set_is_loading: WriteSignal<bool>,
    pub set_error: WriteSignal<Option<String>>,
    pub set_feedback_given: WriteSignal<bool>,
    pub set_feedback_notice: WriteSignal<Option<String>>,
}

impl AppState {
    /// Create a new `AppState` and provide it in the current Leptos context.
    pub fn provide() -> Self {
        let (topic, set_topic) = signal(String::new());
        let (word_count, set_word_count) = signal("500".to_string());
        let (tone, set_tone) = signal("formal".to_string());
        let (blog, set_blog) = signal(None::<String>);
        let (is_loading, set_is_loading) = signal(false);
        let (error, set_error) = signal(None::<String>);
        let (feedback_given, set_feedback_given) = signal(false);
        let (feedback_notice, set_feedback_notice) = signal(None::<String>);

        let state = Self {
            topic,
            word_count,
            tone,
            blog,
            is_loading,
            error,
            feedback_given,
            feedback_notice,
            set_topic,
            set_word_count,
            set_tone,
            set_blog,
            set_is_loading,
            set_error,
            set_feedback_given,
            set_feedback_notice,
        };

        provide_context(state.clone());
        state
    }

    /// Controlled word-count input: keep the field as typed only while it
    /// is empty or a number within the maximum; drop any other edit.
    pub fn update_word_count(&self, value: String) {
        if value.is_empty() {
            self.set_word_count.set(value);
            return;
        }
        if let Ok(n) = value.parse::<u32>() {
            if n <= MAX_WORD_COUNT {
                self.set_word_count.set(value);
            }
        }
    }

    /// Validate the form and request a generation. Invalid input shows an
    /// error and makes no network call.
    pub fn generate(&self) {
        let topic = self.topic.get_untracked().trim().to_string();
        if topic.is_empty() {
            self.set_error.set(Some("Please enter a blog topic".to_string()));
            return;
        }
        if topic.chars().count() > MAX_TOPIC_LENGTH {
            self.set_error
                .set(Some("Topic must be 200 characters or less".to_string()));
            return;
        }
        let word_count = match self.word_count.get_untracked().parse::<u32>() {
            Ok(n) if (1..=MAX_WORD_COUNT).contains(&n) => n,
            _ => {
                self.set_error
                    .set(Some("Word count must be a number between 1 and 2000".to_string()));
                return;
            }
        };
        let tone = self.tone.get_untracked();

        self.set_error.set(None);
        self.set_is_loading.set(true);
        self.set_feedback_given.set(false);
        self.set_feedback_notice.set(None);

        let state = self.clone();
        spawn_local(async move {
            let request = GenerateBlogRequest { topic, word_count, tone };
            match api::generate_blog(&request).await {
                Ok(blog) => {
                    state.set_blog.set(Some(blog));
                }
                Err(e) => {
                    log::error!("Failed to generate blog: {e}");
                    // Previously displayed content stays on screen
                    state
                        .set_error
                        .set(Some(format!("Failed to generate blog: {e}")));
                }
            }
            state.set_is_loading.set(false);
        });
    }

    /// Submit a thumbs-up/down for the currently displayed blog. One
    /// submission per generation; reset by the next `generate`.
    pub fn send_feedback(&self, liked: bool) {
        if self.feedback_given.get_untracked() {
            return;
        }
        let Some(blog) = self.blog.get_untracked() else {
            return;
        };

        let state = self.clone();
        spawn_local(async move {
            match api::submit_feedback(&blog, liked).await {
                Ok(()) => {
                    state.set_feedback_given.set(true);
                    state
                        .set_feedback_notice
                        .set(Some("Feedback submitted successfully!".to_string()));
                }
                Err(e) => {
                    log::error!("Failed to submit feedback: {e}");
                    state
                        .set_feedback_notice
                        .set(Some(format!("Failed to submit feedback: {e}")));
                }
            }
        });
    }
}
