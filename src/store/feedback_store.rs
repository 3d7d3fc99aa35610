use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::models::{FeedbackSummary, FeedbackTotals, Polarity};

/// Capacity of each per-polarity list. Appending beyond it evicts the
/// oldest entry first.
pub const MAX_FEEDBACK_ENTRIES: usize = 1000;

/// How many entries per polarity the read path returns.
pub const RECENT_LIMIT: usize = 10;

/// In-memory feedback sink: one capped FIFO list per polarity.
///
/// Single-process only. The mutex satisfies the server's `Send + Sync`
/// state bound; it is not a substitute for real concurrency control if
/// this is ever deployed as multiple processes.
#[derive(Clone, Default)]
pub struct FeedbackStore {
    inner: Arc<Mutex<Lists>>,
}

#[derive(Default)]
struct Lists {
    positive: VecDeque<String>,
    negative: VecDeque<String>,
}

impl Lists {
    fn list_mut(&mut self, polarity: Polarity) -> &mut VecDeque<String> {
        match polarity {
            Polarity::Positive => &mut self.positive,
            Polarity::Negative => &mut self.negative,
        }
    }
}

impl FeedbackStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry, evicting the oldest when the list is at capacity.
    /// Returns the updated totals.
    pub fn append(&self, polarity: Polarity, text: String) -> FeedbackTotals {
        let mut lists = self.lock();
        {
            let list = lists.list_mut(polarity);
            if list.len() >= MAX_FEEDBACK_ENTRIES {
                list.pop_front();
            }
            list.push_back(text);
        }
        FeedbackTotals {
            total_positive: lists.positive.len(),
            total_negative: lists.negative.len(),
        }
    }

    /// The most recent `n` entries for one polarity, oldest first.
    pub fn recent(&self, polarity: Polarity, n: usize) -> Vec<String> {
        let mut lists = self.lock();
        tail(lists.list_mut(polarity), n)
    }

    pub fn counts(&self) -> FeedbackTotals {
        let lists = self.lock();
        FeedbackTotals {
            total_positive: lists.positive.len(),
            total_negative: lists.negative.len(),
        }
    }

    /// The read-path payload: last [`RECENT_LIMIT`] entries per polarity
    /// plus totals.
    pub fn summary(&self) -> FeedbackSummary {
        let lists = self.lock();
        FeedbackSummary {
            positive_feedback: tail(&lists.positive, RECENT_LIMIT),
            negative_feedback: tail(&lists.negative, RECENT_LIMIT),
            total_positive: lists.positive.len(),
            total_negative: lists.negative.len(),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Lists> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn tail(list: &VecDeque<String>, n: usize) -> Vec<String> {
    list.iter()
        .skip(list.len().saturating_sub(n))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_returns_running_totals() {
        let store = FeedbackStore::new();
        let totals = store.append(Polarity::Positive, "great".into());
        assert_eq!(totals, FeedbackTotals { total_positive: 1, total_negative: 0 });
        let totals = store.append(Polarity::Negative, "meh".into());
        assert_eq!(totals, FeedbackTotals { total_positive: 1, total_negative: 1 });
    }

    #[test]
    fn full_list_evicts_oldest_entry_first() {
        let store = FeedbackStore::new();
        for i in 0..MAX_FEEDBACK_ENTRIES {
            store.append(Polarity::Positive, format!("entry {i}"));
        }
        assert_eq!(store.counts().total_positive, MAX_FEEDBACK_ENTRIES);

        store.append(Polarity::Positive, "one more".into());

        assert_eq!(store.counts().total_positive, MAX_FEEDBACK_ENTRIES);
        let recent = store.recent(Polarity::Positive, MAX_FEEDBACK_ENTRIES);
        assert_eq!(recent.first().map(String::as_str), Some("entry 1"));
        assert_eq!(recent.last().map(String::as_str), Some("one more"));
    }

    #[test]
    fn eviction_does_not_touch_the_other_polarity() {
        let store = FeedbackStore::new();
        store.append(Polarity::Negative, "kept".into());
        for i in 0..=MAX_FEEDBACK_ENTRIES {
            store.append(Polarity::Positive, format!("entry {i}"));
        }
        assert_eq!(store.counts().total_negative, 1);
        assert_eq!(store.recent(Polarity::Negative, 10), vec!["kept".to_string()]);
    }

    #[test]
    fn summary_returns_last_ten_in_order() {
        let store = FeedbackStore::new();
        for i in 0..25 {
            store.append(Polarity::Positive, format!("entry {i}"));
        }
        let summary = store.summary();
        assert_eq!(summary.total_positive, 25);
        assert_eq!(summary.positive_feedback.len(), RECENT_LIMIT);
        assert_eq!(summary.positive_feedback[0], "entry 15");
        assert_eq!(summary.positive_feedback[9], "entry 24");
        assert!(summary.negative_feedback.is_empty());
        assert_eq!(summary.total_negative, 0);
    }
}
