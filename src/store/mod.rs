pub mod feedback_store;
