pub mod blog;
pub mod form;
