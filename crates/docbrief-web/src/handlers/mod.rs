pub mod auth;
pub mod summarize;
