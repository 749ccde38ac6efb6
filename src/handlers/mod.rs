//! HTTP handlers for site content, form submissions, and the page view.

pub mod content;
pub mod forms;
pub mod page;
