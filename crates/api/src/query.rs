//! Query parameter types for API handlers and pages.

use serde::Deserialize;

/// `?name=` on the search endpoint. A missing name matches everything.
#[derive(Debug, Deserialize)]
pub struct NameSearchParams {
    #[serde(default)]
    pub name: String,
}

/// `?notice=` carried across a redirect to show a one-shot flash message.
#[derive(Debug, Default, Deserialize)]
pub struct NoticeParams {
    pub notice: Option<String>,
}
