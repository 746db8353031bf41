//! Web search result types.

use serde::{Deserialize, Serialize};

/// One ranked result from the web search provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Result title
    pub title: String,
    /// Short excerpt from the page
    pub snippet: String,
    /// Resolved target link
    pub link: String,
}
