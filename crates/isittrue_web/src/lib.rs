//! Web collaborators for IsItTrue: page extraction and search.
//!
//! Both collaborators degrade gracefully: an unreachable page becomes
//! "URL found, content absent" and any search failure becomes an empty
//! result list. Neither ever aborts a request.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod extract;
mod search;

pub use extract::{ContentExtractor, DEFAULT_MAX_ARTICLE_CHARS, find_url};
pub use search::{DEFAULT_MAX_QUERY_CHARS, SearchClient, render_web_context};
