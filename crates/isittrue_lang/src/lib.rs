//! Language detection and localized strings for IsItTrue.
//!
//! Every reply the assistant produces is language-aware: the model is
//! instructed to answer in the language detected from the user's text,
//! and the fixed transport strings (greetings, error and quota
//! messages) are looked up from one data-driven locale table with a
//! single French fallback record.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod detect;
mod locale;

pub use detect::{DEFAULT_LANGUAGE, DetectedLanguage, LanguageDetector};
pub use locale::{Locale, locale_for, message_locale_for};
