//! Shared data model for the privacy swap router.
//!
//! These types are the vocabulary every other crate speaks: assets known to
//! the swap service, quote requests/responses, remote execution statuses and
//! the events surfaced to callers while a swap progresses.

pub mod models;

pub use models::*;
