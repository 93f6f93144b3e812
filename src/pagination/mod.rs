//! Pagination following and partial-result merging
//!
//! Paginated endpoints answer one page at a time, each carrying an
//! embedded collection and, while more pages exist, a `_links.next.href`
//! pointer. This module walks such chains sequentially and assembles one
//! logical result: the first page's identity metadata survives, every
//! page's items are appended in order, and the final request's quota
//! observation is reported when asked for.

mod merge;
mod walker;

pub use merge::merge_results;
pub use walker::follow_next;
