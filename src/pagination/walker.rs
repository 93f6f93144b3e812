//! The pagination walker

use super::merge::merge_results;
use crate::error::Result;
use crate::http::{FetchOutcome, HttpClient, RequestDescriptor};
use crate::types::{JsonValue, Lookup};
use tracing::debug;
use url::Url;

/// Follow `_links.next.href` chains and return a single merged response.
///
/// Hops are strictly sequential: each target depends on the previous
/// response. The walk is an explicit loop, so chain length is bounded only
/// by the upstream service, never by stack depth. Headers and the
/// quota-reporting flag are reused across hops; only the URL changes.
///
/// The merged result keeps the first page's `_links.self` identity and,
/// when quota reporting was requested, the quota observation of the final
/// request. A 404 anywhere finishes the walk with an empty result; a
/// requester or merge error aborts it and discards what was accumulated.
pub async fn follow_next(http: &HttpClient, mut request: RequestDescriptor) -> Result<Lookup> {
    let mut accumulated: Option<JsonValue> = None;

    loop {
        let FetchOutcome { body, quota } = http.get(&request).await?;

        let Some(page) = body else {
            return Ok(Lookup {
                result: None,
                quota: None,
            });
        };

        let next = next_href(&page)?;

        match (accumulated.take(), next) {
            (Some(previous), Some(href)) => {
                debug!(next = %href, "merging page and following next link");
                accumulated = Some(merge_results(&page, &previous)?);
                request.url = href;
                // The next href carries the full query string already
                request.query.clear();
            }
            (None, Some(href)) => {
                debug!(next = %href, "first page fetched, following next link");
                accumulated = Some(page);
                request.url = href;
                request.query.clear();
            }
            (Some(previous), None) => {
                let merged = merge_results(&page, &previous)?;
                return Ok(Lookup {
                    result: Some(merged),
                    quota,
                });
            }
            (None, None) => {
                return Ok(Lookup {
                    result: Some(page),
                    quota,
                });
            }
        }
    }
}

/// Extract and validate the next-page link of a response, if any.
fn next_href(page: &JsonValue) -> Result<Option<String>> {
    let href = page
        .get("_links")
        .and_then(|links| links.get("next"))
        .and_then(|next| next.get("href"))
        .and_then(JsonValue::as_str);

    match href {
        Some(href) => {
            Url::parse(href)?;
            Ok(Some(href.to_owned()))
        }
        None => Ok(None),
    }
}
