//! Bounded-wait resolution of selector descriptors to page elements.

use std::time::Duration;

use chromiumoxide::{Element, Page};
use tokio::time::{sleep, Instant};
use tracing::{debug, trace};

use crate::errors::LocatorError;
use crate::types::{Query, Selector};

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Resolve `selector` to exactly one interactive element.
///
/// Polls the page until a match is present and exposes a clickable point, or
/// `timeout` elapses. An unknown selector kind fails before the first poll.
pub async fn resolve(
    page: &Page,
    selector: &Selector,
    timeout: Duration,
) -> Result<Element, LocatorError> {
    let query = selector.query()?;
    debug!(%selector, ?timeout, "resolving element");

    let deadline = Instant::now() + timeout;
    loop {
        if let Some(element) = try_query(page, &query).await {
            return Ok(element);
        }
        if Instant::now() >= deadline {
            return Err(LocatorError::ElementNotFound {
                selector: selector.to_string(),
                timeout,
            });
        }
        sleep(POLL_INTERVAL).await;
    }
}

/// Try the ordered `candidates` in sequence until one resolves, sharing a
/// single deadline across the whole chain.
pub async fn resolve_first(
    page: &Page,
    candidates: &[Selector],
    timeout: Duration,
) -> Result<Element, LocatorError> {
    // Compile up front so a bad kind anywhere in the chain fails fast.
    let queries = candidates
        .iter()
        .map(Selector::query)
        .collect::<Result<Vec<_>, _>>()?;

    let deadline = Instant::now() + timeout;
    loop {
        for (selector, query) in candidates.iter().zip(&queries) {
            if let Some(element) = try_query(page, query).await {
                debug!(%selector, "candidate resolved");
                return Ok(element);
            }
        }
        if Instant::now() >= deadline {
            return Err(LocatorError::ElementNotFound {
                selector: join_candidates(candidates),
                timeout,
            });
        }
        sleep(POLL_INTERVAL).await;
    }
}

/// Immediate lookup inside `parent`: the first CSS candidate that matches
/// wins. No wait is attempted; callers that need one fall back to a page-wide
/// [`resolve`].
pub async fn find_scoped(parent: &Element, candidates: &[&str]) -> Result<Element, LocatorError> {
    for css in candidates {
        match parent.find_element(*css).await {
            Ok(element) => {
                debug!(css, "scoped candidate resolved");
                return Ok(element);
            }
            Err(err) => trace!(css, %err, "scoped candidate missed"),
        }
    }
    Err(LocatorError::ElementNotFound {
        selector: candidates.join(", "),
        timeout: Duration::ZERO,
    })
}

async fn try_query(page: &Page, query: &Query) -> Option<Element> {
    let found = match query {
        Query::Css(css) => page.find_element(css.as_str()).await,
        Query::XPath(xpath) => page.find_xpath(xpath.as_str()).await,
    };
    match found {
        Ok(element) => match element.clickable_point().await {
            Ok(_) => Some(element),
            Err(err) => {
                trace!(%err, "match present but not yet clickable");
                None
            }
        },
        Err(_) => None,
    }
}

fn join_candidates(candidates: &[Selector]) -> String {
    candidates
        .iter()
        .map(Selector::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidate_chains_render_for_diagnostics() {
        let chain = [
            Selector::new("class", "fast-login"),
            Selector::new("class", "block--index-8"),
        ];
        assert_eq!(
            join_candidates(&chain),
            "class=fast-login, class=block--index-8"
        );
    }
}
