use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;
use tracing::{debug, warn};

use crate::constants::{EMPTY_LIST_MARKER, HTML_ENTITIES, SUBSCRIBER_BLOCK_PATTERN};
use crate::error::{CheckError, Result};
use crate::majordomo::address::parse_address;

static SUBSCRIBER_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(SUBSCRIBER_BLOCK_PATTERN).expect("subscriber block pattern is a valid regex")
});

/// Pull the subscriber addresses out of a `who-short` admin page.
///
/// The page must contain exactly one subscriber block, unless it is the
/// server's "nobody subscribed" page, which yields an empty set.
pub fn extract_subscribers(page: &str) -> Result<BTreeSet<String>> {
    let blocks: Vec<&str> = SUBSCRIBER_BLOCK
        .captures_iter(page)
        .filter_map(|c| c.get(1).map(|m| m.as_str()))
        .collect();

    let [block] = blocks.as_slice() else {
        if page.contains(EMPTY_LIST_MARKER) {
            debug!("who-short page reports an empty list");
            return Ok(BTreeSet::new());
        }
        return Err(CheckError::Parse(format!(
            "Could not find list of subscribers (found {} candidate blocks)",
            blocks.len()
        )));
    };

    let block = unescape_entities(block);
    let subscribers: BTreeSet<String> = block
        .split(['\r', '\n'])
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| {
            let parsed = parse_address(line);
            if parsed.is_none() {
                warn!(line, "skipping subscriber line without an address");
            }
            parsed
        })
        .collect();

    debug!(count = subscribers.len(), "parsed subscriber block");
    Ok(subscribers)
}

fn unescape_entities(text: &str) -> String {
    HTML_ENTITIES
        .iter()
        .fold(text.to_string(), |acc, (entity, ch)| acc.replace(entity, ch))
}
