pub mod address;
pub mod client;
pub mod mutation;
pub mod scrape;

use async_trait::async_trait;
use std::collections::BTreeSet;

use crate::error::Result;

pub use address::parse_address;
pub use client::MajordomoClient;
pub use mutation::{Mutation, MutationForm};
pub use scrape::extract_subscribers;

/// Anything that can report the current membership of one list.
///
/// The check logic only depends on this trait, so the scraping details stay
/// inside the majordomo client.
#[async_trait]
pub trait MembershipSource: Send + Sync {
    async fn fetch_current_subscribers(&self) -> Result<BTreeSet<String>>;
}
