use async_trait::async_trait;
use reqwest::{Client, Request};
use std::collections::BTreeSet;
use std::fmt;
use tracing::{debug, error, info};

use crate::constants::{ADMIN_PATH, WHO_FUNCTION};
use crate::error::{CheckError, Result};
use crate::majordomo::MembershipSource;
use crate::majordomo::mutation::{Mutation, MutationForm};
use crate::majordomo::scrape::extract_subscribers;

/// Wraps the majordomo2 `mj_wwwadm` web interface for a single list.
#[derive(Clone)]
pub struct MajordomoClient {
    http: Client,
    host: String,
    endpoint: String,
    list: String,
    password: String,
}

impl fmt::Debug for MajordomoClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MajordomoClient")
            .field("endpoint", &self.endpoint)
            .field("list", &self.list)
            .finish_non_exhaustive()
    }
}

impl MajordomoClient {
    pub fn new(
        http: Client,
        host: impl Into<String>,
        list: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        let host = host.into();
        Self {
            http,
            endpoint: format!("https://{}{}", host, ADMIN_PATH),
            host,
            list: list.into(),
            password: password.into(),
        }
    }

    /// Use a full admin URL instead of `https://<host>/mj/mj_wwwadm`
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Build the `who-short` request without sending it
    pub fn build_fetch_request(&self) -> Result<Request> {
        let request = self
            .http
            .get(&self.endpoint)
            .query(&[
                ("passw", self.password.as_str()),
                ("list", self.list.as_str()),
                ("func", WHO_FUNCTION),
            ])
            .build()?;
        Ok(request)
    }

    /// Build the form POST for a membership change without sending it
    pub fn build_mutation_request<I, S>(
        &self,
        mutation: Mutation,
        addresses: I,
    ) -> Result<Request>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let form = MutationForm::new(mutation, addresses, &self.list, &self.password);
        let request = self.http.post(&self.endpoint).form(&form).build()?;
        Ok(request)
    }

    pub async fn add_subscribers<I, S>(&self, addresses: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.submit(Mutation::Subscribe, addresses).await
    }

    pub async fn remove_subscribers<I, S>(&self, addresses: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.submit(Mutation::Unsubscribe, addresses).await
    }

    async fn submit<I, S>(&self, mutation: Mutation, addresses: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let request = self.build_mutation_request(mutation, addresses)?;
        info!(
            host = %self.host,
            list = %self.list,
            func = mutation.function(),
            "submitting membership change"
        );

        let response = self.http.execute(request).await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(
                status = status.as_u16(),
                list = %self.list,
                "membership change rejected"
            );
            return Err(CheckError::Submission {
                status: status.as_u16(),
                body,
            });
        }
        Ok(())
    }
}

#[async_trait]
impl MembershipSource for MajordomoClient {
    async fn fetch_current_subscribers(&self) -> Result<BTreeSet<String>> {
        let request = self.build_fetch_request()?;
        debug!(host = %self.host, list = %self.list, "fetching who-short page");

        let response = self.http.execute(request).await?.error_for_status()?;
        let page = response.text().await?;
        extract_subscribers(&page)
    }
}
