use crate::error::{ConnectivityError, Result};
use data::Params;
use url::Url;

/// Sends one GET with `params` as the query string and yields the raw body.
///
/// Implementations must not retry: one call is one request attempt.
pub trait Transport {
    fn fetch(&self, url: &Url, params: &Params) -> impl Future<Output = Result<String>> + Send;
}

#[derive(Debug, Clone)]
pub struct HttpTransport {
    http_client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(http_client: reqwest::Client) -> Self {
        Self { http_client }
    }
}

impl Transport for HttpTransport {
    async fn fetch(&self, url: &Url, params: &Params) -> Result<String> {
        // keep whatever query the endpoint already has, request params win
        let mut pairs: Vec<(String, String)> = url
            .query_pairs()
            .filter(|(key, _)| !params.contains_key(key))
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();
        pairs.extend(params.iter().map(|(key, value)| (key.clone(), value.to_string())));

        let mut url = url.clone();
        let query_string = serde_urlencoded::to_string(&pairs)?;
        url.set_query(Some(&query_string));

        let response = self.http_client.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ConnectivityError::Status { status, body }.into());
        }
        Ok(body)
    }
}
