mod index;

use concat_string::concat_string;
use music_server_types::ResponseResult;
use serde::de::DeserializeOwned;

use crate::constant::DEFAULT_BASE_URL;
use crate::error::ClientError;

#[derive(Debug, Clone)]
pub struct Client {
    client: reqwest::Client,
    base_url: String,
}

impl Client {
    pub fn new(base_url: String) -> Self {
        Self { client: Default::default(), base_url }
    }

    pub fn new_with_client(client: reqwest::Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Prefixes `path` with the base URL. No separator is inserted, so `path`
    /// is expected to start with `/` unless the base URL already ends with one.
    pub fn url(&self, path: &str) -> String {
        concat_string!(self.base_url, path)
    }

    async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<ResponseResult<R>, ClientError> {
        let url = self.url(path);
        tracing::debug!(%url, "sending index request");

        let body = self.client.get(url).send().await?.error_for_status()?.bytes().await?;
        let response: ResponseResult<R> = serde_json::from_slice(&body)?;
        if let Some(err) = response.err.as_deref() {
            tracing::warn!(path, err, "index request returned an error");
        }
        Ok(response)
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL.to_owned())
    }
}
