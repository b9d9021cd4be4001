use derivative::Derivative;
use music_server_client::constant::DEFAULT_BASE_URL;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Derivative)]
#[derivative(Default)]
#[serde(default)]
pub struct Client {
    /// Prepended verbatim to every request path, so it should not end with `/`.
    #[derivative(Default(value = "DEFAULT_BASE_URL.to_owned()"))]
    pub base_url: String,
}

impl From<&Client> for music_server_client::Client {
    fn from(value: &Client) -> Self {
        Self::new(value.base_url.clone())
    }
}
