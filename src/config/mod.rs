mod client;
mod log;

pub use client::Client;
use figment::providers::{Env, Serialized};
use figment::Figment;
pub use log::{Format, Log};
use serde::Deserialize;

use crate::breakpoint::Viewport;

pub const ENV_PREFIX: &str = "MUSIC_SERVER_";

#[derive(Debug, Deserialize)]
pub struct Config {
    pub client: Client,
    pub viewport: Viewport,
    pub log: Log,
}

impl Config {
    /// Defaults overridden by `MUSIC_SERVER_<SECTION>__<KEY>` environment variables.
    pub fn figment() -> Figment {
        Self::defaults().merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    fn defaults() -> Figment {
        Figment::new()
            .join(Serialized::default("client", Client::default()))
            .join(Serialized::default("viewport", Viewport::default()))
            .join(Serialized::default("log", Log::default()))
    }

    pub fn new() -> Result<Self, figment::Error> {
        Self::figment().extract()
    }
}
