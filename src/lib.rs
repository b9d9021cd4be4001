#![deny(clippy::all)]

pub mod breakpoint;
pub mod config;
pub mod view;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::{Format, Log};

const DEFAULT_LOG_FILTER: &str = "music_server_web=info,music_server_client=info";

pub fn init_tracing(log: &Log) -> Result<(), TryInitError> {
    let registry = tracing_subscriber::registry().with(
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
    );

    match (log.format, log.time) {
        (Format::Plain, true) => registry.with(fmt::layer()).try_init(),
        (Format::Plain, false) => registry.with(fmt::layer().without_time()).try_init(),
        (Format::Json, true) => registry.with(fmt::layer().json()).try_init(),
        (Format::Json, false) => registry.with(fmt::layer().json().without_time()).try_init(),
    }
}
