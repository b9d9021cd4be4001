#![deny(clippy::all)]

mod client;
pub mod constant;
mod error;
#[cfg(any(test, feature = "test"))]
pub mod mock;

pub use client::Client;
pub use error::ClientError;
pub use music_server_types as types;
