#![deny(clippy::all)]

pub mod constant;
pub mod index;
pub mod response;

pub use response::{EnvelopeError, ResponseResult};
