//! Catalog API access.

mod client;
pub mod interceptor;
pub mod request;

pub use client::{Client, Error, Request};
