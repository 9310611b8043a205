//! Marquee data representations.
//!
//! These are the shapes exchanged with the catalog backend under `/api`.
//! Request models are serialized into query strings; response models are
//! deserialized from JSON bodies.

pub mod batch;
pub mod movie;
pub mod request;
pub mod response;
