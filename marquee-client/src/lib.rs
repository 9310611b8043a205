//! Marquee movie catalog client.
//!
//! Holds the navigation table of the catalog's pages and the client used to
//! reach the catalog API. [`view`] composes both into the data each page
//! loads.

pub mod cli;
pub mod config;
pub mod http;
pub mod nav;
pub mod view;
