//! Query string models.
//!
//! Every field is always serialized, so omitted arguments still reach the
//! server as their defaults.

pub mod movie;
