//! Error types for conduit-sf-rest.
//!
//! This crate performs no local validation and adds no failure modes of its
//! own: every error an operation can produce originates in the HTTP layer
//! (transport failures, non-2xx statuses, unexpected response shapes), so
//! the client crate's error type is used directly.

pub use conduit_sf_client::{Error, ErrorKind, Result};
