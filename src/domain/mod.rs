//! Domain types of the partner URL override.
//!
//! Holds the payment request produced by the upstream builder, the payment
//! record it was built from, the decoded partner metadata and the ports the
//! override rule depends on.

pub mod metadata;
pub mod payment;
pub mod ports;
pub mod request;
