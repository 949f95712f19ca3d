//! Application layer holding the partner URL override.
//!
//! `PaymentUrlOverride` is called once per payment build with the assembled
//! request, the raw metadata found on the payment and the call origin. It is
//! stateless, so a single instance can serve any number of invocations.

pub mod override_rule;
