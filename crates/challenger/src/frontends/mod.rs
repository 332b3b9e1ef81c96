//! Tree frontends for Challenger
//!
//! Implementations of the `TreeFrontend` trait for the parser outputs
//! Challenger understands.

pub mod estree;

pub use estree::EstreeFrontend;
