//! Integration tests for the resolution flow, driven through the public
//! crate APIs with deterministic fakes.

pub mod fakes;

mod finders;
mod resolve;
