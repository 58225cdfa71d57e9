//! Instance address resolution: candidate discovery over a remote
//! transport, liveness probing, and the orchestration between the two.

pub mod finder;
pub mod probe;
pub mod resolver;
pub mod source;
