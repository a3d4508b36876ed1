// Adapters layer: concrete hosts and capabilities around the core handler.

pub mod http;
pub mod lambda;
pub mod random;
