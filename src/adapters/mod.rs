/// Adapters layer - filesystem, process and console implementations of the
/// outbound ports
pub mod outbound;
