/// Adapters layer - Infrastructure implementations
///
/// This layer contains concrete implementations of the outbound ports,
/// providing the actual integration with the file system, network and console.
pub mod outbound;
