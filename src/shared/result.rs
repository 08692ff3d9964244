/// Crate-wide Result alias backed by `anyhow::Error`.
///
/// Adapters and use cases return this; the classification core itself never fails.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
