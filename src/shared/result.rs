/// Crate-wide Result alias.
/// Typed `DepVizError`s and adapter context both travel as `anyhow::Error`.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
