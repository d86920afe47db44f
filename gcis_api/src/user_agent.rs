/// Identifies this library to the upstream API on every request.
pub(crate) const DEFAULT_USER_AGENT: &str = concat!("gcis-rs/", env!("CARGO_PKG_VERSION"));
