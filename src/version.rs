// Build-time version from Cargo.toml

/// Package version (from Cargo.toml).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Package name (from Cargo.toml); also the HTTP user agent product.
pub const NAME: &str = env!("CARGO_PKG_NAME");
