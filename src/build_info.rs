//! Compile-time build information, stamped by `build.rs`.

pub const BUILD_COMMIT: &str = env!("MAZERUN_COMMIT");
pub const BUILD_DATE: &str = env!("MAZERUN_DATE");

/// Version line printed by `mazerun --version`.
pub fn version_line() -> String {
    format!(
        "mazerun {} ({} {})",
        env!("CARGO_PKG_VERSION"),
        BUILD_DATE,
        BUILD_COMMIT
    )
}
