//! Compile-time build information.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// `dice-calculator <date> (<commit>)`, as printed by `--version`.
pub fn version_line() -> String {
    format!("dice-calculator {} ({})", BUILD_DATE, BUILD_COMMIT)
}
