//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `bikeshop_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    println!("bikeshop_core ping={}", bikeshop_core::ping());
    println!("bikeshop_core version={}", bikeshop_core::core_version());
}
