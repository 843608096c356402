//! # greeting_core
//!
//! Provides [`hello::hello_world`], a pure function that always returns
//! `"Hello world!"` and is safe to call from any thread.

pub mod hello;

/// Version of this crate, as published in `Cargo.toml`.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
