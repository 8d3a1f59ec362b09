//! Support crate for the census benchmarks.
//!
//! The benchmark definitions live under `benches/`; this library target
//! exists so Cargo accepts the package.
