//! Catalog — ready-made harnesses for a few competition problems.
//!
//! Each module exposes the problem's bounds (`config`), a naive and an
//! optimized solution, and `harness()` wiring them together with the
//! problem's fixed cases, generator and oracle.

pub mod binarian;
pub mod count_bits;
pub mod latency;
