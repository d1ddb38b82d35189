//! Common routes related to admin features

pub mod perf;

pub use perf::*;
