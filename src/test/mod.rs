//! Testing utilities shared by the unit tests, the integration tests and the benchmarks.

pub mod set;
