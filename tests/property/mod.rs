//! Property-based tests for the payload generator

mod determinism;
