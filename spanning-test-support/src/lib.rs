//! Shared test utilities used across spanning crates.
//!
//! [`tracing`](crate::tracing) captures spans and events so suites can assert their
//! instrumentation, and [`proptest_profile`] reads the environment overrides
//! that tune property-based suites in CI.

pub mod proptest_profile;
pub mod tracing;
