//! Single test binary entry point.
//!
//! All tests compile into one binary to keep linking to a single pass.
//!
//! Structure:
//! - helpers: fixtures and a recording host
//! - unit: Single-component unit tests
//! - integration: Host, surface and export workflows

mod unit;
