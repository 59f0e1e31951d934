//! Unit tests for chartfield.

mod chart_tests;
mod color_tests;
mod locale_tests;
mod snapshot_tests;
mod surface_tests;
