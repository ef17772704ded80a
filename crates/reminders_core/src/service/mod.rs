//! Shared-instance wiring for entry points.

pub mod locator;
