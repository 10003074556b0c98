//! Property-based test suite entry point.

mod refine_properties;
