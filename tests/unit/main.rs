//! Unit test suite entry point.

mod classifier_tests;
mod refine_scenarios;
mod session_tests;
