//! Snapshot test suite entry point.

mod draft_templates;
mod error_messages;
