//! Integration test modules.

mod page_flow;
mod wrappers;
