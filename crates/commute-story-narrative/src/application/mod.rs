//! Command and query entry points used by the scroll tracker and display
//! components.

pub mod command_handlers;
pub mod query_handlers;
