//! Launcher plugin for searching Wikipedia.
//!
//! [`adapter::Plugin`] implements the launcher contract (startup, search,
//! execute, render preview). [`handler::WikiSearchServer`] exposes it to a
//! host over MCP on stdio.

pub mod adapter;
pub mod handler;
pub mod preview;
pub mod shell;
pub mod tools;

pub use adapter::{DisplayItem, Payload, Plugin, RenderSink, ResultSink, SearchOutcome};
pub use handler::WikiSearchServer;
pub use shell::{Shell, ShellError, SystemShell};
