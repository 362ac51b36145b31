//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. Every command that touches the
//! resume opens its own file-backed store from the resolved
//! [`StoreConfig`](crate::config::StoreConfig), so each invocation sees
//! whatever the previous one persisted.

pub mod completions;
pub mod dispatcher;
pub mod display;
pub mod education;
pub mod experience;
pub mod personal;
pub mod project;
pub mod reset;
pub mod show;
pub mod skills;

pub use dispatcher::{open_store, Command, CommandDispatcher, CommandResult};
