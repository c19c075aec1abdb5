//! Filename cleanup engine for downloaded books.
//!
//! Files whose names carry the `z-lib` marker are given a clean name (rule
//! table in [`naming`]), checked against a character allow-list, and hard
//! linked (or renamed) into one or more destination directories. Originals
//! that were placed everywhere can then be trashed in one batch.
//!
//! The public API is organised into layers:
//!
//! - **[`naming`]**: pure normalization rules and validation
//! - **[`selector`]** and **[`resources`]**: directory scan and idempotent link primitives
//! - **[`cleanup`]**: the run loop, outcome tracking and the trash gate
//! - **[`config`]**, **[`report`]**, **[`trash`]**: job setup, event stream, trash collaborator
//! - **[`commands`]**: top-level subcommand orchestration (`clean`, `check`, `version`)
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]

pub mod cleanup;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod exec;
pub mod logging;
pub mod naming;
pub mod operations;
pub mod platform;
pub mod report;
pub mod resources;
pub mod selector;
pub mod trash;
