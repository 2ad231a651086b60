//! Adapters Layer - Hexagonal Architecture Outer Ring
//!
//! Implements the port traits defined in `crate::ports` with concrete
//! infrastructure, and hosts the console front end.
//!
//! Adapter categories:
//! - `console`: interactive menu over stdin/stdout
//! - `persistence`: file and in-memory container storage

pub mod console;
pub mod persistence;
