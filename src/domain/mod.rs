//! Domain layer containing command definitions and argument types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, enums, errors)
//! - `argument` - Value types, converted values and argument schemas
//! - `command` - Command builder and the immutable command definition

pub mod argument;
pub mod command;
pub mod foundation;
