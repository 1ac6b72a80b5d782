//! dcommander - Declarative text command definitions
//!
//! Describe a text command once (name, prefix, cooldown, permission check,
//! handler and typed arguments) and get back an immutable, validated
//! [`Command`]. At invocation time each raw token is recognised and converted
//! by the [`ValueType`] its argument declares.
//!
//! Dispatching, tokenizing and rate limiting belong to the surrounding
//! registry; this crate only produces definitions and converts tokens.
//!
//! # Example
//!
//! ```
//! use dcommander::{command, number, ConfigurationError, ValueType};
//!
//! fn define() -> Result<dcommander::Command, ConfigurationError> {
//!     command("roll")
//!         .execute(|instructions| {
//!             let _sides = instructions.arguments.number("sides");
//!         })?
//!         .arguments(vec![number("sides")])?
//!         .build()
//! }
//!
//! let roll = define().unwrap();
//! let sides = &roll.arguments()[0];
//! assert_eq!(sides.value_type(), ValueType::Number);
//! assert_eq!(sides.convert("0x14").unwrap().as_number(), Some(20));
//! assert!(sides.convert("twenty").is_err());
//! ```

pub mod config;
pub mod domain;
pub mod telemetry;

pub use domain::argument::{
    boolean, date, number, object, string, ArgumentSchema, ArgumentSchemaBuilder, TypedValue,
    ValueType,
};
pub use domain::command::{
    command, ArgumentValues, Command, CommandBuilder, CommandInstructions,
};
pub use domain::foundation::{
    CommandFacet, ConfigurationError, ConversionError, Cooldown, ErrorCode, Invoker, InvokerId,
    SchemaError,
};
