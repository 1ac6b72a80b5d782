//! Argument module - typed argument declarations and token conversion.

mod schema;
mod schema_builder;
mod typed_value;
mod value_type;

pub use schema::ArgumentSchema;
pub use schema_builder::{boolean, date, number, object, string, ArgumentSchemaBuilder};
pub use typed_value::TypedValue;
pub use value_type::ValueType;
