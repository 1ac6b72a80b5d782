//! Argument schema - immutable declaration of one command argument.

use serde::Serialize;

use super::{TypedValue, ValueType};
use crate::domain::foundation::ConversionError;

/// Declaration of a single command argument.
///
/// Only constructed through [`ArgumentSchemaBuilder`](super::ArgumentSchemaBuilder),
/// which guarantees a non-empty name and a default that is legal for the type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArgumentSchema {
    name: String,
    value_type: ValueType,
    required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    default: Option<TypedValue>,
}

impl ArgumentSchema {
    pub(super) fn new(
        name: String,
        value_type: ValueType,
        required: bool,
        default: Option<TypedValue>,
    ) -> Self {
        Self {
            name,
            value_type,
            required,
            default,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value_type(&self) -> ValueType {
        self.value_type
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Returns the pre-converted default, if any.
    pub fn default_value(&self) -> Option<&TypedValue> {
        self.default.as_ref()
    }

    /// Returns true if `raw` is acceptable for this argument's type.
    pub fn accepts(&self, raw: &str) -> bool {
        self.value_type.is(raw)
    }

    /// Converts a raw token through this argument's type.
    pub fn convert(&self, raw: &str) -> Result<TypedValue, ConversionError> {
        self.value_type.convert_value(raw)
    }
}
