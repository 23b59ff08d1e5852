//! Built-in annotation kinds for data-model validation and display metadata.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::annotation::Annotation;

/// Length constraint on a string-valued member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringLength {
    /// Maximum accepted length (canonical field).
    pub maximum_length: i64,
    /// Minimum accepted length.
    pub minimum_length: i64,
}

impl StringLength {
    /// Constraint with the given maximum length and no minimum.
    pub fn new(maximum_length: i64) -> Self {
        Self {
            maximum_length,
            minimum_length: 0,
        }
    }

    /// Sets the minimum accepted length.
    pub fn minimum(mut self, minimum_length: i64) -> Self {
        self.minimum_length = minimum_length;
        self
    }
}

impl Annotation for StringLength {}

/// Presentation metadata for a type or member.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DisplayMeta {
    /// Display name (canonical field).
    pub name: Option<String>,
    pub short_name: Option<String>,
    pub description: Option<String>,
    pub prompt: Option<String>,
    pub group_name: Option<String>,
    pub order: Option<i32>,
}

impl DisplayMeta {
    /// Metadata carrying a display name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn short_name(mut self, short_name: impl Into<String>) -> Self {
        self.short_name = Some(short_name.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    pub fn group_name(mut self, group_name: impl Into<String>) -> Self {
        self.group_name = Some(group_name.into());
        self
    }

    pub fn order(mut self, order: i32) -> Self {
        self.order = Some(order);
        self
    }
}

impl Annotation for DisplayMeta {}

/// Regular-expression constraint on a member's value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegularExpression {
    /// Pattern source (canonical field).
    pub pattern: String,
}

impl RegularExpression {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
        }
    }
}

impl Annotation for RegularExpression {}

/// Requires a member to equal another member of the same type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Compare {
    /// Name of the compared member (canonical field).
    pub other_property: String,
}

impl Compare {
    pub fn new(other_property: impl Into<String>) -> Self {
        Self {
            other_property: other_property.into(),
        }
    }
}

impl Annotation for Compare {}

/// Classification of the data a member carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataType {
    Custom,
    DateTime,
    Date,
    Time,
    Duration,
    PhoneNumber,
    Currency,
    Text,
    Html,
    MultilineText,
    EmailAddress,
    Password,
    Url,
    ImageUrl,
    CreditCard,
    PostalCode,
    Upload,
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Data-type classification annotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataTypeHint {
    /// Classification (canonical field).
    pub data_type: DataType,
    /// Free-form type name, set only for [`DataType::Custom`].
    pub custom_data_type: Option<String>,
}

impl DataTypeHint {
    pub fn new(data_type: DataType) -> Self {
        Self {
            data_type,
            custom_data_type: None,
        }
    }

    /// Custom classification identified by name.
    pub fn custom(name: impl Into<String>) -> Self {
        Self {
            data_type: DataType::Custom,
            custom_data_type: Some(name.into()),
        }
    }
}

impl Annotation for DataTypeHint {}

/// Marks a member as mandatory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Required {
    pub allow_empty_strings: bool,
}

impl Annotation for Required {}

/// Numeric range constraint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub minimum: f64,
    pub maximum: f64,
}

impl Range {
    pub fn new(minimum: f64, maximum: f64) -> Self {
        Self { minimum, maximum }
    }
}

impl Annotation for Range {}

/// Marks the identifying member of an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Key;

impl Annotation for Key {}
