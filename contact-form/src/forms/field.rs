//! Contact form fields and their input configuration
//!
//! [`Field`] names the four inputs of the contact form in declaration order.
//! That order is also the order in which validation errors are displayed.
//! [`FormField`] carries the rendering attributes of one input.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the contact form's inputs
///
/// The derived `Ord` follows declaration order, which is the display order
/// of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    /// Given name, required, at least five characters
    FirstName,
    /// Family name, required
    LastName,
    /// Email address, required and well-formed
    Email,
    /// Free-form message, never validated
    Message,
}

impl Field {
    /// All fields in declaration order
    pub const ALL: [Self; 4] = [Self::FirstName, Self::LastName, Self::Email, Self::Message];

    /// The fields checked on submission
    pub const REQUIRED: [Self; 3] = [Self::FirstName, Self::LastName, Self::Email];

    /// Form field name, also used in error messages
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Message => "message",
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First Name*",
            Self::LastName => "Last Name*",
            Self::Email => "Email*",
            Self::Message => "Message",
        }
    }

    /// Whether the field must be filled in before submission
    #[must_use]
    pub const fn is_required(self) -> bool {
        !matches!(self, Self::Message)
    }

    /// Element id of the slot holding this field's error message
    #[must_use]
    pub fn error_slot_id(self) -> String {
        format!("{}-error", self.name())
    }

    /// Default rendering configuration for this field
    #[must_use]
    pub fn form_field(self) -> FormField {
        let kind = match self {
            Self::FirstName | Self::LastName => FieldKind::Input(InputType::Text),
            Self::Email => FieldKind::Input(InputType::Email),
            Self::Message => FieldKind::Textarea { rows: Some(5) },
        };
        let placeholder = match self {
            Self::FirstName => Some("Edd"),
            Self::LastName => Some("Burke"),
            Self::Email => Some("bluebill1049@hotmail.com"),
            Self::Message => None,
        };

        FormField {
            field: self,
            kind,
            label: self.label().to_string(),
            placeholder: placeholder.map(str::to_string),
            required: self.is_required(),
            htmx: HtmxFieldAttrs::default(),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown field name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// HTML input types used by the contact form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputType {
    /// Text input (default)
    #[default]
    Text,
    /// Email input
    Email,
}

impl InputType {
    /// Get the HTML type attribute value
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
        }
    }
}

impl fmt::Display for InputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Kind of form field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    /// Standard input field
    Input(InputType),
    /// Textarea for multi-line text
    Textarea {
        /// Number of visible text lines
        rows: Option<u32>,
    },
}

/// A form field with all its rendering attributes
#[derive(Debug, Clone)]
pub struct FormField {
    /// Which contact form input this is
    pub field: Field,
    /// Field kind (input or textarea)
    pub kind: FieldKind,
    /// Label text
    pub label: String,
    /// Placeholder text
    pub placeholder: Option<String>,
    /// Whether the field is marked required
    pub required: bool,
    /// HTMX attributes for live validation
    pub htmx: HtmxFieldAttrs,
}

impl FormField {
    /// Field name used for form submission
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.field.name()
    }
}

/// HTMX-specific attributes for form fields
#[derive(Debug, Clone, Default)]
pub struct HtmxFieldAttrs {
    /// hx-post URL
    pub post: Option<String>,
    /// hx-target selector
    pub target: Option<String>,
    /// hx-swap strategy
    pub swap: Option<String>,
    /// hx-trigger event
    pub trigger: Option<String>,
}
