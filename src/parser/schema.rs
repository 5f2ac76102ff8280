//! The declarative receipt template schema.
//!
//! Positional parsing is only as good as the template it encodes; keeping
//! the binding as data means a different receipt layout is a new schema
//! value, not new branches. Each entry names the field, the literal label
//! prefix to strip from the recognized line (if any), and the coercion to
//! apply to the remaining text.

/// The type coercion applied to a field's raw text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coercion {
    /// Keep the stripped string verbatim; empty is permitted.
    Text,
    /// Parse as a signed integer.
    Integer,
    /// Parse as a float.
    Float,
    /// Parse as a timestamp using [`DATE_TIME_FORMAT`], after dropping the
    /// one trailing glyph OCR consistently appends to this line.
    DateTime,
}

/// One positional field binding of the receipt template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Canonical field name, used in the output record and in errors.
    pub name: &'static str,
    /// Literal label printed before the value on the receipt, stripped from
    /// the recognized text (first occurrence only). `None` for lines with no
    /// label, taken verbatim.
    pub prefix: Option<&'static str>,
    /// Coercion applied to the stripped text.
    pub coercion: Coercion,
}

/// Timestamp format of the receipt's Date/Time line. No space follows the
/// comma; that is how the template prints it.
pub const DATE_TIME_FORMAT: &str = "%d %b %Y,%I:%M %p";

/// The fixed 11-field receipt template, in top-to-bottom layout order.
///
/// Prefixes are the template's literal labels, which are not always equal to
/// the canonical field name ("Amount (NPR)" binds the "Amount" field,
/// "Qr Merchant Name" binds "Merchant Name").
pub const RECEIPT_SCHEMA: [FieldSpec; 11] = [
    FieldSpec {
        name: "Description",
        prefix: None,
        coercion: Coercion::Text,
    },
    FieldSpec {
        name: "Reference Code",
        prefix: Some("Reference Code"),
        coercion: Coercion::Integer,
    },
    FieldSpec {
        name: "Date/Time",
        prefix: Some("Date/Time"),
        coercion: Coercion::DateTime,
    },
    FieldSpec {
        name: "Channel",
        prefix: Some("Channel"),
        coercion: Coercion::Text,
    },
    FieldSpec {
        name: "Payment Attribute",
        prefix: Some("Payment Attribute"),
        coercion: Coercion::Text,
    },
    FieldSpec {
        name: "Service Name",
        prefix: Some("Service Name"),
        coercion: Coercion::Text,
    },
    FieldSpec {
        name: "Amount",
        prefix: Some("Amount (NPR)"),
        coercion: Coercion::Float,
    },
    FieldSpec {
        name: "Initiator",
        prefix: Some("Initiator"),
        coercion: Coercion::Text,
    },
    FieldSpec {
        name: "Merchant Name",
        prefix: Some("Qr Merchant Name"),
        coercion: Coercion::Text,
    },
    FieldSpec {
        name: "Remarks",
        prefix: Some("Remarks"),
        coercion: Coercion::Text,
    },
    FieldSpec {
        name: "Status",
        prefix: Some("Status"),
        coercion: Coercion::Text,
    },
];
