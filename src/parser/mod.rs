//! Positional parsing of recognized lines into the typed record.
//!
//! The parser binds lines to fields strictly by index against the
//! [`RECEIPT_SCHEMA`] template: strip the field's literal label prefix,
//! coerce the remainder, fail on the first field that will not coerce.
//! There is no graceful degradation; a short line list aborts before any
//! field is touched.

pub mod record;
pub mod schema;

pub use record::KvpRecord;
pub use schema::{Coercion, FieldSpec, DATE_TIME_FORMAT, RECEIPT_SCHEMA};

use crate::core::errors::{ExtractionError, Stage};
use crate::extractor::RecognizedLine;
use chrono::NaiveDateTime;
use tracing::warn;

/// A coerced field value, produced per schema entry before record assembly.
#[derive(Debug, Clone, PartialEq)]
enum FieldValue {
    Text(String),
    Integer(i64),
    Float(f64),
    DateTime(NaiveDateTime),
}

/// Parses an ordered list of recognized lines into a [`KvpRecord`].
///
/// Requires at least as many lines as the template has fields; lines beyond
/// the template are ignored (trailing noise regions below the receipt body).
pub fn parse_fields(lines: &[RecognizedLine]) -> Result<KvpRecord, ExtractionError> {
    if lines.len() < RECEIPT_SCHEMA.len() {
        return Err(ExtractionError::structural(
            Stage::Parsing,
            format!(
                "expected {} recognized lines, got {}",
                RECEIPT_SCHEMA.len(),
                lines.len()
            ),
        ));
    }
    if lines.len() > RECEIPT_SCHEMA.len() {
        warn!(
            lines = lines.len(),
            template = RECEIPT_SCHEMA.len(),
            "ignoring recognized lines beyond the template"
        );
    }

    let mut values = Vec::with_capacity(RECEIPT_SCHEMA.len());
    for (spec, line) in RECEIPT_SCHEMA.iter().zip(lines) {
        values.push(coerce_field(spec, &line.text)?);
    }

    build_record(values)
}

/// Strips the field's label prefix and applies its coercion.
fn coerce_field(spec: &FieldSpec, text: &str) -> Result<FieldValue, ExtractionError> {
    let raw = match spec.prefix {
        Some(prefix) => text.replacen(prefix, "", 1),
        None => text.to_string(),
    };

    match spec.coercion {
        Coercion::Text => Ok(FieldValue::Text(raw)),
        Coercion::Integer => raw
            .trim()
            .parse::<i64>()
            .map(FieldValue::Integer)
            .map_err(|e| parse_error(spec.name, raw, e.to_string())),
        Coercion::Float => raw
            .trim()
            .parse::<f64>()
            .map(FieldValue::Float)
            .map_err(|e| parse_error(spec.name, raw, e.to_string())),
        Coercion::DateTime => {
            // The template's Date/Time line always carries one extra
            // trailing glyph of OCR noise; drop it before parsing.
            let mut chars = raw.chars();
            chars.next_back();
            let date_str = chars.as_str().trim();
            NaiveDateTime::parse_from_str(date_str, DATE_TIME_FORMAT)
                .map(FieldValue::DateTime)
                .map_err(|e| parse_error(spec.name, raw.clone(), e.to_string()))
        }
    }
}

fn parse_error(field: &'static str, value: String, reason: String) -> ExtractionError {
    ExtractionError::Parse {
        field,
        value,
        reason,
    }
}

/// Assembles the typed record from the coerced values, in schema order.
fn build_record(values: Vec<FieldValue>) -> Result<KvpRecord, ExtractionError> {
    let mut values = values.into_iter();

    let description = next_text(&mut values, "Description")?;
    let reference_code = match values.next() {
        Some(FieldValue::Integer(n)) => n,
        other => return Err(shape_mismatch("Reference Code", other)),
    };
    let date_time = match values.next() {
        Some(FieldValue::DateTime(dt)) => dt,
        other => return Err(shape_mismatch("Date/Time", other)),
    };
    let channel = next_text(&mut values, "Channel")?;
    let payment_attribute = next_text(&mut values, "Payment Attribute")?;
    let service_name = next_text(&mut values, "Service Name")?;
    let amount = match values.next() {
        Some(FieldValue::Float(v)) => v,
        other => return Err(shape_mismatch("Amount", other)),
    };
    let initiator = next_text(&mut values, "Initiator")?;
    let merchant_name = next_text(&mut values, "Merchant Name")?;
    let remarks = next_text(&mut values, "Remarks")?;
    let status = next_text(&mut values, "Status")?;

    Ok(KvpRecord {
        description,
        reference_code,
        date_time,
        channel,
        payment_attribute,
        service_name,
        amount,
        initiator,
        merchant_name,
        remarks,
        status,
    })
}

fn next_text(
    values: &mut impl Iterator<Item = FieldValue>,
    field: &'static str,
) -> Result<String, ExtractionError> {
    match values.next() {
        Some(FieldValue::Text(s)) => Ok(s),
        other => Err(shape_mismatch(field, other)),
    }
}

fn shape_mismatch(field: &'static str, value: Option<FieldValue>) -> ExtractionError {
    ExtractionError::structural(
        Stage::Parsing,
        format!("schema produced {value:?} for field '{field}'"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processors::BoundingBox;
    use chrono::NaiveDate;

    fn lines(texts: &[&str]) -> Vec<RecognizedLine> {
        texts
            .iter()
            .enumerate()
            .map(|(i, t)| RecognizedLine {
                region_index: i,
                bbox: BoundingBox::new(0.0, i as f32 * 30.0, 100.0, i as f32 * 30.0 + 20.0),
                text: t.to_string(),
            })
            .collect()
    }

    fn template_lines() -> Vec<RecognizedLine> {
        lines(&[
            "Payment of NPR 500",
            "Reference Code123456",
            "Date/Time05 Jan 2024,10:30 AMX",
            "ChannelMobile",
            "Payment AttributeQR",
            "Service NameElectricity",
            "Amount (NPR)500.00",
            "InitiatorJohn Doe",
            "Qr Merchant NameACME",
            "RemarksMonthly bill",
            "StatusSuccess",
        ])
    }

    #[test]
    fn parses_the_full_template_deterministically() {
        let record = parse_fields(&template_lines()).unwrap();
        assert_eq!(record.description, "Payment of NPR 500");
        assert_eq!(record.reference_code, 123456);
        assert_eq!(
            record.date_time,
            NaiveDate::from_ymd_opt(2024, 1, 5)
                .unwrap()
                .and_hms_opt(10, 30, 0)
                .unwrap()
        );
        assert_eq!(record.channel, "Mobile");
        assert_eq!(record.payment_attribute, "QR");
        assert_eq!(record.service_name, "Electricity");
        assert_eq!(record.amount, 500.00);
        assert_eq!(record.initiator, "John Doe");
        assert_eq!(record.merchant_name, "ACME");
        assert_eq!(record.remarks, "Monthly bill");
        assert_eq!(record.status, "Success");
    }

    #[test]
    fn ten_lines_are_rejected_structurally() {
        let mut short = template_lines();
        short.pop();
        let err = parse_fields(&short).unwrap_err();
        assert!(matches!(
            err,
            ExtractionError::Structural {
                stage: Stage::Parsing,
                ..
            }
        ));
    }

    #[test]
    fn non_numeric_reference_code_is_a_parse_error() {
        let mut bad = template_lines();
        bad[1].text = "Reference CodeABC123".into();
        let err = parse_fields(&bad).unwrap_err();
        match err {
            ExtractionError::Parse { field, value, .. } => {
                assert_eq!(field, "Reference Code");
                assert_eq!(value, "ABC123");
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn non_numeric_amount_is_a_parse_error() {
        let mut bad = template_lines();
        bad[6].text = "Amount (NPR)five hundred".into();
        let err = parse_fields(&bad).unwrap_err();
        assert!(matches!(err, ExtractionError::Parse { field: "Amount", .. }));
    }

    #[test]
    fn malformed_date_is_a_parse_error() {
        let mut bad = template_lines();
        bad[2].text = "Date/Time2024-01-05 10:30X".into();
        let err = parse_fields(&bad).unwrap_err();
        assert!(matches!(
            err,
            ExtractionError::Parse {
                field: "Date/Time",
                ..
            }
        ));
    }

    #[test]
    fn prefix_is_stripped_once_only() {
        let mut doubled = template_lines();
        doubled[10].text = "StatusStatusSuccess".into();
        let record = parse_fields(&doubled).unwrap();
        assert_eq!(record.status, "StatusSuccess");
    }

    #[test]
    fn empty_text_fields_are_permitted() {
        let mut sparse = template_lines();
        sparse[9].text = "Remarks".into();
        let record = parse_fields(&sparse).unwrap();
        assert_eq!(record.remarks, "");
    }

    #[test]
    fn extra_lines_beyond_the_template_are_ignored() {
        let mut long = template_lines();
        long.extend(lines(&["footer noise"]));
        let record = parse_fields(&long).unwrap();
        assert_eq!(record.status, "Success");
    }
}
