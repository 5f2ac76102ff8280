//! The typed output record of a receipt extraction.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// The structured key-value record extracted from one receipt image.
///
/// Built all-or-nothing from a fixed-length, ordered list of recognized
/// lines; a record never exists with missing fields. Serialization uses the
/// canonical field names from the receipt template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KvpRecord {
    /// Free-text transaction description (the receipt's headline line).
    #[serde(rename = "Description")]
    pub description: String,
    /// Numeric transaction reference code.
    #[serde(rename = "Reference Code")]
    pub reference_code: i64,
    /// Transaction timestamp.
    #[serde(rename = "Date/Time")]
    pub date_time: NaiveDateTime,
    /// Channel the payment was made through.
    #[serde(rename = "Channel")]
    pub channel: String,
    /// Payment attribute (e.g. QR).
    #[serde(rename = "Payment Attribute")]
    pub payment_attribute: String,
    /// Name of the paid service.
    #[serde(rename = "Service Name")]
    pub service_name: String,
    /// Transaction amount.
    #[serde(rename = "Amount")]
    pub amount: f64,
    /// Who initiated the payment.
    #[serde(rename = "Initiator")]
    pub initiator: String,
    /// Merchant the payment went to.
    #[serde(rename = "Merchant Name")]
    pub merchant_name: String,
    /// Free-text remarks; may be empty.
    #[serde(rename = "Remarks")]
    pub remarks: String,
    /// Transaction status (e.g. Success).
    #[serde(rename = "Status")]
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn serializes_with_canonical_field_names() {
        let record = KvpRecord {
            description: "Payment of NPR 500".into(),
            reference_code: 123456,
            date_time: NaiveDate::from_ymd_opt(2024, 1, 5)
                .unwrap()
                .and_hms_opt(10, 30, 0)
                .unwrap(),
            channel: "Mobile".into(),
            payment_attribute: "QR".into(),
            service_name: "Electricity".into(),
            amount: 500.0,
            initiator: "John Doe".into(),
            merchant_name: "ACME".into(),
            remarks: String::new(),
            status: "Success".into(),
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["Reference Code"], 123456);
        assert_eq!(json["Merchant Name"], "ACME");
        assert_eq!(json["Amount"], 500.0);
        assert_eq!(json["Remarks"], "");
    }
}
