use serde::{Deserialize, Serialize};

use crate::constants::MISSING_FIELD_VALUE;
use crate::ocr::ReceiptFields;

/// Replace a missing or empty extracted field with the placeholder value.
///
/// An empty string from the upstream is treated the same as an absent field;
/// clients always see text, never null.
pub(crate) fn or_missing(value: Option<String>) -> String {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => MISSING_FIELD_VALUE.to_string(),
    }
}

/// Normalized scan result returned to the client
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub shop_name: String,
    pub amount: String,
    pub payment_method: String,
}

impl Receipt {
    /// Normalize raw OCR fields; each field falls back independently
    pub fn from_fields(fields: ReceiptFields) -> Self {
        Self {
            shop_name: or_missing(fields.shop_name),
            amount: or_missing(fields.amount),
            payment_method: or_missing(fields.payment_method),
        }
    }
}

/// Receipt row stored in redb
/// Fields are already normalized at write time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReceiptRecord {
    pub shop_name: String,
    pub amount: String,
    pub payment_method: String,
}

impl From<&Receipt> for ReceiptRecord {
    fn from(receipt: &Receipt) -> Self {
        Self {
            shop_name: receipt.shop_name.clone(),
            amount: receipt.amount.clone(),
            payment_method: receipt.payment_method.clone(),
        }
    }
}

/// One entry of a sync read response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncedReceipt {
    pub shop_name: String,
    pub amount: String,
    pub payment_method: String,
    pub timestamp: u64,
}

impl SyncedReceipt {
    /// Build a response entry from a stored row.
    ///
    /// Attributes that come back empty (rows written by older clients)
    /// default to the placeholder again at response construction.
    pub fn from_row(timestamp: u64, record: ReceiptRecord) -> Self {
        Self {
            shop_name: or_missing(Some(record.shop_name)),
            amount: or_missing(Some(record.amount)),
            payment_method: or_missing(Some(record.payment_method)),
            timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_or_missing_absent() {
        assert_eq!(or_missing(None), MISSING_FIELD_VALUE);
    }

    #[test]
    fn test_or_missing_empty() {
        assert_eq!(or_missing(Some(String::new())), MISSING_FIELD_VALUE);
    }

    #[test]
    fn test_or_missing_present() {
        assert_eq!(or_missing(Some("12.50".to_string())), "12.50");
    }

    #[test]
    fn test_fields_normalize_independently() {
        let fields = ReceiptFields {
            shop_name: Some("Cafe X".to_string()),
            amount: None,
            payment_method: Some(String::new()),
        };

        let receipt = Receipt::from_fields(fields);

        assert_eq!(receipt.shop_name, "Cafe X");
        assert_eq!(receipt.amount, MISSING_FIELD_VALUE);
        assert_eq!(receipt.payment_method, MISSING_FIELD_VALUE);
    }

    #[test]
    fn test_receipt_serializes_camel_case() {
        let receipt = Receipt {
            shop_name: "Cafe X".to_string(),
            amount: "12.50".to_string(),
            payment_method: "card".to_string(),
        };

        let json = serde_json::to_value(&receipt).unwrap();
        assert_eq!(json["shopName"], "Cafe X");
        assert_eq!(json["amount"], "12.50");
        assert_eq!(json["paymentMethod"], "card");
    }

    #[test]
    fn test_record_round_trips_through_bincode() {
        let record = ReceiptRecord {
            shop_name: "Cafe X".to_string(),
            amount: "12.50".to_string(),
            payment_method: "card".to_string(),
        };

        let bytes = bincode::serialize(&record).unwrap();
        let deserialized: ReceiptRecord = bincode::deserialize(&bytes).unwrap();

        assert_eq!(record.shop_name, deserialized.shop_name);
        assert_eq!(record.amount, deserialized.amount);
        assert_eq!(record.payment_method, deserialized.payment_method);
    }

    #[test]
    fn test_synced_receipt_defaults_empty_attributes() {
        let record = ReceiptRecord {
            shop_name: "Cafe X".to_string(),
            amount: String::new(),
            payment_method: "card".to_string(),
        };

        let entry = SyncedReceipt::from_row(1700000000000, record);

        assert_eq!(entry.shop_name, "Cafe X");
        assert_eq!(entry.amount, MISSING_FIELD_VALUE);
        assert_eq!(entry.payment_method, "card");
        assert_eq!(entry.timestamp, 1700000000000);
    }
}
