//! Receipt row persistence.
//!
//! These functions do blocking redb work; handlers call them through
//! `tokio::task::spawn_blocking`.

use redb::ReadableTable;

use crate::db::{tables, Db};
use crate::error::Result;
use crate::models::ReceiptRecord;

/// Insert a receipt row at (user_id, timestamp).
///
/// Unconditional insert: a row already present under the same key is
/// silently overwritten.
pub fn insert_receipt(db: &Db, user_id: &str, timestamp: u64, record: &ReceiptRecord) -> Result<()> {
    let bytes = bincode::serialize(record)?;

    let write_txn = db.begin_write()?;
    {
        let mut table = write_txn.open_table(tables::RECEIPTS)?;
        table.insert((user_id, timestamp), bytes.as_slice())?;
    }
    write_txn.commit()?;

    Ok(())
}

/// Read a user's most recent receipts, newest first, at most `limit` rows.
///
/// Scans the fully-open per-user key range in reverse; a user with no rows
/// yields an empty page.
pub fn recent_receipts(db: &Db, user_id: &str, limit: usize) -> Result<Vec<(u64, ReceiptRecord)>> {
    let read_txn = db.begin_read()?;
    let table = read_txn.open_table(tables::RECEIPTS)?;

    let mut rows = Vec::new();
    for entry in table.range((user_id, u64::MIN)..=(user_id, u64::MAX))?.rev() {
        let (key, value) = entry?;
        let (_, timestamp) = key.value();
        let record: ReceiptRecord = bincode::deserialize(value.value())?;
        rows.push((timestamp, record));

        if rows.len() >= limit {
            break;
        }
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::open_database;
    use tempfile::TempDir;

    fn record(shop: &str) -> ReceiptRecord {
        ReceiptRecord {
            shop_name: shop.to_string(),
            amount: "10.00".to_string(),
            payment_method: "cash".to_string(),
        }
    }

    #[test]
    fn test_insert_and_read_back() {
        let temp_dir = TempDir::new().unwrap();
        let db = open_database(temp_dir.path().join("test.db")).unwrap();

        insert_receipt(&db, "u1", 1000, &record("Cafe X")).unwrap();

        let rows = recent_receipts(&db, "u1", 100).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].0, 1000);
        assert_eq!(rows[0].1.shop_name, "Cafe X");
    }

    #[test]
    fn test_rows_come_back_newest_first() {
        let temp_dir = TempDir::new().unwrap();
        let db = open_database(temp_dir.path().join("test.db")).unwrap();

        insert_receipt(&db, "u1", 1000, &record("first")).unwrap();
        insert_receipt(&db, "u1", 2000, &record("second")).unwrap();
        insert_receipt(&db, "u1", 1500, &record("third")).unwrap();

        let rows = recent_receipts(&db, "u1", 100).unwrap();
        let timestamps: Vec<u64> = rows.iter().map(|(ts, _)| *ts).collect();
        assert_eq!(timestamps, vec![2000, 1500, 1000]);
    }

    #[test]
    fn test_limit_is_respected() {
        let temp_dir = TempDir::new().unwrap();
        let db = open_database(temp_dir.path().join("test.db")).unwrap();

        for ts in 0..120u64 {
            insert_receipt(&db, "u1", ts, &record("shop")).unwrap();
        }

        let rows = recent_receipts(&db, "u1", 100).unwrap();
        assert_eq!(rows.len(), 100);
        // Newest 100 of 120, so the oldest returned is 20
        assert_eq!(rows[0].0, 119);
        assert_eq!(rows[99].0, 20);
    }

    #[test]
    fn test_users_are_isolated() {
        let temp_dir = TempDir::new().unwrap();
        let db = open_database(temp_dir.path().join("test.db")).unwrap();

        insert_receipt(&db, "u1", 1000, &record("mine")).unwrap();
        insert_receipt(&db, "u2", 2000, &record("theirs")).unwrap();

        let rows = recent_receipts(&db, "u1", 100).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].1.shop_name, "mine");

        let rows = recent_receipts(&db, "u3", 100).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_same_key_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let db = open_database(temp_dir.path().join("test.db")).unwrap();

        insert_receipt(&db, "u1", 1000, &record("first")).unwrap();
        insert_receipt(&db, "u1", 1000, &record("second")).unwrap();

        let rows = recent_receipts(&db, "u1", 100).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].1.shop_name, "second");
    }
}
