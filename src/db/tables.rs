use redb::TableDefinition;

/// Receipts table: (user_id, timestamp millis) -> ReceiptRecord (serialized)
///
/// The composite key keeps each user's rows contiguous and ordered by
/// timestamp, so the sync read is a bounded reverse range scan.
pub const RECEIPTS: TableDefinition<(&str, u64), &[u8]> = TableDefinition::new("receipts");
