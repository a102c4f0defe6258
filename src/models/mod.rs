pub mod receipt;

pub use receipt::{Receipt, ReceiptRecord, SyncedReceipt};
