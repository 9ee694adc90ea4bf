pub mod account;
pub mod record;

pub use account::{Account, AccountChanges};
pub use record::{NewRecord, Record, RecordChanges, RecordFilter};
