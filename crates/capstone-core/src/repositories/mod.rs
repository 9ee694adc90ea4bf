pub mod account_repository;
pub mod record_repository;

pub use account_repository::AccountRepository;
pub use record_repository::RecordRepository;

#[cfg(test)]
pub use account_repository::MockAccountRepository;
#[cfg(test)]
pub use record_repository::MockRecordRepository;
