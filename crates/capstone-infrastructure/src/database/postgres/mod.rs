pub mod account_repo_impl;
pub mod record_repo_impl;

pub use account_repo_impl::PgAccountRepository;
pub use record_repo_impl::PgRecordRepository;
