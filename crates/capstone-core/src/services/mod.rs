pub mod account_service;
pub mod auth_service;
pub mod record_service;

pub use account_service::AccountService;
pub use auth_service::AuthService;
pub use record_service::RecordService;

use capstone_shared::constants::CREATION_DATE_FORMAT;

/// Wall-clock stamp written into new rows, in the store's historical
/// `YYYY-MM-DD HH:MM:SS` format.
pub(crate) fn creation_stamp() -> String {
    chrono::Local::now().format(CREATION_DATE_FORMAT).to_string()
}
