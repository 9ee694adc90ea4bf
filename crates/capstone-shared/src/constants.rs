//! Application-wide constants

pub const DEFAULT_AUTH_PORT: u16 = 8000;
pub const DEFAULT_RECORDS_PORT: u16 = 8001;
pub const DEFAULT_ACCOUNTS_PORT: u16 = 8002;

/// Lifetime of an issued session token.
pub const TOKEN_TTL_SECONDS: u64 = 300;

/// Cookie carrying the session token back to the browser.
pub const AUTH_COOKIE: &str = "jwtToken";

/// Environment variable holding the token signing secret.
pub const SECRET_KEY_VAR: &str = "SECRET_KEY";

/// Wall-clock stamp written into `CreationDate` columns.
pub const CREATION_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub const DEFAULT_MAX_DB_CONNECTIONS: u32 = 5;
