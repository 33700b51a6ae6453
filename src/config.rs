//! Configuration constants for the Accounts Reporting Engine

/// Prefix used for export file names: `<prefix>-<type>-<millis>.<ext>`
pub const REPORT_FILE_PREFIX: &str = "account-reports";

/// Title line rendered at the top of every PDF report
pub const REPORT_TITLE: &str = "Account Reports";

/// Currency prefix for rendered money values
pub const CURRENCY_PREFIX: &str = "UGX";

/// Fixed report time zone offset in seconds (East Africa Time, UTC+3).
/// Generation dates are always rendered in this zone, never the host zone.
pub const REPORT_TZ_OFFSET_SECS: i32 = 3 * 3600;
