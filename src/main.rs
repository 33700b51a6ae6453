//! BURSAR Reports Engine — Accounts Reporting CLI
//!
//! Exports school accounts reports as CSV or paginated PDF files, and
//! prints dataset snapshots and rule-based key insights.

use bursar_core::log_error;

fn main() {
    if let Err(e) = bursar_core::logging::init_logging() {
        eprintln!("[WARN] Failed to initialize structured logging: {}", e);
    }

    if let Err(e) = bursar_core::app::run(std::env::args()) {
        log_error!("{:#}", e);
        std::process::exit(1);
    }
}
