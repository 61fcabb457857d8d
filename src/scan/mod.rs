pub mod loader;

pub use loader::{load_scan_result, parse_scan_result, ScanSource};
