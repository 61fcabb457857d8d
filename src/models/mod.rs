pub mod scan_result;
pub mod vex;

pub use scan_result::*;
pub use vex::*;
