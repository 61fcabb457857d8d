use std::io::Read;
use std::path::PathBuf;
use crate::errors::VexError;
use crate::models::scan_result::ScanResult;
use tracing::debug;

/// Where the scanner output is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanSource {
    Stdin,
    File(PathBuf),
}

impl ScanSource {
    /// `None` and `-` both mean stdin.
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            None | Some("-") => ScanSource::Stdin,
            Some(path) => ScanSource::File(PathBuf::from(path)),
        }
    }
}

impl std::fmt::Display for ScanSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScanSource::Stdin => write!(f, "<stdin>"),
            ScanSource::File(p) => write!(f, "{}", p.display()),
        }
    }
}

pub fn load_scan_result(source: &ScanSource) -> Result<ScanResult, VexError> {
    let content = match source {
        ScanSource::Stdin => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| VexError::InvalidInput(format!("Failed to read {}: {}", source, e)))?;
            buf
        }
        ScanSource::File(path) => std::fs::read_to_string(path)
            .map_err(|e| VexError::InvalidInput(format!("Failed to read {}: {}", source, e)))?,
    };

    let result = parse_scan_result(&content)
        .map_err(|e| VexError::InvalidInput(format!("{}: {}", source, e)))?;
    debug!(source = %source, vulns = result.vulns.len(), "Loaded scan result");
    Ok(result)
}

pub fn parse_scan_result(content: &str) -> Result<ScanResult, serde_json::Error> {
    serde_json::from_str(content)
}
