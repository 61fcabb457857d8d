use chrono::Utc;
use uuid::Uuid;
use crate::config::VexConfig;
use crate::models::scan_result::ScanResult;
use crate::models::vex::{VexDocument, OPENVEX_CONTEXT};
use super::statements::vex_statements;

/// Author value left for a human to complete after generation.
pub const AUTHOR_PLACEHOLDER: &str = "PLEASE FILL IN";

/// Based on the "category of publisher" roles defined by CSAF 2.0.
pub const AUTHOR_ROLE: &str = "discoverer";

pub const DEFAULT_TOOLING: &str = "vexgen";
pub const DEFAULT_DOCUMENT_VERSION: &str = "1.0";

/// Provenance fields written into every generated document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentMetadata {
    pub author: String,
    pub version: String,
    pub tooling: String,
    pub context: String,
}

impl Default for DocumentMetadata {
    fn default() -> Self {
        Self {
            author: AUTHOR_PLACEHOLDER.to_string(),
            version: DEFAULT_DOCUMENT_VERSION.to_string(),
            tooling: DEFAULT_TOOLING.to_string(),
            context: OPENVEX_CONTEXT.to_string(),
        }
    }
}

impl DocumentMetadata {
    /// Resolve metadata from a parsed config, falling back to defaults for
    /// anything left unset.
    pub fn from_config(config: &VexConfig) -> Self {
        let defaults = Self::default();
        let Some(doc) = &config.document else {
            return defaults;
        };
        let pick = |value: &Option<String>, fallback: String| {
            value
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
                .unwrap_or(fallback)
        };
        Self {
            author: pick(&doc.author, defaults.author),
            version: pick(&doc.version, defaults.version),
            tooling: pick(&doc.tooling, defaults.tooling),
            context: pick(&doc.context, defaults.context),
        }
    }

    pub fn with_author(mut self, author: Option<&str>) -> Self {
        if let Some(a) = author.map(str::trim).filter(|a| !a.is_empty()) {
            self.author = a.to_string();
        }
        self
    }
}

/// Fresh document id of the form `VEX-<tooling>-<uuid>`.
pub fn generate_id(tooling: &str) -> String {
    format!("VEX-{}-{}", tooling, Uuid::new_v4())
}

pub fn build_document(result: &ScanResult, source: bool, metadata: &DocumentMetadata) -> VexDocument {
    VexDocument {
        context: metadata.context.clone(),
        id: generate_id(&metadata.tooling),
        author: metadata.author.clone(),
        role: AUTHOR_ROLE.to_string(),
        timestamp: Utc::now(),
        version: metadata.version.clone(),
        tooling: metadata.tooling.clone(),
        statements: vex_statements(&result.vulns, source),
    }
}
