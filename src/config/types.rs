use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct VexConfig {
    pub document: Option<DocumentConfig>,
}

/// Overrides for the provenance metadata of generated documents.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct DocumentConfig {
    pub author: Option<String>,
    pub version: Option<String>,
    pub tooling: Option<String>,
    pub context: Option<String>,
}
