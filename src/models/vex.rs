//! OpenVEX document types emitted by the generator.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// JSON-LD context of OpenVEX documents.
pub const OPENVEX_CONTEXT: &str = "https://openvex.dev/ns";

/// A VEX document: provenance metadata plus one statement per vulnerability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VexDocument {
    #[serde(rename = "@context")]
    pub context: String,
    /// Unique per generated document.
    #[serde(rename = "@id")]
    pub id: String,
    pub author: String,
    /// Category of publisher, e.g. `discoverer`.
    pub role: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
    pub tooling: String,
    pub statements: Vec<Statement>,
}

/// One assertion about one vulnerability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statement {
    pub vulnerability: String,
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub justification: Option<Justification>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub status_notes: Option<String>,
    /// Newline separated `type:url` references of the advisory.
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// No remediation is required.
    NotAffected,
    /// Exploitability has not been established.
    UnderInvestigation,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::NotAffected => write!(f, "not_affected"),
            Status::UnderInvestigation => write!(f, "under_investigation"),
        }
    }
}

/// Why a vulnerability is asserted not to affect the artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Justification {
    /// The vulnerable code is present but never called by the artifact.
    VulnerableCodeNotInExecutePath,
}
