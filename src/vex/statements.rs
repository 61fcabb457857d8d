use crate::models::scan_result::{Reference, Vuln};
use crate::models::vex::{Justification, Statement, Status};
use super::classifier::partition_unaffected;

pub const NOT_IN_EXECUTE_PATH_NOTES: &str =
    "call graph analysis determined vulnerable function not executed";

/// Build one statement per vulnerability.
///
/// Without source-level analysis (`source == false`) nothing can be said about
/// reachability, so every vulnerability is reported as under investigation.
/// Otherwise uncalled vulnerabilities are not affected. Not-affected statements
/// come first; callers should not depend on the ordering.
pub fn vex_statements(vulns: &[Vuln], source: bool) -> Vec<Statement> {
    let (unaffected, unknown) = if source {
        partition_unaffected(vulns)
    } else {
        (Vec::new(), vulns.iter().collect())
    };

    let mut statements = Vec::with_capacity(vulns.len());
    for v in unaffected {
        statements.push(Statement {
            vulnerability: v.osv.id.clone(),
            status: Status::NotAffected,
            justification: Some(Justification::VulnerableCodeNotInExecutePath),
            status_notes: Some(NOT_IN_EXECUTE_PATH_NOTES.to_string()),
            description: describe_references(&v.osv.references),
        });
    }
    for v in unknown {
        statements.push(Statement {
            vulnerability: v.osv.id.clone(),
            status: Status::UnderInvestigation,
            justification: None,
            status_notes: None,
            description: describe_references(&v.osv.references),
        });
    }
    statements
}

/// Render references as `type:url`, one per line, in input order.
pub fn describe_references(refs: &[Reference]) -> String {
    refs.iter()
        .map(|r| format!("{}:{}", r.ref_type, r.url))
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatementCounts {
    pub not_affected: usize,
    pub under_investigation: usize,
}

impl StatementCounts {
    pub fn tally(statements: &[Statement]) -> Self {
        let mut counts = Self::default();
        for s in statements {
            match s.status {
                Status::NotAffected => counts.not_affected += 1,
                Status::UnderInvestigation => counts.under_investigation += 1,
            }
        }
        counts
    }
}
