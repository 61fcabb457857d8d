use vexgen::models::scan_result::{CallStack, Module, OsvEntry, Package, Reference, Vuln};
use vexgen::models::vex::{Justification, Statement, Status};
use vexgen::vex::{vex_statements, NOT_IN_EXECUTE_PATH_NOTES};

/// Build a vuln whose `is_called` returns `called`.
fn vuln(id: &str, references: Vec<Reference>, called: bool) -> Vuln {
    let mut v = Vuln {
        osv: OsvEntry { id: id.to_string(), references, ..Default::default() },
        modules: vec![],
    };
    if called {
        v.modules.push(Module {
            path: "golang.org/p1".to_string(),
            packages: vec![Package {
                path: "golang.org/p1".to_string(),
                call_stacks: vec![CallStack { symbol: "Foo".to_string(), ..Default::default() }],
            }],
            ..Default::default()
        });
    }
    v
}

fn not_affected(id: &str, description: &str) -> Statement {
    Statement {
        vulnerability: id.to_string(),
        status: Status::NotAffected,
        justification: Some(Justification::VulnerableCodeNotInExecutePath),
        status_notes: Some(NOT_IN_EXECUTE_PATH_NOTES.to_string()),
        description: description.to_string(),
    }
}

fn under_investigation(id: &str) -> Statement {
    Statement {
        vulnerability: id.to_string(),
        status: Status::UnderInvestigation,
        justification: None,
        status_notes: None,
        description: String::new(),
    }
}

fn sorted(mut statements: Vec<Statement>) -> Vec<Statement> {
    statements.sort_by(|a, b| a.vulnerability.cmp(&b.vulnerability));
    statements
}

#[test]
fn test_empty_vulns() {
    assert!(vex_statements(&[], true).is_empty());
    assert!(vex_statements(&[], false).is_empty());
}

#[test]
fn test_one_called_vuln() {
    let got = vex_statements(&[vuln("vuln-id-1", vec![], true)], true);
    assert_eq!(got, vec![under_investigation("vuln-id-1")]);
}

#[test]
fn test_one_uncalled_vuln() {
    let got = vex_statements(&[vuln("vuln-id-1", vec![], false)], true);
    assert_eq!(got, vec![not_affected("vuln-id-1", "")]);
}

#[test]
fn test_propagate_references() {
    let refs = vec![Reference {
        ref_type: "REPORT".to_string(),
        url: "https://go.dev/issue/56694".to_string(),
    }];
    let got = vex_statements(&[vuln("vuln-id-1", refs, false)], true);
    assert_eq!(got, vec![not_affected("vuln-id-1", "REPORT:https://go.dev/issue/56694")]);
}

#[test]
fn test_references_on_under_investigation() {
    let refs = vec![
        Reference { ref_type: "ADVISORY".to_string(), url: "https://x".to_string() },
        Reference { ref_type: "FIX".to_string(), url: "https://y".to_string() },
    ];
    let got = vex_statements(&[vuln("vuln-id-1", refs, true)], true);
    assert_eq!(got[0].status, Status::UnderInvestigation);
    assert_eq!(got[0].description, "ADVISORY:https://x\nFIX:https://y");
}

#[test]
fn test_mixed_called_vulns() {
    let vulns = vec![
        vuln("vuln-id-1", vec![], false),
        vuln("vuln-id-2", vec![], true),
    ];
    let got = sorted(vex_statements(&vulns, true));
    assert_eq!(
        got,
        vec![not_affected("vuln-id-1", ""), under_investigation("vuln-id-2")]
    );
}

#[test]
fn test_without_source_everything_under_investigation() {
    let vulns = vec![
        vuln("vuln-id-1", vec![], false),
        vuln("vuln-id-2", vec![], true),
        vuln("vuln-id-3", vec![], false),
    ];
    let got = vex_statements(&vulns, false);
    assert_eq!(got.len(), vulns.len());
    for stmt in &got {
        assert_eq!(stmt.status, Status::UnderInvestigation);
        assert!(stmt.justification.is_none());
        assert!(stmt.status_notes.is_none());
    }
}

#[test]
fn test_one_statement_per_vuln() {
    let vulns: Vec<Vuln> = (0..10)
        .map(|i| vuln(&format!("vuln-id-{:02}", i), vec![], i % 3 == 0))
        .collect();
    let got = sorted(vex_statements(&vulns, true));
    assert_eq!(got.len(), vulns.len());
    for (stmt, v) in got.iter().zip(&vulns) {
        assert_eq!(stmt.vulnerability, v.id());
        let expected = if v.is_called() { Status::UnderInvestigation } else { Status::NotAffected };
        assert_eq!(stmt.status, expected);
    }
}
