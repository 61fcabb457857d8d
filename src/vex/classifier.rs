use crate::models::scan_result::Vuln;

/// Split `vulns` into those whose vulnerable code is never called and those
/// with at least one call stack. Relative order is kept in both halves.
pub fn partition_unaffected(vulns: &[Vuln]) -> (Vec<&Vuln>, Vec<&Vuln>) {
    vulns.iter().partition(|v| !v.is_called())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::scan_result::{CallStack, Module, OsvEntry, Package};

    fn vuln(id: &str, called: bool) -> Vuln {
        let call_stacks = if called {
            vec![CallStack { symbol: "Foo".into(), ..Default::default() }]
        } else {
            vec![]
        };
        Vuln {
            osv: OsvEntry { id: id.into(), ..Default::default() },
            modules: vec![Module {
                path: "golang.org/p1".into(),
                packages: vec![Package { path: "golang.org/p1".into(), call_stacks }],
                ..Default::default()
            }],
        }
    }

    fn ids(vulns: &[&Vuln]) -> Vec<String> {
        vulns.iter().map(|v| v.id().to_string()).collect()
    }

    #[test]
    fn test_partition_preserves_relative_order() {
        let vulns = vec![
            vuln("a", true),
            vuln("b", false),
            vuln("c", true),
            vuln("d", false),
        ];
        let (unaffected, unknown) = partition_unaffected(&vulns);
        assert_eq!(ids(&unaffected), vec!["b", "d"]);
        assert_eq!(ids(&unknown), vec!["a", "c"]);
    }

    #[test]
    fn test_partition_empty() {
        let (unaffected, unknown) = partition_unaffected(&[]);
        assert!(unaffected.is_empty());
        assert!(unknown.is_empty());
    }
}
