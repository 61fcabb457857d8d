use serde::Deserialize;

/// Result set produced by a vulnerability scanner run.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ScanResult {
    /// Detected vulnerabilities. A `null` list is read as empty.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub vulns: Vec<Vuln>,
}

/// A single advisory together with the modules it was found in.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Vuln {
    #[serde(rename = "OSV")]
    pub osv: OsvEntry,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub modules: Vec<Module>,
}

impl Vuln {
    /// Whether any package in any affected module has a call stack reaching
    /// the vulnerable symbol.
    pub fn is_called(&self) -> bool {
        self.modules
            .iter()
            .flat_map(|m| &m.packages)
            .any(|p| !p.call_stacks.is_empty())
    }

    pub fn id(&self) -> &str {
        &self.osv.id
    }
}

/// Advisory data in OSV format.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OsvEntry {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub aliases: Vec<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub references: Vec<Reference>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Reference {
    #[serde(rename = "type")]
    pub ref_type: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Module {
    pub path: String,
    #[serde(default)]
    pub found_version: Option<String>,
    #[serde(default)]
    pub fixed_version: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub packages: Vec<Package>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Package {
    pub path: String,
    /// Call paths from the scanned code into the vulnerable symbols.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub call_stacks: Vec<CallStack>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CallStack {
    pub symbol: String,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub frames: Vec<serde_json::Value>,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
