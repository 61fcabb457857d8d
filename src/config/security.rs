use crate::errors::VexError;

/// Content that must never be copied into a published VEX document.
const DANGEROUS_PATTERNS: &[&str] = &[
    "<script",
    "javascript:",
    "vbscript:",
    "data:text/html",
    "../",
    "..\\",
];

/// Screen every string in the config tree. The error names the dotted key
/// path of the first offending value.
pub fn validate_security_patterns(value: &serde_yaml::Value) -> Result<(), VexError> {
    let mut path = Vec::new();
    match find_dangerous(value, &mut path) {
        Some(pattern) => Err(VexError::Config(format!(
            "Dangerous pattern '{}' found at config path: {}",
            pattern,
            if path.is_empty() { "root".to_string() } else { path.join(".") }
        ))),
        None => Ok(()),
    }
}

fn find_dangerous(value: &serde_yaml::Value, path: &mut Vec<String>) -> Option<&'static str> {
    match value {
        serde_yaml::Value::String(s) => {
            let lower = s.to_lowercase();
            DANGEROUS_PATTERNS.iter().copied().find(|p| lower.contains(p))
        }
        serde_yaml::Value::Mapping(map) => map.iter().find_map(|(k, v)| {
            path.push(k.as_str().unwrap_or("unknown").to_string());
            let hit = find_dangerous(v, path);
            if hit.is_none() {
                path.pop();
            }
            hit
        }),
        serde_yaml::Value::Sequence(seq) => seq.iter().enumerate().find_map(|(i, v)| {
            path.push(format!("[{}]", i));
            let hit = find_dangerous(v, path);
            if hit.is_none() {
                path.pop();
            }
            hit
        }),
        _ => None,
    }
}
