use std::path::Path;
use crate::cli::commands::GenerateArgs;
use crate::config::{parse_config, VexConfig};
use crate::errors::VexError;
use crate::scan::{load_scan_result, ScanSource};
use crate::vex::{print_vex, DocumentMetadata, StatementCounts, AUTHOR_PLACEHOLDER};
use tracing::{debug, info, warn};

pub fn handle_generate(args: GenerateArgs) -> Result<(), VexError> {
    let config = match &args.config {
        Some(path) => parse_config(Path::new(path))?,
        None => VexConfig::default(),
    };
    let metadata = DocumentMetadata::from_config(&config).with_author(args.author.as_deref());

    let source = ScanSource::from_arg(args.input.as_deref());
    info!(input = %source, source_analysis = args.source, "Generating VEX document");
    let result = load_scan_result(&source)?;

    let doc = print_vex(&result, args.source, &metadata)?;

    for stmt in &doc.statements {
        debug!(vulnerability = %stmt.vulnerability, status = %stmt.status, "Statement");
    }
    let counts = StatementCounts::tally(&doc.statements);
    info!(
        id = %doc.id,
        not_affected = counts.not_affected,
        under_investigation = counts.under_investigation,
        "VEX document written"
    );
    if !args.source && !doc.statements.is_empty() {
        warn!("No source analysis: all vulnerabilities reported as under investigation");
    }
    if doc.author == AUTHOR_PLACEHOLDER {
        warn!("Document author is a placeholder and must be filled in before publishing");
    }
    Ok(())
}
