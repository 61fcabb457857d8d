use std::path::Path;
use crate::cli::commands::ValidateArgs;
use crate::config::parse_config;
use crate::errors::VexError;
use crate::vex::DocumentMetadata;

pub fn handle_validate(args: ValidateArgs) -> Result<(), VexError> {
    let config = parse_config(Path::new(&args.config))?;
    let metadata = DocumentMetadata::from_config(&config);
    println!("Configuration is valid: {}", args.config);
    println!("  author:  {}", metadata.author);
    println!("  tooling: {}", metadata.tooling);
    println!("  version: {}", metadata.version);
    Ok(())
}
