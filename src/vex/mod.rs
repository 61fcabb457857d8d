pub mod classifier;
pub mod statements;
pub mod document;
pub mod emitter;

pub use classifier::partition_unaffected;
pub use statements::{describe_references, vex_statements, StatementCounts, NOT_IN_EXECUTE_PATH_NOTES};
pub use document::{build_document, DocumentMetadata, AUTHOR_PLACEHOLDER, AUTHOR_ROLE};
pub use emitter::{emit, print_vex, render};
