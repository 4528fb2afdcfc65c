//! Agent instructions file: marker syntax, block extraction, merge and upsert

pub mod blocks;
pub mod markers;
pub mod merge;
pub mod template;
pub mod upsert;

pub use blocks::{Block, block_names, extract_blocks};
pub use markers::MarkerSyntax;
pub use merge::{MergeOutcome, MergeStatus, merge, merge_with};
pub use template::{TEMPLATE_VERSION, TemplateSource, default_template, template_version};
pub use upsert::{UpsertOptions, UpsertOutcome, UpsertReport, plan_instructions, upsert_instructions};
