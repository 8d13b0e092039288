#![cfg_attr(not(test), warn(unused_crate_dependencies))]

use tracing::instrument;
use utils::TranslationResult;

pub mod constants;
mod lifter;
pub mod reader;

pub use lifter::{LiftedProgram, lift};

/// Translates MARIE assembly text into the structured language.
#[instrument(skip_all, fields(bytes = source.len()))]
pub fn translate(source: &str) -> TranslationResult<String> {
    lift(source).map(|program| program.to_string())
}
