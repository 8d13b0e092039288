//! MARIE instruction set: instructions, skip conditions, data directives and
//! the textual line forms shared by both translation directions.

pub mod condition;
pub mod constants;
pub mod directive;
pub mod errors;
pub mod instruction;
pub mod line;

pub use condition::*;
pub use constants::*;
pub use directive::*;
pub use errors::*;
pub use instruction::*;
pub use line::*;
