#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod error;
pub use error::*;

mod logs;
pub use logs::*;
