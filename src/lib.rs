mod runner;
pub mod errors;
pub mod seq;

use crate::errors::RelabelError;

pub use crate::seq::relabel::{relabel, relabel_reader, Relabeler};

pub fn run() -> Result<(), RelabelError> {
    runner::run()
}
