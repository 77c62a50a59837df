//! File I/O, validation, and serialization for warpband.

mod domain;
mod error;
mod reader;
mod writer;

pub use domain::{Dataset, SequenceId};
pub use error::IoError;
pub use reader::SequenceReader;
pub use writer::ResultWriter;
