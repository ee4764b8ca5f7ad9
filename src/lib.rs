pub mod csv;
pub mod driver;
pub mod encode;
pub mod parse;

pub use driver::{generate, GenConfig, GenError, OnError, RecordError, RunSummary};
pub use encode::{encode, EncodeError};
pub use parse::{parse, Operand, ParseError, ParsedRecord};
