//! analyze 固有のドメイン型（型と不変条件）

pub mod command;
pub mod request;

pub use command::AnalyzeCommand;
pub use request::{build_prompt, AnalyzeRequest};
