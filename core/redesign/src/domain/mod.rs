//! redesign 固有のドメイン型（型と不変条件）

pub mod bundle;
pub mod command;
pub mod preview;
pub mod template;

pub use bundle::{build_prompt, SourceFile};
pub use command::RedesignCommand;
pub use preview::{preview, PREVIEW_LIMIT};
pub use template::STEM_REDESIGN_PROMPT;
