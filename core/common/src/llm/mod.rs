//! テキスト生成プロバイダの実装
//!
//! Gemini（HTTP）と Echo（ネットワークなし）を提供します。

pub mod echo;
pub mod factory;
pub mod gemini;

pub use echo::EchoGenerator;
pub use factory::{ProviderType, StdTextGeneratorFactory};
pub use gemini::GeminiGenerator;
