//! Echoプロバイダの実装
//!
//! 実際に API を呼び出さず、受け取ったプロンプトの要約を返すだけです。
//! プロンプト組み立ての確認やオフラインでの動作確認に使用します。

use crate::error::Error;
use crate::ports::outbound::TextGenerator;

/// Echoプロバイダ
#[derive(Debug, Clone, Default)]
pub struct EchoGenerator;

impl EchoGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl TextGenerator for EchoGenerator {
    fn name(&self) -> &str {
        "echo"
    }

    fn generate(&self, prompt: &str) -> Result<String, Error> {
        let first_line = prompt.lines().find(|l| !l.trim().is_empty()).unwrap_or("");
        Ok(format!(
            "[Echo Provider] Prompt received ({} chars, no actual LLM call made)\n{}",
            prompt.chars().count(),
            first_line
        ))
    }
}
