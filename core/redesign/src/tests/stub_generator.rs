//! テスト用: 固定の応答を返し、呼び出しを記録する TextGenerator
//!
//! 外部サービスの代わりに注入し、呼び出し回数と送信プロンプトを検証する。

use common::domain::{ApiKey, ModelName};
use common::error::Error;
use common::llm::ProviderType;
use common::ports::outbound::{TextGenerator, TextGeneratorFactory};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// 固定応答の Stub
struct StubGenerator {
    response: Result<String, Error>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl StubGenerator {
    fn new(response: Result<String, Error>, prompts: Arc<Mutex<Vec<String>>>) -> Self {
        Self { response, prompts }
    }
}

impl TextGenerator for StubGenerator {
    fn name(&self) -> &str {
        "stub"
    }

    fn generate(&self, prompt: &str) -> Result<String, Error> {
        if let Ok(mut p) = self.prompts.lock() {
            p.push(prompt.to_string());
        }
        self.response.clone()
    }
}

/// Stub を払い出し、生成回数・送信プロンプトを保持するファクトリ
pub struct StubGeneratorFactory {
    response: Result<String, Error>,
    created: AtomicUsize,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl StubGeneratorFactory {
    /// 常に `text` を返す
    pub fn replying(text: impl Into<String>) -> Self {
        Self::with_response(Ok(text.into()))
    }

    /// 常に HTTP エラーを返す
    pub fn failing(message: impl Into<String>) -> Self {
        Self::with_response(Err(Error::http(message)))
    }

    fn with_response(response: Result<String, Error>) -> Self {
        Self {
            response,
            created: AtomicUsize::new(0),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// create が呼ばれた回数
    pub fn created(&self) -> usize {
        self.created.load(Ordering::SeqCst)
    }

    /// generate に渡されたプロンプト（呼び出し順）
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().map(|p| p.clone()).unwrap_or_default()
    }

    /// generate が呼ばれた回数
    pub fn calls(&self) -> usize {
        self.prompts().len()
    }
}

impl TextGeneratorFactory for StubGeneratorFactory {
    fn create(
        &self,
        _provider: ProviderType,
        _model: &ModelName,
        _api_key: &ApiKey,
        _base_url: Option<&str>,
    ) -> Result<Box<dyn TextGenerator>, Error> {
        self.created.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(StubGenerator::new(
            self.response.clone(),
            Arc::clone(&self.prompts),
        )))
    }
}
