//! Geminiプロバイダの実装（generateContent を 1 回だけ呼ぶ）

use crate::domain::{ApiKey, ModelName};
use crate::error::Error;
use crate::ports::outbound::TextGenerator;
use serde_json::{json, Value};

/// Generative Language API のデフォルトベース URL
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Geminiプロバイダ
pub struct GeminiGenerator {
    model: ModelName,
    api_key: ApiKey,
    base_url: String,
}

impl GeminiGenerator {
    /// 新しいGeminiプロバイダを作成
    ///
    /// # Arguments
    /// * `model` - モデル名（例: "gemini-2.0-flash"）
    /// * `api_key` - 検証済みの API キー
    pub fn new(model: ModelName, api_key: ApiKey) -> Self {
        Self {
            model,
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// ベース URL を差し替える（プロキシ・互換サーバ向け）
    pub fn with_base_url(mut self, url: &str) -> Self {
        self.base_url = url.trim_end_matches('/').to_string();
        self
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }

    /// リクエストペイロードを生成（単一の user ターン）
    fn make_request_payload(prompt: &str) -> Value {
        json!({
            "contents": [{
                "role": "user",
                "parts": [{"text": prompt}]
            }]
        })
    }

    /// エラーレスポンスからメッセージを抽出
    fn error_message(status: reqwest::StatusCode, body: &str) -> String {
        if let Ok(v) = serde_json::from_str::<Value>(body) {
            if let Some(msg) = v["error"]["message"].as_str() {
                return msg.to_string();
            }
        }
        format!("HTTP {}: {}", status, body)
    }

    /// レスポンスから最初の候補のテキストを取り出す（複数 part は連結）
    fn parse_response_text(response_json: &str) -> Result<String, Error> {
        let v: Value = serde_json::from_str(response_json)
            .map_err(|e| Error::json(format!("Failed to parse response JSON: {}", e)))?;

        if let Some(error) = v.get("error") {
            let error_msg = error["message"].as_str().unwrap_or("Unknown error");
            return Err(Error::http(format!("Gemini API error: {}", error_msg)));
        }

        let texts: Vec<&str> = v["candidates"][0]["content"]["parts"]
            .as_array()
            .map(|parts| parts.iter().filter_map(|p| p["text"].as_str()).collect())
            .unwrap_or_default();

        if texts.is_empty() {
            let reason = v["candidates"][0]["finishReason"]
                .as_str()
                .or_else(|| v["promptFeedback"]["blockReason"].as_str())
                .unwrap_or("unknown");
            return Err(Error::http(format!(
                "Gemini API returned no text (reason: {})",
                reason
            )));
        }
        Ok(texts.concat())
    }
}

impl TextGenerator for GeminiGenerator {
    fn name(&self) -> &str {
        "gemini"
    }

    fn generate(&self, prompt: &str) -> Result<String, Error> {
        let payload = Self::make_request_payload(prompt);
        let client = reqwest::blocking::Client::new();
        let response = client
            .post(self.endpoint())
            .header("Content-Type", "application/json")
            .header("x-goog-api-key", self.api_key.as_str())
            .json(&payload)
            .send()
            .map_err(|e| Error::http(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        let response_text = response
            .text()
            .map_err(|e| Error::http(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            return Err(Error::http(format!(
                "Gemini API error: {}",
                Self::error_message(status, &response_text)
            )));
        }

        Self::parse_response_text(&response_text)
    }
}
