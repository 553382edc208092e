//! テキスト生成 Outbound ポート
//!
//! プロンプト文字列を 1 回送り、応答文字列を受け取るだけの狭い境界。
//! 実体は外部サービスなので、テストでは決定的なスタブに差し替える。

use crate::domain::{ApiKey, ModelName};
use crate::error::Error;
use crate::llm::ProviderType;

/// 単発のテキスト生成
pub trait TextGenerator {
    /// プロバイダ名を返す
    fn name(&self) -> &str;

    /// プロンプトを送信し、応答テキストをそのまま返す（リトライなし）
    fn generate(&self, prompt: &str) -> Result<String, Error>;
}

/// TextGenerator を生成するファクトリ
///
/// usecase は認証情報を検証してから create を呼ぶ。
pub trait TextGeneratorFactory: Send + Sync {
    fn create(
        &self,
        provider: ProviderType,
        model: &ModelName,
        api_key: &ApiKey,
        base_url: Option<&str>,
    ) -> Result<Box<dyn TextGenerator>, Error>;
}
