//! プロバイダファクトリー
//!
//! プロバイダタイプに基づいて適切な TextGenerator を作成します。

use crate::domain::{ApiKey, ModelName};
use crate::error::Error;
use crate::llm::echo::EchoGenerator;
use crate::llm::gemini::GeminiGenerator;
use crate::ports::outbound::{TextGenerator, TextGeneratorFactory};

/// プロバイダタイプ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProviderType {
    /// Gemini（generateContent REST API）
    #[default]
    Gemini,
    /// Echo（プロンプトを受け取るだけで外部呼び出しをしない）
    Echo,
}

impl ProviderType {
    /// 文字列からプロバイダタイプを解析
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "gemini" => Some(Self::Gemini),
            "echo" => Some(Self::Echo),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gemini => "gemini",
            Self::Echo => "echo",
        }
    }

    /// ネットワーク越しに認証情報を使うプロバイダか
    pub fn requires_api_key(&self) -> bool {
        matches!(self, Self::Gemini)
    }
}

/// 標準のファクトリー（Gemini / Echo）
#[derive(Debug, Clone, Default)]
pub struct StdTextGeneratorFactory;

impl TextGeneratorFactory for StdTextGeneratorFactory {
    fn create(
        &self,
        provider: ProviderType,
        model: &ModelName,
        api_key: &ApiKey,
        base_url: Option<&str>,
    ) -> Result<Box<dyn TextGenerator>, Error> {
        match provider {
            ProviderType::Gemini => {
                if api_key.is_unset() {
                    return Err(Error::config("Gemini API key is not set"));
                }
                let mut g = GeminiGenerator::new(model.clone(), api_key.clone());
                if let Some(url) = base_url {
                    g = g.with_base_url(url);
                }
                Ok(Box::new(g))
            }
            ProviderType::Echo => Ok(Box::new(EchoGenerator::new())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_type_parse() {
        assert_eq!(ProviderType::parse("gemini"), Some(ProviderType::Gemini));
        assert_eq!(ProviderType::parse("GEMINI"), Some(ProviderType::Gemini));
        assert_eq!(ProviderType::parse("echo"), Some(ProviderType::Echo));
        assert_eq!(ProviderType::parse("gpt"), None);
    }

    #[test]
    fn test_requires_api_key() {
        assert!(ProviderType::Gemini.requires_api_key());
        assert!(!ProviderType::Echo.requires_api_key());
    }

    #[test]
    fn test_factory_refuses_sentinel_for_gemini() {
        let f = StdTextGeneratorFactory;
        let result = f.create(
            ProviderType::Gemini,
            &ModelName::new("gemini-2.0-flash"),
            &ApiKey::sentinel(),
            None,
        );
        let err = result.err().expect("sentinel key must be rejected");
        assert_eq!(err.exit_code(), 78);
    }

    #[test]
    fn test_factory_echo_without_key() {
        let f = StdTextGeneratorFactory;
        let g = f
            .create(ProviderType::Echo, &ModelName::new("any"), &ApiKey::sentinel(), None)
            .unwrap();
        assert_eq!(g.name(), "echo");
    }
}
