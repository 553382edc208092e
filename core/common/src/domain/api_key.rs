//! API キー（認証情報）
//!
//! 初期値はプレースホルダ。プレースホルダまたは空のままではネットワーク呼び出しをしない。

/// 未設定を示すプレースホルダ値
pub const API_KEY_SENTINEL: &str = "PUT_YOUR_API_KEY_HERE";

#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// プレースホルダのままの API キー
    pub fn sentinel() -> Self {
        Self(API_KEY_SENTINEL.to_string())
    }

    /// プレースホルダのまま、または空なら true
    pub fn is_unset(&self) -> bool {
        let s = self.0.trim();
        s.is_empty() || s == API_KEY_SENTINEL
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ApiKey {
    fn default() -> Self {
        Self::sentinel()
    }
}

// ログやエラーに鍵が漏れないよう Debug は伏せ字にする
impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_unset() {
            f.write_str("ApiKey(<unset>)")
        } else {
            f.write_str("ApiKey(***)")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_sentinel() {
        let key = ApiKey::default();
        assert_eq!(key.as_str(), API_KEY_SENTINEL);
        assert!(key.is_unset());
    }

    #[test]
    fn test_empty_is_unset() {
        assert!(ApiKey::new("").is_unset());
        assert!(ApiKey::new("   ").is_unset());
    }

    #[test]
    fn test_real_key_is_set() {
        assert!(!ApiKey::new("AIzaSyExample").is_unset());
    }

    #[test]
    fn test_debug_redacts_key() {
        let key = ApiKey::new("AIzaSyExample");
        let dbg = format!("{:?}", key);
        assert!(!dbg.contains("AIzaSyExample"));
        assert_eq!(dbg, "ApiKey(***)");
    }
}
