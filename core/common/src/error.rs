//! エラーハンドリング
//!
//! 各バリアントは sysexits 準拠の終了コードに対応する。

/// エラー型
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// 引数不正（EX_USAGE）
    #[error("{0}")]
    InvalidArgument(String),
    /// JSON の解析失敗（EX_DATAERR）
    #[error("{0}")]
    Json(String),
    /// 入力ファイルが存在しない（EX_NOINPUT）
    #[error("{0}")]
    InputNotFound(String),
    /// HTTP・API 呼び出しの失敗（EX_UNAVAILABLE）
    #[error("{0}")]
    Http(String),
    /// その他の内部エラー（EX_SOFTWARE）
    #[error("{0}")]
    System(String),
    /// 読み書きの失敗（EX_IOERR）
    #[error("{0}")]
    Io(String),
    /// 設定不備・認証情報未設定（EX_CONFIG）
    #[error("{0}")]
    Config(String),
}

impl Error {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn json(msg: impl Into<String>) -> Self {
        Self::Json(msg.into())
    }

    pub fn input_not_found(msg: impl Into<String>) -> Self {
        Self::InputNotFound(msg.into())
    }

    pub fn http(msg: impl Into<String>) -> Self {
        Self::Http(msg.into())
    }

    pub fn system(msg: impl Into<String>) -> Self {
        Self::System(msg.into())
    }

    pub fn io_msg(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// 使い方の表示が必要なエラーか
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// プロセスの終了コード
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidArgument(_) => 64,
            Self::Json(_) => 65,
            Self::InputNotFound(_) => 66,
            Self::Http(_) => 69,
            Self::System(_) => 70,
            Self::Io(_) => 74,
            Self::Config(_) => 78,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_helpers() {
        let err = Error::invalid_argument("test");
        assert_eq!(err.to_string(), "test");
        assert_eq!(err.exit_code(), 64);
        assert!(err.is_usage());

        let err = Error::system("test");
        assert_eq!(err.exit_code(), 70);
        assert!(!err.is_usage());
    }

    #[test]
    fn test_every_error_is_nonzero() {
        let errors = vec![
            Error::invalid_argument("a"),
            Error::json("b"),
            Error::input_not_found("c"),
            Error::http("d"),
            Error::system("e"),
            Error::io_msg("f"),
            Error::config("g"),
        ];
        for err in errors {
            assert_ne!(err.exit_code(), 0, "{:?}", err);
        }
    }

    #[test]
    fn test_config_and_input_codes() {
        assert_eq!(Error::config("key").exit_code(), 78);
        assert_eq!(Error::input_not_found("missing").exit_code(), 66);
        assert_eq!(Error::io_msg("write").exit_code(), 74);
        assert_eq!(Error::http("quota").exit_code(), 69);
    }
}
