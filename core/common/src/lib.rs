//! gemtools 共通ライブラリ
//!
//! `analyze` と `redesign` で共有される機能を提供します。

/// エラーハンドリング
pub mod error;

/// ドメイン型（Newtype・プロンプトモード）
pub mod domain;

/// 共有設定（認証情報・redesign マニフェスト）
pub mod settings;

/// ロケール別コンソールメッセージ
pub mod msg;

/// Ports & Adapters のポート定義
pub mod ports;

/// 標準アダプタ
pub mod adapter;

/// テキスト生成プロバイダ
pub mod llm;
