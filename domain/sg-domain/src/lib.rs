//! Spyglass ドメイン層
//!
//! ファイルメタデータ解決の中核。外部依存ゼロでRust標準ライブラリのみ使用。
//! ヘキサゴナルアーキテクチャの最内層。

pub mod error;   // ドメインエラー定義
pub mod model;   // ドメインモデル（カテゴリ、バージョン情報、スナップショット）
pub mod port;    // ポート（driven）
pub mod service; // ドメインサービス（分類、解決）

pub use error::DomainError; // エラー型を再エクスポート
