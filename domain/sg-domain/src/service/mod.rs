//! ドメインサービス

pub mod classification; // シグネチャワードの実行形式分類
pub mod resolution;     // メタデータ解決シーケンス

pub use classification::classify_signature;
pub use resolution::resolve_snapshot;
