//! ドメインモデル
//!
//! 標準ライブラリのみ使用（外部依存なし）
//! 値オブジェクトとスナップショット型を定義

mod executable; // 実行形式カテゴリ
mod snapshot;   // メタデータスナップショット
mod version;    // バージョンリソース情報

pub use executable::*;
pub use snapshot::*;
pub use version::*;
