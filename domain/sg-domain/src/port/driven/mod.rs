//! 駆動ポート（出力インターフェース）。
//!
//! ドメインが外部に求めるネイティブ問い合わせを定義する。
//! インフラ層のアダプタが実装する。

mod existence_probe;
mod owner_resolver;
mod shell_metadata;
mod version_info_reader;

pub use existence_probe::*;
pub use owner_resolver::*;
pub use shell_metadata::*;
pub use version_info_reader::*;
