//! バージョン情報ポート

use crate::model::VersionResourceInfo;

/// バージョンリソース問い合わせポート
pub trait VersionInfoReader {
    /// バージョンリソースを読む。リソース不在はNone（エラーではない）。
    fn read(&self, path: &str) -> Option<VersionResourceInfo>;
}
