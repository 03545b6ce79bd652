//! バージョンリソース情報
//!
//! ネイティブのバージョン情報問い合わせが返すフィールド群。
//! リソースが存在しないファイルでは全フィールドが既定値のまま。

use std::fmt;

/// 4要素のバージョン番号（major.minor.build.revision）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VersionQuad {
    pub major: u16,
    pub minor: u16,
    pub build: u16,
    pub revision: u16,
}

impl VersionQuad {
    /// ネイティブ形式（MS/LSの32bitペア）から復元
    /// MS = (major << 16) | minor、LS = (build << 16) | revision
    pub fn from_packed(ms: u32, ls: u32) -> Self {
        Self {
            major: (ms >> 16) as u16,
            minor: (ms & 0xFFFF) as u16,
            build: (ls >> 16) as u16,
            revision: (ls & 0xFFFF) as u16,
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}

impl fmt::Display for VersionQuad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}.{}",
            self.major, self.minor, self.build, self.revision
        )
    }
}

/// バージョンリソースのフィールド集合
///
/// 文字列フィールドはリソースの文字列テーブル由来、
/// フラグ類は固定情報ブロックのdwFileFlags由来。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionResourceInfo {
    pub company_name: String,
    pub product_name: String,
    pub file_description: String,
    pub original_filename: String,
    pub internal_name: String,
    pub legal_copyright: String,
    pub comments: String,
    /// 固定情報ブロックのファイルバージョン
    pub file_version: VersionQuad,
    /// 固定情報ブロックの製品バージョン
    pub product_version: VersionQuad,
    /// 文字列テーブルのFileVersion（自由書式）
    pub file_version_text: String,
    /// 文字列テーブルのProductVersion（自由書式）
    pub product_version_text: String,
    pub is_debug: bool,
    pub is_prerelease: bool,
    pub is_patched: bool,
    pub is_private_build: bool,
    pub is_special_build: bool,
}

impl VersionResourceInfo {
    /// 全フィールドが既定値か（バージョンリソース不在と同等）
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
