//! メタデータスナップショット
//!
//! 1パスに対する解決結果を1回の走査で構築した不変の集約。
//! リフレッシュは既存値の書き換えではなく全体の作り直しで行う
//! （所有者だけ古い・バージョンだけ新しいといった不整合を避ける）。

use crate::model::{ExecutableCategory, VersionResourceInfo};

/// 1パス・1時点のメタデータ集約
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMetadataSnapshot {
    path: String,
    exists: bool,
    owner: Option<String>,
    executable_category: ExecutableCategory,
    type_name: String,
    version: VersionResourceInfo,
}

impl FileMetadataSnapshot {
    /// 存在するパスのスナップショットを構築
    pub fn new(
        path: impl Into<String>,
        owner: Option<String>,
        executable_category: ExecutableCategory,
        type_name: String,
        version: VersionResourceInfo,
    ) -> Self {
        Self {
            path: path.into(),
            exists: true,
            owner,
            executable_category,
            type_name,
            version,
        }
    }

    /// 存在しないパスの空スナップショット
    /// exists=false、所有者なし、カテゴリUnknown、バージョン/シェル欄は空
    pub fn absent(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            exists: false,
            owner: None,
            executable_category: ExecutableCategory::Unknown,
            type_name: String::new(),
            version: VersionResourceInfo::default(),
        }
    }

    /// 入力パス（正規化せずそのまま保持。再解決時の同一性）
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.exists
    }

    /// 所有者識別子。解決できなければNone
    pub fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }

    pub fn executable_category(&self) -> ExecutableCategory {
        self.executable_category
    }

    /// シェルが報告する種別名（例: "Application"）
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn version(&self) -> &VersionResourceInfo {
        &self.version
    }
}
