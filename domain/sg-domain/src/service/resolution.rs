//! メタデータ解決シーケンス
//!
//! 存在確認ゲートの後ろで3つの独立したネイティブ問い合わせと
//! 所有者参照を実行し、結果を1つの不変スナップショットに集約する。
//! バックグラウンド処理・リトライ・キューはない。

use crate::error::DomainError;
use crate::model::FileMetadataSnapshot;
use crate::port::driven::{
    ExistenceProbe, OwnerResolver, ShellMetadataPort, VersionInfoReader,
};
use crate::service::classification::classify_signature;

/// 1パスのメタデータを1回の走査で解決する
///
/// シーケンス:
/// 1. 入力パスをそのまま（正規化せず）スナップショットの同一性として記録
/// 2. 存在確認。不在なら空スナップショットを返して終了
///    （ネイティブメタデータ呼び出しは一切行わない）
/// 3. 存在する場合のみ: バージョン情報（欠落は既定値に縮退）、
///    シェル種別名（ヌル結果は致命的、`?`で即中断）、
///    実行形式シグネチャ（分類器に渡す）、所有者（欠落はNoneに縮退）
/// 4. 集約して新しいスナップショットを構築
///
/// 致命的なのはシェル呼び出しの失敗センチネルのみ。バージョン情報と
/// 所有者の欠落が縮退する一方でシェル失敗だけが中断する非対称は
/// 意図的な契約（ShellMetadataPortのドキュメント参照）。
pub fn resolve_snapshot(
    path: &str,
    probe: &impl ExistenceProbe,
    version: &impl VersionInfoReader,
    shell: &impl ShellMetadataPort,
    owner: &impl OwnerResolver,
) -> Result<FileMetadataSnapshot, DomainError> {
    if !probe.exists(path) {
        return Ok(FileMetadataSnapshot::absent(path));
    }

    let version_info = version.read(path).unwrap_or_default();
    let type_name = shell.type_name(path)?;
    let signature = shell.executable_signature(path)?;
    let category = classify_signature(signature);
    let owner_name = owner.owner(path);

    Ok(FileMetadataSnapshot::new(
        path,
        owner_name,
        category,
        type_name,
        version_info,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ExecutableCategory, VersionResourceInfo};
    use std::cell::Cell;

    /// 呼び出し回数を数えるモック集約
    #[derive(Default)]
    struct MockNative {
        exists: bool,
        version: Option<VersionResourceInfo>,
        type_name: Option<String>,
        signature: u32,
        owner: Option<String>,
        version_calls: Cell<u32>,
        shell_calls: Cell<u32>,
        owner_calls: Cell<u32>,
    }

    impl ExistenceProbe for MockNative {
        fn exists(&self, _path: &str) -> bool {
            self.exists
        }
    }

    impl VersionInfoReader for MockNative {
        fn read(&self, _path: &str) -> Option<VersionResourceInfo> {
            self.version_calls.set(self.version_calls.get() + 1);
            self.version.clone()
        }
    }

    impl ShellMetadataPort for MockNative {
        fn type_name(&self, _path: &str) -> Result<String, DomainError> {
            self.shell_calls.set(self.shell_calls.get() + 1);
            self.type_name
                .clone()
                .ok_or_else(|| DomainError::NativeMetadataUnavailable("SHGetFileInfo".into()))
        }

        fn executable_signature(&self, _path: &str) -> Result<u32, DomainError> {
            self.shell_calls.set(self.shell_calls.get() + 1);
            Ok(self.signature)
        }
    }

    impl OwnerResolver for MockNative {
        fn owner(&self, _path: &str) -> Option<String> {
            self.owner_calls.set(self.owner_calls.get() + 1);
            self.owner.clone()
        }
    }

    fn sample_version() -> VersionResourceInfo {
        VersionResourceInfo {
            company_name: "Contoso".into(),
            product_name: "Widget".into(),
            file_version_text: "1.2.3.4".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_missing_path_yields_empty_snapshot() {
        let native = MockNative {
            exists: false,
            ..Default::default()
        };
        let snap = resolve_snapshot(r"C:\none.exe", &native, &native, &native, &native)
            .expect("missing file is not an error");
        assert!(!snap.exists());
        assert!(snap.owner().is_none());
        assert_eq!(snap.executable_category(), ExecutableCategory::Unknown);
        assert!(snap.type_name().is_empty());
        assert!(snap.version().is_empty());
    }

    #[test]
    fn test_missing_path_makes_zero_native_metadata_calls() {
        let native = MockNative {
            exists: false,
            ..Default::default()
        };
        let _ = resolve_snapshot(r"C:\none.exe", &native, &native, &native, &native).unwrap();
        // 存在確認ゲートで短絡し、メタデータ系の呼び出しは0回
        assert_eq!(native.version_calls.get(), 0);
        assert_eq!(native.shell_calls.get(), 0);
        assert_eq!(native.owner_calls.get(), 0);
    }

    #[test]
    fn test_full_resolution_populates_all_fields() {
        let native = MockNative {
            exists: true,
            version: Some(sample_version()),
            type_name: Some("Application".into()),
            signature: 0x0000_4550,
            owner: Some(r"CONTOSO\alice".into()),
            ..Default::default()
        };
        let snap = resolve_snapshot(r"C:\app.exe", &native, &native, &native, &native).unwrap();
        assert!(snap.exists());
        assert_eq!(snap.owner(), Some(r"CONTOSO\alice"));
        assert_eq!(snap.executable_category(), ExecutableCategory::Win32Console);
        assert_eq!(snap.type_name(), "Application");
        assert_eq!(snap.version().company_name, "Contoso");
        assert_eq!(snap.path(), r"C:\app.exe");
    }

    #[test]
    fn test_missing_version_resource_degrades_without_failing() {
        // 部分成功: バージョンリソースなしでも所有者とシェル欄は埋まる
        let native = MockNative {
            exists: true,
            version: None,
            type_name: Some("Text Document".into()),
            signature: 0,
            owner: Some(r"CONTOSO\bob".into()),
            ..Default::default()
        };
        let snap = resolve_snapshot(r"C:\note.txt", &native, &native, &native, &native).unwrap();
        assert!(snap.exists());
        assert!(snap.version().is_empty());
        assert_eq!(snap.owner(), Some(r"CONTOSO\bob"));
        assert_eq!(snap.type_name(), "Text Document");
        assert_eq!(snap.executable_category(), ExecutableCategory::Unknown);
    }

    #[test]
    fn test_missing_owner_degrades_without_failing() {
        let native = MockNative {
            exists: true,
            version: Some(sample_version()),
            type_name: Some("Application".into()),
            signature: 0x0000_5A4D,
            owner: None,
            ..Default::default()
        };
        let snap = resolve_snapshot(r"C:\old.exe", &native, &native, &native, &native).unwrap();
        assert!(snap.exists());
        assert!(snap.owner().is_none());
        assert_eq!(snap.executable_category(), ExecutableCategory::Dos);
    }

    #[test]
    fn test_shell_sentinel_aborts_whole_resolution() {
        let native = MockNative {
            exists: true,
            version: Some(sample_version()),
            type_name: None, // 失敗センチネル
            signature: 0x0000_4550,
            owner: Some(r"CONTOSO\alice".into()),
            ..Default::default()
        };
        let err = resolve_snapshot(r"C:\app.exe", &native, &native, &native, &native)
            .expect_err("shell sentinel must be fatal");
        assert!(matches!(err, DomainError::NativeMetadataUnavailable(_)));
        // 中断後は所有者参照に進まない（部分構築スナップショットを作らない）
        assert_eq!(native.owner_calls.get(), 0);
    }

    #[test]
    fn test_resolution_is_repeatable() {
        // 同じ状態からの再解決はフィールド単位で等しいスナップショットを生む
        let native = MockNative {
            exists: true,
            version: Some(sample_version()),
            type_name: Some("Application".into()),
            signature: 0x1234_454E,
            owner: Some(r"CONTOSO\alice".into()),
            ..Default::default()
        };
        let first = resolve_snapshot(r"C:\app.exe", &native, &native, &native, &native).unwrap();
        let second = resolve_snapshot(r"C:\app.exe", &native, &native, &native, &native).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.executable_category(), ExecutableCategory::Windows);
    }
}
