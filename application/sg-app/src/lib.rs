//! sg-app: アプリケーション層のファサード。
//! ドメインの解決サービスと駆動ポートを束ね、パス1つ分のメタデータ
//! セッション（スナップショット保持＋明示リフレッシュ）を提供する。

use sg_domain::DomainError;
use sg_domain::model::FileMetadataSnapshot;
use sg_domain::port::driven::{
    ExistenceProbe, OwnerResolver, ShellMetadataPort, VersionInfoReader,
};
use sg_domain::service::resolve_snapshot;

use sg_adapter_fs::FsProbeAdapter;
use sg_adapter_owner::OwnerLookupAdapter;
use sg_adapter_shell::ShellInfoAdapter;
use sg_adapter_version::VersionInfoAdapter;

/// 1パス分のメタデータセッション
///
/// 解決は構築時に1回だけ即時実行される（遅延なし）。以後フィールドが
/// 再計算されることはなく、更新は呼び出し側が明示的に `refresh` を
/// 呼んだときに全体を作り直す形でのみ起きる。
///
/// スレッド契約: セッションは単一所有・単一スレッド利用が前提。
/// 複数スレッドで別々のパスを解決する場合はスレッドごとに独立した
/// セッションを作ること（セッション間に共有状態はない）。
/// 1つのセッションの並行利用は未定義であり、サポートしない。
pub struct MetadataSession<E, V, S, O> {
    path: String,
    snapshot: FileMetadataSnapshot,
    probe: E,
    version: V,
    shell: S,
    owner: O,
}

impl<E, V, S, O> MetadataSession<E, V, S, O>
where
    E: ExistenceProbe,
    V: VersionInfoReader,
    S: ShellMetadataPort,
    O: OwnerResolver,
{
    /// パスを解決してセッションを開く（構築時に即時解決）
    pub fn resolve(
        path: impl Into<String>,
        probe: E,
        version: V,
        shell: S,
        owner: O,
    ) -> Result<Self, DomainError> {
        let path = path.into();
        let snapshot = resolve_snapshot(&path, &probe, &version, &shell, &owner)?;
        Ok(Self {
            path,
            snapshot,
            probe,
            version,
            shell,
            owner,
        })
    }

    /// 保存済みのパス文字列からセッションを再構築する。
    /// 記録された同一性文字列をそのまま使って同じシーケンスを再実行する。
    pub fn from_stored_path(
        path: impl Into<String>,
        probe: E,
        version: V,
        shell: S,
        owner: O,
    ) -> Result<Self, DomainError> {
        Self::resolve(path, probe, version, shell, owner)
    }

    /// このセッションが保持するパス（入力そのまま）
    pub fn path(&self) -> &str {
        &self.path
    }

    /// 現在のスナップショット
    pub fn snapshot(&self) -> &FileMetadataSnapshot {
        &self.snapshot
    }

    /// 保存済みパスで解決シーケンス全体を再実行し、スナップショットを
    /// 丸ごと差し替える。差分適用はしない（部分的な不整合状態を避ける）。
    /// 失敗時は既存のスナップショットを保持したままエラーを返す。
    pub fn refresh(&mut self) -> Result<&FileMetadataSnapshot, DomainError> {
        let next = resolve_snapshot(
            &self.path,
            &self.probe,
            &self.version,
            &self.shell,
            &self.owner,
        )?;
        self.snapshot = next;
        Ok(&self.snapshot)
    }
}

/// ネイティブアダプター一式で構成されたセッション
pub type NativeMetadataSession =
    MetadataSession<FsProbeAdapter, VersionInfoAdapter, ShellInfoAdapter, OwnerLookupAdapter>;

/// ネイティブアダプターを束ねてセッションを開く
pub fn open(path: impl Into<String>) -> Result<NativeMetadataSession, DomainError> {
    MetadataSession::resolve(
        path,
        FsProbeAdapter::new(),
        VersionInfoAdapter::new(),
        ShellInfoAdapter::new(),
        OwnerLookupAdapter::new(),
    )
}
