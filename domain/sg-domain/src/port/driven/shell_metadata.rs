//! シェルメタデータポート

use crate::error::DomainError;

/// シェルのファイル情報問い合わせポート
///
/// 注意: `type_name` の失敗センチネル（ヌルハンドル）は解決全体を
/// 中断する致命的エラーとして扱う。一方バージョン情報や所有者の欠落は
/// 空フィールドに縮退する。この非対称は意図的な契約であり、
/// 「修正」してはならない（既知の尖ったエッジとしてここに明記する）。
pub trait ShellMetadataPort {
    /// シェルが報告する種別名。ヌル結果は致命的
    /// （`DomainError::NativeMetadataUnavailable`）。
    fn type_name(&self, path: &str) -> Result<String, DomainError>;

    /// 実行形式シグネチャワード（生の32bit値）。
    /// 0は「実行形式ではない」を意味する正常値で、分類器がUnknownに写像する。
    fn executable_signature(&self, path: &str) -> Result<u32, DomainError>;
}
