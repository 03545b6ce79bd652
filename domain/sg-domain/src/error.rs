//! ドメインエラー型
//!
//! 標準ライブラリのみ使用（外部エラーハンドリングクレートなし）

use std::fmt;

/// ドメイン層のエラー型
/// 各バリアントは特定の失敗シナリオを表現
///
/// 「ファイルが存在しない」はエラーではない（空のスナップショットが
/// 正常な終端状態）ため、NotFoundバリアントは存在しない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// シェルメタデータ呼び出しが失敗センチネル（ヌルハンドル）を返した。
    /// ネイティブサブシステム自体が利用不可であることを示す致命的エラー。
    NativeMetadataUnavailable(String),

    /// ファイルI/Oエラー
    IoError(String),

    /// 不明なエラー
    Unknown(String),
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NativeMetadataUnavailable(msg) => {
                write!(f, "Native metadata unavailable: {}", msg)
            }
            Self::IoError(msg) => {
                write!(f, "IO error: {}", msg)
            }
            Self::Unknown(msg) => {
                write!(f, "Unknown error: {}", msg)
            }
        }
    }
}

impl std::error::Error for DomainError {}
