//! ファイル存在確認ポート

/// ファイル存在確認ポート
pub trait ExistenceProbe {
    /// パスが存在するか
    fn exists(&self, path: &str) -> bool;
}
