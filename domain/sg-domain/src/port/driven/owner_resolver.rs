//! 所有者解決ポート

/// アクセス制御情報から所有者識別子を引くポート
pub trait OwnerResolver {
    /// 所有者の識別文字列（例: `DOMAIN\user`）。解決できなければNone。
    fn owner(&self, path: &str) -> Option<String>;
}
