//! ファイル存在確認アダプター
//!
//! 標準ライブラリのファイルシステムプリミティブで存在確認ポートを実装。

use sg_domain::port::driven::ExistenceProbe;
use std::path::Path;

#[derive(Debug, Default, Clone)]
pub struct FsProbeAdapter;

impl FsProbeAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl ExistenceProbe for FsProbeAdapter {
    fn exists(&self, path: &str) -> bool {
        // シンボリックリンクは辿る（metadata相当の意味論）
        Path::new(path).exists()
    }
}
