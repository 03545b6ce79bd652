//! 実行形式カテゴリ
//!
//! シェルの実行形式問い合わせが返す32bitシグネチャワードから
//! 判定される閉じた4値の列挙型。

/// 実行形式カテゴリ（閉じた4値）
///
/// あらゆるシグネチャワードがこの4値のいずれかに写像される（全域関数）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutableCategory {
    /// 判定不能（シグネチャ0、または未知のマーカー）
    #[default]
    Unknown,
    /// MS-DOS実行形式（"MZ"）
    Dos,
    /// Win32コンソール実行形式（上位16bitが0の"PE"）
    Win32Console,
    /// Windows実行形式（NE/PE/LE、上位16bit非0）
    Windows,
}

impl ExecutableCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::Dos => "Dos",
            Self::Win32Console => "Win32Console",
            Self::Windows => "Windows",
        }
    }
}

impl std::fmt::Display for ExecutableCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
