//! シグネチャワードの実行形式分類サービス
//!
//! シェルの実行形式問い合わせはレガシーなパック形式（16bit+16bitの
//! 32bitワード）を返す。ここで一元的にデコードすることで、呼び出し側が
//! ビット操作を再導出せずに済み、分類がリゾルバの構造から独立する。

use crate::model::ExecutableCategory;

/// "MZ" - MS-DOS実行形式マーカー
pub const SIG_MZ: u16 = 0x5A4D;
/// "PE" - Portable Executableマーカー
pub const SIG_PE: u16 = 0x4550;
/// "NE" - New Executable（16bit Windows）マーカー
pub const SIG_NE: u16 = 0x454E;
/// "LE" - Linear Executable（VxD等）マーカー
pub const SIG_LE: u16 = 0x454C;

/// シグネチャワードを実行形式カテゴリに分類する
///
/// 純粋関数・全域・割り当てなし。同じ入力には常に同じ出力。
///
/// 判定表:
/// - シグネチャ0 → Unknown
/// - 上位16bitが0: MZ → Dos、PE → Win32Console、他 → Unknown
/// - 上位16bitが非0: NE/PE/LE → Windows、他 → Unknown
///
/// PEが上位16bitの有無でWin32Console/Windowsに分かれる非対称は
/// 意図的な判定表の一部。単純化しないこと。
pub fn classify_signature(signature: u32) -> ExecutableCategory {
    if signature == 0 {
        return ExecutableCategory::Unknown;
    }

    let low16 = (signature & 0xFFFF) as u16;
    let high16 = (signature >> 16) as u16; // 論理シフト（u32なので常に）

    if high16 == 0 {
        match low16 {
            SIG_MZ => ExecutableCategory::Dos,
            SIG_PE => ExecutableCategory::Win32Console,
            _ => ExecutableCategory::Unknown,
        }
    } else {
        match low16 {
            SIG_NE | SIG_PE | SIG_LE => ExecutableCategory::Windows,
            _ => ExecutableCategory::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_signature_is_unknown() {
        assert_eq!(classify_signature(0), ExecutableCategory::Unknown);
    }

    #[test]
    fn test_mz_low_half_is_dos() {
        assert_eq!(classify_signature(0x0000_5A4D), ExecutableCategory::Dos);
    }

    #[test]
    fn test_pe_with_zero_high_half_is_win32_console() {
        assert_eq!(
            classify_signature(0x0000_4550),
            ExecutableCategory::Win32Console
        );
    }

    #[test]
    fn test_ne_with_nonzero_high_half_is_windows() {
        assert_eq!(classify_signature(0x1234_454E), ExecutableCategory::Windows);
    }

    #[test]
    fn test_pe_with_nonzero_high_half_is_windows() {
        // 上位16bitが0の場合（Win32Console）とは別カテゴリになること
        assert_eq!(classify_signature(0x1234_4550), ExecutableCategory::Windows);
    }

    #[test]
    fn test_le_with_nonzero_high_half_is_windows() {
        assert_eq!(classify_signature(0x1234_454C), ExecutableCategory::Windows);
    }

    #[test]
    fn test_unmatched_low_half_with_zero_high_half_is_unknown() {
        assert_eq!(classify_signature(0x0000_0001), ExecutableCategory::Unknown);
    }

    #[test]
    fn test_unmatched_low_half_with_nonzero_high_half_is_unknown() {
        assert_eq!(classify_signature(0x1234_9999), ExecutableCategory::Unknown);
    }

    #[test]
    fn test_mz_with_nonzero_high_half_is_unknown() {
        // MZは上位16bitが0の分岐でのみDos判定される
        assert_eq!(classify_signature(0x0001_5A4D), ExecutableCategory::Unknown);
    }

    #[test]
    fn test_any_high_half_value_maps_windows_for_ne_marker() {
        for high in [0x0001u32, 0x00FF, 0x0A00, 0xFFFF] {
            assert_eq!(
                classify_signature((high << 16) | u32::from(SIG_NE)),
                ExecutableCategory::Windows
            );
        }
    }

    #[test]
    fn test_deterministic_over_sampled_inputs() {
        // 全域・純粋: サンプル入力で2回呼んでも同じ結果
        for signature in [0u32, 1, 0x5A4D, 0x4550, 0xFFFF_FFFF, 0x8000_0000] {
            assert_eq!(
                classify_signature(signature),
                classify_signature(signature)
            );
        }
    }
}
