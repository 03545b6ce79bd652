//! バージョンリソースアダプター
//! Windows: GetFileVersionInfoW / VerQueryValueW で固定情報と文字列テーブルを読む
//! 非Windows: リソース不在として扱う
//!
//! リソースを持たないファイルは失敗ではなくNone（呼び出し側で既定値に縮退）。

use sg_domain::model::VersionResourceInfo;
use sg_domain::port::driven::VersionInfoReader;

// VS_FIXEDFILEINFO.dwFileFlags のビット
const FF_DEBUG: u32 = 0x0000_0001; // VS_FF_DEBUG
const FF_PRERELEASE: u32 = 0x0000_0002; // VS_FF_PRERELEASE
const FF_PATCHED: u32 = 0x0000_0004; // VS_FF_PATCHED
const FF_PRIVATEBUILD: u32 = 0x0000_0008; // VS_FF_PRIVATEBUILD
const FF_SPECIALBUILD: u32 = 0x0000_0020; // VS_FF_SPECIALBUILD

#[derive(Debug, Default)]
pub struct VersionInfoAdapter;

impl VersionInfoAdapter {
    pub fn new() -> Self {
        Self
    }
}

/// dwFileFlags（マスク適用後）をフラグフィールドに展開
fn apply_file_flags(info: &mut VersionResourceInfo, flags: u32, mask: u32) {
    let effective = flags & mask;
    info.is_debug = effective & FF_DEBUG != 0;
    info.is_prerelease = effective & FF_PRERELEASE != 0;
    info.is_patched = effective & FF_PATCHED != 0;
    info.is_private_build = effective & FF_PRIVATEBUILD != 0;
    info.is_special_build = effective & FF_SPECIALBUILD != 0;
}

#[cfg(windows)]
mod win {
    use super::apply_file_flags;
    use sg_domain::model::{VersionQuad, VersionResourceInfo};
    use std::ffi::OsStr;
    use std::os::windows::ffi::OsStrExt;
    use windows::Win32::Storage::FileSystem::{
        GetFileVersionInfoSizeW, GetFileVersionInfoW, VerQueryValueW,
    };
    use windows::core::PCWSTR;

    /// VS_FIXEDFILEINFO と同一レイアウト（生のu32で読む）
    #[repr(C)]
    #[derive(Clone, Copy)]
    struct FixedFileInfo {
        signature: u32,
        struct_version: u32,
        file_version_ms: u32,
        file_version_ls: u32,
        product_version_ms: u32,
        product_version_ls: u32,
        file_flags_mask: u32,
        file_flags: u32,
        file_os: u32,
        file_type: u32,
        file_subtype: u32,
        file_date_ms: u32,
        file_date_ls: u32,
    }

    // 固定情報ブロックのマジック
    const FIXED_INFO_SIGNATURE: u32 = 0xFEEF_04BD;

    fn to_wide(s: &str) -> Vec<u16> {
        OsStr::new(s).encode_wide().chain(std::iter::once(0)).collect()
    }

    fn query_value(block: &[u8], sub_block: &str) -> Option<(*const core::ffi::c_void, u32)> {
        let sub = to_wide(sub_block);
        let mut ptr: *mut core::ffi::c_void = std::ptr::null_mut();
        let mut len: u32 = 0;
        let ok = unsafe {
            VerQueryValueW(
                block.as_ptr() as *const _,
                PCWSTR(sub.as_ptr()),
                &mut ptr,
                &mut len,
            )
        };
        if !ok.as_bool() || ptr.is_null() || len == 0 {
            return None;
        }
        Some((ptr as *const _, len))
    }

    fn read_fixed_info(block: &[u8], info: &mut VersionResourceInfo) {
        let Some((ptr, len)) = query_value(block, "\\") else {
            return;
        };
        if (len as usize) < std::mem::size_of::<FixedFileInfo>() {
            return;
        }
        let fixed = unsafe { *(ptr as *const FixedFileInfo) };
        if fixed.signature != FIXED_INFO_SIGNATURE {
            return;
        }
        info.file_version = VersionQuad::from_packed(fixed.file_version_ms, fixed.file_version_ls);
        info.product_version =
            VersionQuad::from_packed(fixed.product_version_ms, fixed.product_version_ls);
        apply_file_flags(info, fixed.file_flags, fixed.file_flags_mask);
    }

    /// \VarFileInfo\Translation の(言語, コードページ)ペア一覧。
    /// 取得できなければ米国英語/Unicodeと米国英語/Windows-1252を試す。
    fn translations(block: &[u8]) -> Vec<(u16, u16)> {
        if let Some((ptr, len)) = query_value(block, r"\VarFileInfo\Translation") {
            let count = len as usize / 4;
            if count > 0 {
                let pairs = unsafe { std::slice::from_raw_parts(ptr as *const [u16; 2], count) };
                return pairs.iter().map(|p| (p[0], p[1])).collect();
            }
        }
        vec![(0x0409, 0x04B0), (0x0409, 0x04E4)]
    }

    fn read_string(block: &[u8], lang: u16, codepage: u16, key: &str) -> Option<String> {
        let sub_block = format!(r"\StringFileInfo\{:04X}{:04X}\{}", lang, codepage, key);
        let (ptr, len) = query_value(block, &sub_block)?;
        // lenは文字数（終端nul込みのことがある）
        let raw = unsafe { std::slice::from_raw_parts(ptr as *const u16, len as usize) };
        let end = raw.iter().position(|&c| c == 0).unwrap_or(raw.len());
        let value = String::from_utf16_lossy(&raw[..end]);
        if value.is_empty() { None } else { Some(value) }
    }

    pub(super) fn read(path: &str) -> Option<VersionResourceInfo> {
        let wide = to_wide(path);
        let size = unsafe { GetFileVersionInfoSizeW(PCWSTR(wide.as_ptr()), None) };
        if size == 0 {
            // バージョンリソースなし（エラーではない）
            return None;
        }

        let mut block = vec![0u8; size as usize];
        if unsafe {
            GetFileVersionInfoW(
                PCWSTR(wide.as_ptr()),
                0,
                size,
                block.as_mut_ptr() as *mut _,
            )
        }
        .is_err()
        {
            return None;
        }

        let mut info = VersionResourceInfo::default();
        read_fixed_info(&block, &mut info);

        for (lang, codepage) in translations(&block) {
            let mut found = false;
            let mut take = |slot: &mut String, key: &str| {
                if let Some(value) = read_string(&block, lang, codepage, key) {
                    *slot = value;
                    found = true;
                }
            };
            take(&mut info.company_name, "CompanyName");
            take(&mut info.product_name, "ProductName");
            take(&mut info.file_description, "FileDescription");
            take(&mut info.original_filename, "OriginalFilename");
            take(&mut info.internal_name, "InternalName");
            take(&mut info.legal_copyright, "LegalCopyright");
            take(&mut info.comments, "Comments");
            take(&mut info.file_version_text, "FileVersion");
            take(&mut info.product_version_text, "ProductVersion");
            // 最初に文字列が取れた翻訳を採用
            if found {
                break;
            }
        }

        Some(info)
    }
}

#[cfg(windows)]
impl VersionInfoReader for VersionInfoAdapter {
    fn read(&self, path: &str) -> Option<VersionResourceInfo> {
        win::read(path)
    }
}

#[cfg(not(windows))]
impl VersionInfoReader for VersionInfoAdapter {
    fn read(&self, _path: &str) -> Option<VersionResourceInfo> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_respect_validity_mask() {
        let mut info = VersionResourceInfo::default();
        // デバッグ+プレリリースが立っているがマスクはデバッグのみ有効
        apply_file_flags(&mut info, FF_DEBUG | FF_PRERELEASE, FF_DEBUG);
        assert!(info.is_debug);
        assert!(!info.is_prerelease);
    }

    #[test]
    fn test_all_flags_expand() {
        let mut info = VersionResourceInfo::default();
        let all = FF_DEBUG | FF_PRERELEASE | FF_PATCHED | FF_PRIVATEBUILD | FF_SPECIALBUILD;
        apply_file_flags(&mut info, all, all);
        assert!(info.is_debug);
        assert!(info.is_prerelease);
        assert!(info.is_patched);
        assert!(info.is_private_build);
        assert!(info.is_special_build);
    }

    #[cfg(not(windows))]
    #[test]
    fn test_non_windows_stub_reports_absent() {
        let adapter = VersionInfoAdapter::new();
        assert!(adapter.read("/bin/sh").is_none());
    }
}
