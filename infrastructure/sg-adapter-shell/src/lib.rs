//! シェルメタデータアダプター
//! Windows: SHGetFileInfoW で種別名と実行形式シグネチャを取得
//! 非Windows: ネイティブサブシステム不在として扱う

use sg_domain::DomainError;
use sg_domain::port::driven::ShellMetadataPort;

#[derive(Debug, Default)]
pub struct ShellInfoAdapter;

impl ShellInfoAdapter {
    pub fn new() -> Self {
        Self
    }
}

#[cfg(windows)]
mod win {
    use sg_domain::DomainError;
    use std::ffi::OsStr;
    use std::os::windows::ffi::OsStrExt;
    use windows::Win32::Storage::FileSystem::FILE_FLAGS_AND_ATTRIBUTES;
    use windows::Win32::UI::Shell::{
        SHGetFileInfoW, SHFILEINFOW, SHGFI_EXETYPE, SHGFI_TYPENAME,
    };
    use windows::core::PCWSTR;

    fn to_wide(s: &str) -> Vec<u16> {
        OsStr::new(s).encode_wide().chain(std::iter::once(0)).collect()
    }

    fn from_wide_buffer(buffer: &[u16]) -> String {
        let len = buffer.iter().position(|&c| c == 0).unwrap_or(buffer.len());
        String::from_utf16_lossy(&buffer[..len])
    }

    pub(super) fn type_name(path: &str) -> Result<String, DomainError> {
        let wide = to_wide(path);
        let mut info = SHFILEINFOW::default();
        let result = unsafe {
            SHGetFileInfoW(
                PCWSTR(wide.as_ptr()),
                FILE_FLAGS_AND_ATTRIBUTES(0),
                Some(&mut info),
                std::mem::size_of::<SHFILEINFOW>() as u32,
                SHGFI_TYPENAME,
            )
        };
        // 戻り値0が失敗センチネル。解決全体を中断する致命的条件として伝播
        if result == 0 {
            return Err(DomainError::NativeMetadataUnavailable(format!(
                "SHGetFileInfoW(SHGFI_TYPENAME) returned null for {}",
                path
            )));
        }
        Ok(from_wide_buffer(&info.szTypeName))
    }

    pub(super) fn executable_signature(path: &str) -> Result<u32, DomainError> {
        let wide = to_wide(path);
        let mut info = SHFILEINFOW::default();
        // SHGFI_EXETYPE では戻り値そのものがパックされたシグネチャワード。
        // 0は「実行形式ではない」を意味する正常値であり、センチネルではない。
        let result = unsafe {
            SHGetFileInfoW(
                PCWSTR(wide.as_ptr()),
                FILE_FLAGS_AND_ATTRIBUTES(0),
                Some(&mut info),
                std::mem::size_of::<SHFILEINFOW>() as u32,
                SHGFI_EXETYPE,
            )
        };
        Ok(result as u32)
    }
}

#[cfg(windows)]
impl ShellMetadataPort for ShellInfoAdapter {
    fn type_name(&self, path: &str) -> Result<String, DomainError> {
        win::type_name(path)
    }

    fn executable_signature(&self, path: &str) -> Result<u32, DomainError> {
        win::executable_signature(path)
    }
}

#[cfg(not(windows))]
impl ShellMetadataPort for ShellInfoAdapter {
    fn type_name(&self, _path: &str) -> Result<String, DomainError> {
        Err(DomainError::NativeMetadataUnavailable(
            "shell metadata is not available on this platform".into(),
        ))
    }

    fn executable_signature(&self, _path: &str) -> Result<u32, DomainError> {
        Err(DomainError::NativeMetadataUnavailable(
            "shell metadata is not available on this platform".into(),
        ))
    }
}

#[cfg(all(test, not(windows)))]
mod tests {
    use super::*;

    #[test]
    fn test_non_windows_stub_reports_unavailable() {
        let adapter = ShellInfoAdapter::new();
        assert!(matches!(
            adapter.type_name("/tmp/x"),
            Err(DomainError::NativeMetadataUnavailable(_))
        ));
        assert!(matches!(
            adapter.executable_signature("/tmp/x"),
            Err(DomainError::NativeMetadataUnavailable(_))
        ));
    }
}
