//! 所有者解決アダプター
//! Windows: GetNamedSecurityInfoW で所有者SIDを取得し LookupAccountSidW で
//! `DOMAIN\name` 形式に解決する
//! 非Windows: 未解決として扱う
//!
//! 解決できない場合はNone（解決全体を失敗させない）。

use sg_domain::port::driven::OwnerResolver;

#[derive(Debug, Default)]
pub struct OwnerLookupAdapter;

impl OwnerLookupAdapter {
    pub fn new() -> Self {
        Self
    }
}

#[cfg(windows)]
mod win {
    use std::ffi::OsStr;
    use std::os::windows::ffi::OsStrExt;
    use windows::Win32::Foundation::{ERROR_SUCCESS, HLOCAL, LocalFree};
    use windows::Win32::Security::Authorization::{GetNamedSecurityInfoW, SE_FILE_OBJECT};
    use windows::Win32::Security::{
        LookupAccountSidW, OWNER_SECURITY_INFORMATION, PSECURITY_DESCRIPTOR, PSID, SID_NAME_USE,
    };
    use windows::core::{PCWSTR, PWSTR};

    struct DescriptorGuard(PSECURITY_DESCRIPTOR);
    impl Drop for DescriptorGuard {
        fn drop(&mut self) {
            if !self.0 .0.is_null() {
                unsafe {
                    let _ = LocalFree(Some(HLOCAL(self.0 .0)));
                }
            }
        }
    }

    fn to_wide(s: &str) -> Vec<u16> {
        OsStr::new(s).encode_wide().chain(std::iter::once(0)).collect()
    }

    fn account_from_sid(sid: PSID) -> Option<String> {
        let mut name_len: u32 = 0;
        let mut domain_len: u32 = 0;
        let mut use_kind = SID_NAME_USE::default();
        // 1回目はサイズ取得のみ（バッファ不足エラーは想定内）
        let _ = unsafe {
            LookupAccountSidW(
                PCWSTR::null(),
                sid,
                None,
                &mut name_len,
                None,
                &mut domain_len,
                &mut use_kind,
            )
        };
        if name_len == 0 {
            return None;
        }

        let mut name = vec![0u16; name_len as usize];
        let mut domain = vec![0u16; domain_len.max(1) as usize];
        unsafe {
            LookupAccountSidW(
                PCWSTR::null(),
                sid,
                Some(PWSTR(name.as_mut_ptr())),
                &mut name_len,
                Some(PWSTR(domain.as_mut_ptr())),
                &mut domain_len,
                &mut use_kind,
            )
        }
        .ok()?;

        let name = String::from_utf16_lossy(&name[..name_len as usize]);
        let domain = String::from_utf16_lossy(&domain[..domain_len as usize]);
        if domain.is_empty() {
            Some(name)
        } else {
            Some(format!(r"{}\{}", domain, name))
        }
    }

    pub(super) fn owner(path: &str) -> Option<String> {
        let wide = to_wide(path);
        let mut sid = PSID::default();
        let mut descriptor = PSECURITY_DESCRIPTOR::default();
        let err = unsafe {
            GetNamedSecurityInfoW(
                PCWSTR(wide.as_ptr()),
                SE_FILE_OBJECT,
                OWNER_SECURITY_INFORMATION,
                Some(&mut sid),
                None,
                None,
                None,
                Some(&mut descriptor),
            )
        };
        if err != ERROR_SUCCESS {
            return None;
        }
        // SIDはディスクリプタ内を指すため、解放はディスクリプタのみ
        let _guard = DescriptorGuard(descriptor);
        if sid.0.is_null() {
            return None;
        }
        account_from_sid(sid)
    }
}

#[cfg(windows)]
impl OwnerResolver for OwnerLookupAdapter {
    fn owner(&self, path: &str) -> Option<String> {
        win::owner(path)
    }
}

#[cfg(not(windows))]
impl OwnerResolver for OwnerLookupAdapter {
    fn owner(&self, _path: &str) -> Option<String> {
        None
    }
}

#[cfg(all(test, not(windows)))]
mod tests {
    use super::*;

    #[test]
    fn test_non_windows_stub_reports_unresolved() {
        let adapter = OwnerLookupAdapter::new();
        assert!(adapter.owner("/bin/sh").is_none());
    }
}
