//! Fixed formatting policy.
//!
//! Every message crosses into the platform as exactly one string argument
//! behind a constant format. There is no caller-visible format surface, so
//! message bytes are never interpreted as format directives.

use std::ffi::{CStr, CString};
use std::fmt;

/// Unified-logging format: one string argument, marked public so the platform
/// does not redact the body.
pub const PUBLIC_STRING_FORMAT: &CStr = c"%{public}s";

/// printf-family passthrough used by syslog backends.
pub const PASSTHROUGH_FORMAT: &CStr = c"%s";

/// printf-family format for syslog records tagged by a created handle.
pub const TAGGED_PASSTHROUGH_FORMAT: &CStr = c"[%s] %s";

/// Substituted for interior NUL bytes in rendered messages.
pub const NUL_REPLACEMENT: char = '\u{FFFD}';

// Argument-buffer layout understood by `_os_log_impl`:
// [summary][arg count] then per argument [descriptor][size][payload].
const SUMMARY_HAS_NON_SCALAR: u8 = 0x02;
const ARG_KIND_STRING: u8 = 2;
const ARG_FLAG_PUBLIC: u8 = 0x02;
const POINTER_WIDTH: usize = std::mem::size_of::<usize>();

/// Length of the encoded argument buffer for one public string.
pub const PUBLIC_STRING_ARGS_LEN: usize = 4 + POINTER_WIDTH;

/// Encode the argument buffer for [`PUBLIC_STRING_FORMAT`] carrying one
/// string whose address is `string_addr`.
#[must_use]
pub fn encode_public_string_args(string_addr: usize) -> [u8; PUBLIC_STRING_ARGS_LEN] {
    let mut buf = [0u8; PUBLIC_STRING_ARGS_LEN];
    buf[0] = SUMMARY_HAS_NON_SCALAR;
    buf[1] = 1;
    buf[2] = (ARG_KIND_STRING << 4) | ARG_FLAG_PUBLIC;
    buf[3] = POINTER_WIDTH as u8;
    buf[4..].copy_from_slice(&string_addr.to_ne_bytes());
    buf
}

/// Convert text into a C message, replacing interior NULs instead of failing.
#[must_use]
pub fn message_from_str(text: &str) -> CString {
    if text.contains('\0') {
        let cleaned = text.replace('\0', &NUL_REPLACEMENT.to_string());
        CString::new(cleaned).unwrap_or_default()
    } else {
        CString::new(text).unwrap_or_default()
    }
}

/// Render format arguments into a C message.
#[must_use]
pub fn message_from_args(args: fmt::Arguments<'_>) -> CString {
    match args.as_str() {
        Some(literal) => message_from_str(literal),
        None => message_from_str(&args.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_format_is_single_string() {
        assert_eq!(PUBLIC_STRING_FORMAT.to_bytes(), b"%{public}s");
        assert_eq!(PASSTHROUGH_FORMAT.to_bytes(), b"%s");
    }

    #[test]
    fn args_header_marks_one_public_string() {
        let buf = encode_public_string_args(0x1234);
        assert_eq!(buf[0], 0x02);
        assert_eq!(buf[1], 1);
        assert_eq!(buf[2], 0x22);
        assert_eq!(usize::from(buf[3]), std::mem::size_of::<usize>());
    }

    #[test]
    fn args_payload_is_native_endian_address() {
        let addr = 0x0102_0304usize;
        let buf = encode_public_string_args(addr);
        let mut raw = [0u8; std::mem::size_of::<usize>()];
        raw.copy_from_slice(&buf[4..]);
        assert_eq!(usize::from_ne_bytes(raw), addr);
    }

    #[test]
    fn interior_nul_is_replaced() {
        let message = message_from_str("disk\0failure");
        assert_eq!(message.to_str().unwrap(), "disk\u{FFFD}failure");
    }

    #[test]
    fn plain_text_passes_through() {
        let message = message_from_str("hello");
        assert_eq!(message.as_bytes(), b"hello");
    }

    #[test]
    fn format_directives_are_not_expanded() {
        let message = message_from_str("%s %n %{private}s");
        assert_eq!(message.as_bytes(), b"%s %n %{private}s");
    }

    #[test]
    fn args_render_formatted_values() {
        let message = message_from_args(format_args!("{} of {}", 3, 5));
        assert_eq!(message.as_bytes(), b"3 of 5");
    }
}
