//! Character encoding detection for raw text input.
//!
//! Input that arrives as bytes (files, stdin) is decoded to UTF-8 before
//! summarization. Detection order:
//! 1. Byte order mark (UTF-8, UTF-16LE, UTF-16BE)
//! 2. Valid UTF-8
//! 3. GB18030, when the bytes decode without errors
//! 4. Lossy UTF-8

use std::borrow::Cow;

use encoding_rs::{Encoding, GB18030, UTF_8};

/// Detect the encoding of raw text bytes.
///
/// Returns the encoding and the length of any byte order mark to skip.
#[must_use]
pub fn detect_encoding(bytes: &[u8]) -> (&'static Encoding, usize) {
    if let Some((encoding, bom_len)) = Encoding::for_bom(bytes) {
        return (encoding, bom_len);
    }

    if std::str::from_utf8(bytes).is_ok() {
        return (UTF_8, 0);
    }

    if GB18030
        .decode_without_bom_handling_and_without_replacement(bytes)
        .is_some()
    {
        return (GB18030, 0);
    }

    (UTF_8, 0)
}

/// Decode raw text bytes to a string.
///
/// Never fails: undecodable sequences become U+FFFD.
///
/// # Examples
///
/// ```
/// use rs_summarize::encoding::decode_text;
///
/// assert_eq!(decode_text(b"plain ascii"), "plain ascii");
/// // "你好" in GB18030
/// assert_eq!(decode_text(b"\xC4\xE3\xBA\xC3"), "你好");
/// ```
#[must_use]
pub fn decode_text(bytes: &[u8]) -> Cow<'_, str> {
    let (encoding, bom_len) = detect_encoding(bytes);
    let body = &bytes[bom_len..];

    if encoding == UTF_8 {
        return String::from_utf8_lossy(body);
    }

    let (decoded, had_errors) = encoding.decode_without_bom_handling(body);
    if had_errors {
        tracing::warn!(encoding = encoding.name(), "input contained undecodable bytes");
    }
    decoded
}

#[cfg(test)]
mod tests {
    use super::*;
    use encoding_rs::{UTF_16BE, UTF_16LE};

    #[test]
    fn utf8_input_is_borrowed() {
        let text = "缓存设计。".as_bytes();
        assert!(matches!(decode_text(text), Cow::Borrowed("缓存设计。")));
        assert_eq!(detect_encoding(text), (UTF_8, 0));
    }

    #[test]
    fn utf8_bom_is_stripped() {
        let bytes = b"\xEF\xBB\xBFhello";
        assert_eq!(detect_encoding(bytes), (UTF_8, 3));
        assert_eq!(decode_text(bytes), "hello");
    }

    #[test]
    fn utf16_boms_are_honored() {
        let le = b"\xFF\xFEH\x00i\x00";
        let be = b"\xFE\xFF\x00H\x00i";
        assert_eq!(detect_encoding(le).0, UTF_16LE);
        assert_eq!(detect_encoding(be).0, UTF_16BE);
        assert_eq!(decode_text(le), "Hi");
        assert_eq!(decode_text(be), "Hi");
    }

    #[test]
    fn gb18030_is_detected_for_chinese_legacy_text() {
        // "今天。" encoded as GB18030
        let bytes = b"\xBD\xF1\xCC\xEC\xA1\xA3";
        assert_eq!(detect_encoding(bytes).0, GB18030);
        assert_eq!(decode_text(bytes), "今天。");
    }

    #[test]
    fn undecodable_bytes_fall_back_to_lossy_utf8() {
        let bytes = b"Caf\xE9";
        assert_eq!(detect_encoding(bytes), (UTF_8, 0));
        assert_eq!(decode_text(bytes), "Caf\u{FFFD}");
    }
}
