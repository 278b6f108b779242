// src/common/response.rs

use core::fmt;
use core::str::FromStr; // For parsing the reading field to a number

use arrayvec::ArrayVec;

/// Largest documented EZO response (`Name,?`, 24 bytes).
pub const MAX_RESPONSE_LEN: usize = 24;

/// A raw response buffer as read off the bus.
///
/// Responses are fixed-size per command (7/13/17/24/2 bytes) and are kept
/// raw; callers slice or decode what they need. The device pads unused
/// trailing bytes with NUL.
pub type ResponseBytes = ArrayVec<u8, MAX_RESPONSE_LEN>;

/// Byte range of the numeric field inside a 7-byte `R` response.
///
/// The first byte is the device's status code; the following four carry
/// the ASCII reading. The source material parses exactly this window, so
/// no wider validation is performed here.
pub const READING_FIELD_START: usize = 1;
pub const READING_FIELD_END: usize = 5;

/// Error during decode of the reading field of an `R` response.
#[derive(Debug, Copy, Clone, Eq, PartialEq, thiserror::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ReadingParseError {
    /// Response is shorter than the reading field.
    #[error("response shorter than the reading field")]
    TooShort,
    /// Reading field holds bytes that are not ASCII text.
    #[error("reading field is not ASCII text")]
    NotAscii,
    /// Reading field is text but not a parseable number.
    #[error("reading field is not a number")]
    NotNumeric,
}

/// Decodes the reading field of an `R` response into a float.
///
/// Parses bytes `[1..5)` as ASCII and forwards the underlying parse
/// failure untouched, mirroring the probe firmware's own behavior.
pub fn parse_reading(buf: &[u8]) -> Result<f32, ReadingParseError> {
    let field = buf
        .get(READING_FIELD_START..READING_FIELD_END)
        .ok_or(ReadingParseError::TooShort)?;
    let text = core::str::from_utf8(field).map_err(|_| ReadingParseError::NotAscii)?;
    f32::from_str(text).map_err(|_| ReadingParseError::NotNumeric)
}

/// Best-effort view of a response buffer as printable text.
///
/// Takes the buffer up to the first NUL pad byte; returns an empty string
/// if the content is not UTF-8. Used only for diagnostic output.
pub fn as_text(buf: &[u8]) -> &str {
    let end = buf.iter().position(|&b| b == 0).unwrap_or(buf.len());
    core::str::from_utf8(&buf[..end]).unwrap_or("")
}

/// Wrapper that `Display`s a raw buffer for diagnostics, falling back to
/// a hex dump when the payload is not text.
pub struct DisplayResponse<'a>(pub &'a [u8]);

impl fmt::Display for DisplayResponse<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = as_text(self.0);
        if !text.is_empty() {
            f.write_str(text)
        } else {
            for byte in self.0 {
                write!(f, "{:02x} ", byte)?;
            }
            Ok(())
        }
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use std::string::ToString;

    #[test]
    fn test_parse_reading_valid() {
        // 7-byte R response: status byte, 4-char reading, NUL padding.
        assert_eq!(parse_reading(b"R0.50\x00\x00"), Ok(0.50));
        assert_eq!(parse_reading(b"\x017.04\x00\x00"), Ok(7.04));
        assert_eq!(parse_reading(b"\x019.22\x00\x00"), Ok(9.22));
    }

    #[test]
    fn test_parse_reading_too_short() {
        assert_eq!(parse_reading(b""), Err(ReadingParseError::TooShort));
        assert_eq!(parse_reading(b"\x010.5"), Err(ReadingParseError::TooShort));
    }

    #[test]
    fn test_parse_reading_not_ascii() {
        assert_eq!(
            parse_reading(b"\x01\xff\xfe\xfd\xfc\x00\x00"),
            Err(ReadingParseError::NotAscii)
        );
    }

    #[test]
    fn test_parse_reading_not_numeric() {
        assert_eq!(
            parse_reading(b"\x01abcd\x00\x00"),
            Err(ReadingParseError::NotNumeric)
        );
        // NUL padding leaking into the field is a parse failure, exactly
        // as it is for the source material.
        assert_eq!(
            parse_reading(b"\x019.2\x00\x00\x00"),
            Err(ReadingParseError::NotNumeric)
        );
    }

    #[test]
    fn test_as_text() {
        assert_eq!(as_text(b"?I,pH,1.98\x00\x00\x00"), "?I,pH,1.98");
        assert_eq!(as_text(b"plain"), "plain");
        assert_eq!(as_text(b"\x00\x00"), "");
        assert_eq!(as_text(b"\xff\xfe"), "");
    }

    #[test]
    fn test_display_response() {
        assert_eq!(DisplayResponse(b"?Status,P,5.038\x00\x00").to_string(), "?Status,P,5.038");
        assert_eq!(DisplayResponse(b"\xff\x01").to_string(), "ff 01 ");
    }

    #[test]
    fn test_response_bytes_capacity() {
        let buf = ResponseBytes::new();
        assert_eq!(buf.capacity(), 24);
        assert!(buf.is_empty());
    }
}
