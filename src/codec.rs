// Codec module - text <-> Base64 transforms
//
// Stateless and deterministic: the same input always yields the same output.
// Encoding takes the UTF-8 bytes of the input and Base64-encodes them with
// the standard alphabet (with padding). Decoding is the strict inverse and
// fails on anything outside the alphabet/padding rules or on byte sequences
// that are not valid UTF-8.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use thiserror::Error;

/// Errors from decoding Base64 text back into a string
#[derive(Debug, Error)]
pub enum CodecError {
    /// Input is not valid standard-alphabet Base64 (bad symbol, bad padding)
    #[error("invalid Base64 input: {0}")]
    Base64(#[from] base64::DecodeError),

    /// Input decoded to bytes that are not valid UTF-8
    #[error("decoded bytes are not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Encode a string as standard-alphabet Base64 with padding.
///
/// A `&str` is guaranteed valid UTF-8, so encoding cannot fail.
pub fn encode(text: &str) -> String {
    STANDARD.encode(text.as_bytes())
}

/// Decode standard-alphabet Base64 back into a string.
///
/// Strict: rejects characters outside the alphabet, incorrect padding, and
/// decoded bytes that are not valid UTF-8.
pub fn decode(text: &str) -> Result<String, CodecError> {
    let bytes = STANDARD.decode(text.as_bytes())?;
    Ok(String::from_utf8(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_hello() {
        assert_eq!(encode("hello"), "aGVsbG8=");
    }

    #[test]
    fn test_decode_hello() {
        assert_eq!(decode("aGVsbG8=").unwrap(), "hello");
    }

    #[test]
    fn test_round_trip_ascii() {
        let input = "The quick brown fox jumps over the lazy dog";
        assert_eq!(decode(&encode(input)).unwrap(), input);
    }

    #[test]
    fn test_round_trip_unicode() {
        // Multi-byte sequences must survive the UTF-8 -> Base64 -> UTF-8 trip
        for s in ["héllo wörld", "日本語テキスト", "🦀 emoji", ""] {
            assert_eq!(decode(&encode(s)).unwrap(), s);
        }
    }

    #[test]
    fn test_decode_rejects_bad_alphabet() {
        assert!(matches!(
            decode("not-valid-base64!!"),
            Err(CodecError::Base64(_))
        ));
    }

    #[test]
    fn test_decode_rejects_bad_padding() {
        assert!(matches!(decode("aGVsbG8"), Err(CodecError::Base64(_))));
    }

    #[test]
    fn test_decode_rejects_invalid_utf8() {
        // 0xFF is never valid UTF-8; "/w==" decodes to that single byte
        assert!(matches!(decode("/w=="), Err(CodecError::Utf8(_))));
    }

    #[test]
    fn test_encode_is_deterministic() {
        assert_eq!(encode("same input"), encode("same input"));
    }
}
