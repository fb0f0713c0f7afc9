//! Response body encoding.
//!
//! Content negotiation is reduced to a single question: did the client list
//! `gzip` in its `Accept-Encoding` header?

use std::io::{self, Write};

use flate2::Compression;
use flate2::write::GzEncoder;

pub const GZIP: &str = "gzip";

/// Returns true when the comma-separated `Accept-Encoding` value contains
/// the exact token `gzip`.
///
/// Tokens are trimmed of surrounding whitespace and matched case-sensitively.
/// Parameters such as `;q=0.5` are not stripped.
pub fn lists_gzip(header_value: &str) -> bool {
    header_value.split(',').any(|token| token.trim() == GZIP)
}

/// Compresses `data` into a gzip stream using the default compression level.
///
/// The header timestamp makes the output vary between runs, so callers
/// should compare decompressed bytes, never compressed ones.
pub fn gzip(data: &[u8]) -> io::Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    encoder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::read::GzDecoder;
    use std::io::Read;

    #[test]
    fn gzip_token_is_found_among_others() {
        assert!(lists_gzip("gzip"));
        assert!(lists_gzip("deflate, gzip"));
        assert!(lists_gzip("br ,  gzip  , deflate"));
    }

    #[test]
    fn gzip_token_must_match_exactly() {
        assert!(!lists_gzip(""));
        assert!(!lists_gzip("GZIP"));
        assert!(!lists_gzip("x-gzip"));
        assert!(!lists_gzip("gzip;q=1.0"));
        assert!(!lists_gzip("invalid-encoding-1, invalid-encoding-2"));
    }

    #[test]
    fn gzip_output_decompresses_to_input() {
        let input = "héllo wörld ".repeat(50);
        let compressed = gzip(input.as_bytes()).unwrap();

        assert_eq!(&compressed[..2], &[0x1f, 0x8b]);

        let mut decoded = String::new();
        GzDecoder::new(&compressed[..])
            .read_to_string(&mut decoded)
            .unwrap();
        assert_eq!(decoded, input);
    }

    #[test]
    fn gzip_of_empty_input_is_still_a_valid_stream() {
        let compressed = gzip(b"").unwrap();

        let mut decoded = Vec::new();
        GzDecoder::new(&compressed[..])
            .read_to_end(&mut decoded)
            .unwrap();
        assert!(decoded.is_empty());
    }
}
