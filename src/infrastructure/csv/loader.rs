// ============================================================
// DATASET LOADER
// ============================================================
// Read uploaded dataset files as text with encoding fallback

use std::path::Path;

use encoding_rs::Encoding;
use tracing::debug;

use crate::domain::error::{AppError, Result};

/// Read a dataset file as text. Non-`.csv` uploads are rejected before
/// any bytes are read so the caller can surface the error immediately.
pub fn load_dataset_text(path: &Path) -> Result<String> {
    let is_csv = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("csv"))
        .unwrap_or(false);
    if !is_csv {
        return Err(AppError::UnsupportedFile(format!(
            "expected a .csv file, got {}",
            path.display()
        )));
    }

    let bytes = std::fs::read(path)
        .map_err(|e| AppError::IoError(format!("failed to read {}: {}", path.display(), e)))?;
    debug!(path = %path.display(), bytes = bytes.len(), "dataset file read");
    Ok(decode_text(&bytes))
}

/// Decode raw bytes, honoring a BOM when present and otherwise falling
/// back to lossy UTF-8 so a stray byte never aborts the upload
pub fn decode_text(bytes: &[u8]) -> String {
    if let Some((encoding, bom_len)) = Encoding::for_bom(bytes) {
        let (text, _had_errors) = encoding.decode_without_bom_handling(&bytes[bom_len..]);
        return text.into_owned();
    }
    let (text, _, _) = encoding_rs::UTF_8.decode(bytes);
    text.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_csv_extension() {
        let result = load_dataset_text(Path::new("transactions.xlsx"));
        assert!(matches!(result, Err(AppError::UnsupportedFile(_))));
    }

    #[test]
    fn test_decode_plain_utf8() {
        assert_eq!(decode_text(b"a,b\n1,2\n"), "a,b\n1,2\n");
    }

    #[test]
    fn test_decode_strips_utf8_bom() {
        let bytes = [0xEF, 0xBB, 0xBF, b'a', b',', b'b'];
        assert_eq!(decode_text(&bytes), "a,b");
    }

    #[test]
    fn test_decode_invalid_bytes_is_lossy() {
        let bytes = [b'a', 0xFF, b'b'];
        let text = decode_text(&bytes);
        assert!(text.starts_with('a') && text.ends_with('b'));
    }
}
