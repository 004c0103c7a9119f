//! Simplified NDEF Text Record extraction.
//!
//! Only the status byte and the language code it measures are interpreted;
//! the record-type and length framing that precedes them on a conformant
//! tag is ignored. Downstream consumers depend on this exact offset rule,
//! so it is kept as-is rather than replaced with a full NDEF parser.

const LANG_LEN_MASK: u8 = 0x3F;

/// Extracts the text portion of a simplified NDEF Text Record.
///
/// `bytes[0]` is the status byte whose low six bits give the language code
/// length; the text starts right after the language code. Inputs too short
/// to hold any text yield an empty string, which callers treat as "no
/// usable text" rather than an error.
pub fn extract_text(bytes: &[u8]) -> String {
    if bytes.len() < 5 {
        return String::new();
    }

    let lang_len = (bytes[0] & LANG_LEN_MASK) as usize;
    if bytes.len() < lang_len + 1 {
        return String::new();
    }

    String::from_utf8_lossy(&bytes[1 + lang_len..]).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_input_yields_empty_string() {
        assert_eq!(extract_text(&[0x02, b'e', b'n', b'h']), "");
        assert_eq!(extract_text(&[]), "");
    }

    #[test]
    fn skips_language_code() {
        assert_eq!(extract_text(&[0x02, b'e', b'n', b'h', b'i']), "hi");
    }

    #[test]
    fn oversized_language_length_yields_empty_string() {
        assert_eq!(extract_text(&[0x3F, 0x00, 0x00, 0x00, 0x00]), "");
    }

    #[test]
    fn ignores_encoding_flag_in_status_byte() {
        // Bit 7 marks UTF-16 on real tags; only the low six bits count here.
        assert_eq!(extract_text(&[0x82, b'e', b'n', b'o', b'k']), "ok");
    }
}
