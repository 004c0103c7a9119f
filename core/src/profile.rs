//! Reader classification and the fixed command set each profile needs.

/// Vendor commands understood by the ACR122U.
///
/// These go through the reader itself rather than the card, so they are
/// only ever issued against a reader classified as [`Profile::Acr122u`].
pub mod acr122u {
    pub const GET_FIRMWARE: &[u8] = &[0xFF, 0x00, 0x48, 0x00, 0x00];
    pub const GET_UID: &[u8] = &[0xFF, 0xCA, 0x00, 0x00, 0x00];
    pub const LOAD_AUTHENTICATION_KEYS: &[u8] = &[
        0xFF, 0x82, 0x00, 0x00, 0x06, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    ];
    pub const AUTHENTICATE: &[u8] = &[0xFF, 0x86, 0x00, 0x00, 0x05, 0x01, 0x00, 0x00, 0x60, 0x00];
}

/// One data block on the tag, as addressed by the block templates below.
pub const BLOCK_SIZE: usize = 16;

/// `READ BINARY` of the first data block. Profile-agnostic.
pub const READ_BINARY: &[u8] = &[0xFF, 0xB0, 0x00, 0x00, 0x10];

/// `UPDATE BINARY` header for the first data block; the 16 payload bytes
/// follow it in the send buffer. Profile-agnostic.
pub const UPDATE_BINARY: &[u8] = &[0xFF, 0xD6, 0x00, 0x00, 0x10];

/// How a reader is driven: generic readers get only the block templates,
/// the ACR122U additionally gets its vendor pre-steps.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Profile {
    Generic,
    Acr122u,
}

impl Profile {
    /// Classifies a reader by its advertised name.
    pub fn of(reader_name: &str) -> Self {
        if reader_name.contains("ACR122U") {
            Self::Acr122u
        } else {
            Self::Generic
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_by_substring() {
        assert_eq!(Profile::of("ACS ACR122U PICC Interface 0"), Profile::Acr122u);
        assert_eq!(Profile::of("SCM Microsystems SCR331"), Profile::Generic);
        assert_eq!(Profile::of(""), Profile::Generic);
    }

    #[test]
    fn classification_is_case_sensitive() {
        assert_eq!(Profile::of("acr122u"), Profile::Generic);
    }
}
