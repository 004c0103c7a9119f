//! The four public tag operations: reader info, read, write, raw APDU.
//!
//! Each operation is one synchronous unit of work against a single reader:
//! establish a context, connect, exchange commands, and let the handles
//! drop in reverse order of acquisition. Nothing is retried internally;
//! the first hard failure is surfaced after cleanup. The ACR122U vendor
//! pre-steps are the deliberate exception: their results are discarded so
//! that partially responsive readers and foreign tags still work.

use crate::profile::{self, acr122u, Profile};
use crate::transport::{Card, Session, Subsystem};
use crate::{codec, ndef, Error, Result};

/// Responses shorter than this carry no usable payload and are skipped.
const MIN_RESPONSE_LEN: usize = 2;

/// What a reader can say about itself.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ReaderInfo {
    /// Firmware revision, hex-encoded. ACR122U only.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub firmware: Option<String>,
}

/// One tag read. `uid` and `data` are hex-encoded.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TagContent {
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub uid: Option<String>,

    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub data: Option<String>,

    /// Text extracted from `data` via the simplified NDEF rule. Present
    /// whenever `data` is, possibly empty.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub text: Option<String>,
}

/// High-level client over any [`Subsystem`].
pub struct TagClient<S> {
    subsystem: S,
}

impl<S: Subsystem> TagClient<S> {
    pub fn new(subsystem: S) -> Self {
        Self { subsystem }
    }

    /// Queries a reader for its identity.
    ///
    /// Only the ACR122U has a firmware query; generic readers yield an
    /// empty result. The probe itself is best effort: a reader that
    /// rejects the vendor command still reports successfully.
    pub fn reader_info(&self, reader: &str) -> Result<ReaderInfo> {
        let session = self.subsystem.establish()?;
        let card = session.connect(reader)?;

        let mut info = ReaderInfo::default();

        if Profile::of(reader) == Profile::Acr122u {
            if let Ok(response) = card.transmit(acr122u::GET_FIRMWARE) {
                if response.len() >= MIN_RESPONSE_LEN {
                    info.firmware = Some(codec::encode(&response));
                }
            }
        }

        Ok(info)
    }

    /// Reads the first data block of the tag on the named reader.
    ///
    /// For the ACR122U the UID is probed first, best effort: a failure
    /// there must not abort the read. The block read itself is mandatory;
    /// a transmission failure fails the whole operation.
    pub fn read_tag(&self, reader: &str) -> Result<TagContent> {
        let session = self.subsystem.establish()?;
        let card = session.connect(reader)?;

        let mut content = TagContent::default();

        if Profile::of(reader) == Profile::Acr122u {
            if let Ok(response) = card.transmit(acr122u::GET_UID) {
                if response.len() >= MIN_RESPONSE_LEN {
                    content.uid = Some(codec::encode(&response));
                }
            }
        }

        let response = card.transmit(profile::READ_BINARY)?;
        if response.len() >= MIN_RESPONSE_LEN {
            content.text = Some(ndef::extract_text(&response));
            content.data = Some(codec::encode(&response));
        }

        Ok(content)
    }

    /// Writes a payload into the tag's first data block.
    ///
    /// The payload is decoded from hex and zero-padded to the 16-byte
    /// block; anything longer is rejected before a context is opened. For
    /// the ACR122U, key load and authentication run first, best effort:
    /// tags that need neither still accept the write, so those results are
    /// discarded. Returns `true` on success.
    pub fn write_tag(&self, reader: &str, data: &str) -> Result<bool> {
        let payload = codec::decode(data)?;
        if payload.len() > profile::BLOCK_SIZE {
            return Err(Error::InvalidEncoding(format!(
                "payload is {} bytes, more than one {}-byte block",
                payload.len(),
                profile::BLOCK_SIZE,
            )));
        }

        let session = self.subsystem.establish()?;
        let card = session.connect(reader)?;

        if Profile::of(reader) == Profile::Acr122u {
            if card.transmit(acr122u::LOAD_AUTHENTICATION_KEYS).is_ok() {
                let _ = card.transmit(acr122u::AUTHENTICATE);
            }
        }

        let mut command = Vec::with_capacity(profile::UPDATE_BINARY.len() + profile::BLOCK_SIZE);
        command.extend_from_slice(profile::UPDATE_BINARY);
        command.extend_from_slice(&payload);
        command.resize(profile::UPDATE_BINARY.len() + profile::BLOCK_SIZE, 0x00);

        card.transmit(&command).map_err(|err| match err {
            Error::Transmit(code) => Error::Write(code),
            other => other,
        })?;

        Ok(true)
    }

    /// Transmits a caller-supplied APDU verbatim and returns the response
    /// as hex, status word included.
    pub fn send_apdu(&self, reader: &str, apdu: &str) -> Result<String> {
        let command = codec::decode(apdu)?;

        let session = self.subsystem.establish()?;
        let card = session.connect(reader)?;

        let response = card.transmit(&command)?;

        Ok(codec::encode(&response))
    }
}
