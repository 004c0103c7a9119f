//! PC/SC backend for the transport traits.
//!
//! ## What is PC/SC?
//! PC/SC (Personal Computer/Smart Card) is an abstraction layer for
//! communicating with smart cards and NFC tags without depending on a
//! particular reader driver. Windows and macOS ship it natively; Linux
//! supports it through the pcsc-lite shared library. pcsc-rust is the
//! backend of this implementation:
//! <https://github.com/bluetech/pcsc-rust>
//!
//! ## Usage
//! ```rust,no_run
//! use nfc_tag::{Pcsc, TagClient};
//!
//! let client = TagClient::new(Pcsc);
//! let readers = nfc_tag::list_readers(&Pcsc).unwrap();
//! let content = client.read_tag(&readers[0]).unwrap();
//! ```

use std::ffi::CString;

use pcsc::{Protocols, Scope, ShareMode, MAX_BUFFER_SIZE};

#[cfg(feature = "tracing")]
use tracing::debug;

use crate::transport::{Card, Session, Subsystem};
use crate::{Error, Result};

#[cfg(not(feature = "tracing"))]
macro_rules! debug {
    ($($t: tt)*) => {};
}

/// The real PC/SC subsystem.
#[derive(Clone, Copy, Debug, Default)]
pub struct Pcsc;

impl Subsystem for Pcsc {
    type Session = PcscSession;

    fn establish(&self) -> Result<PcscSession> {
        Ok(PcscSession {
            ctx: pcsc::Context::establish(Scope::System).map_err(Error::context)?,
        })
    }
}

/// An established PC/SC context. Released when dropped.
pub struct PcscSession {
    ctx: pcsc::Context,
}

impl Session for PcscSession {
    type Card = PcscCard;

    fn reader_names(&self) -> Result<Vec<String>> {
        let mut buf = [0u8; 2048];

        Ok(self
            .ctx
            .list_readers(&mut buf)
            .map_err(Error::NoService)?
            .map(|name| name.to_string_lossy().into_owned())
            .collect())
    }

    fn connect(&self, reader: &str) -> Result<PcscCard> {
        debug!("Using reader: {reader}");

        let name =
            CString::new(reader).map_err(|_| Error::Connect(pcsc::Error::InvalidParameter))?;

        Ok(PcscCard {
            card: self
                .ctx
                .connect(&name, ShareMode::Shared, Protocols::T0 | Protocols::T1)
                .map_err(Error::Connect)?,
        })
    }
}

/// A card handle negotiated over T=0 or T=1, whichever the reader picked.
/// Disconnected when dropped.
pub struct PcscCard {
    card: pcsc::Card,
}

impl Card for PcscCard {
    fn transmit(&self, command: &[u8]) -> Result<Vec<u8>> {
        debug!("TX: {}", hex::encode(command));

        let mut rx = [0u8; MAX_BUFFER_SIZE];
        let rx = self
            .card
            .transmit(command, &mut rx)
            .map_err(Error::Transmit)?;

        debug!("RX: {}", hex::encode(rx));

        Ok(Vec::from(rx))
    }
}
