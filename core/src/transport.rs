//! The seam between tag operations and the PC/SC subsystem.
//!
//! Each trait owns one stage of the card lifecycle:
//! [`Subsystem::establish`] yields a session, [`Session::connect`] yields a
//! card handle, and [`Card::transmit`] exchanges one APDU. Releasing the
//! context and disconnecting the card are tied to `Drop`, so every exit
//! path gives handles back in acquisition-reverse order: a card handle must
//! not outlive the session that produced it.

use crate::Result;

/// Entry point to a card subsystem.
pub trait Subsystem {
    type Session: Session;

    /// Establishes one subsystem session.
    ///
    /// The returned handle releases its context exactly once, when dropped.
    fn establish(&self) -> Result<Self::Session>;
}

/// One established context.
pub trait Session {
    type Card: Card;

    /// Names of every reader currently visible, in subsystem order.
    fn reader_names(&self) -> Result<Vec<String>>;

    /// Connects to the card in the named reader with shared access.
    ///
    /// The returned handle disconnects exactly once, when dropped. On
    /// failure the session itself stays valid.
    fn connect(&self, reader: &str) -> Result<Self::Card>;
}

/// A connected card (or, for vendor commands, the reader behind it).
pub trait Card {
    /// Transmits one APDU and returns whatever came back.
    ///
    /// The response is opaque payload: embedded status words are not
    /// interpreted at this layer, only the transmission's own status.
    fn transmit(&self, command: &[u8]) -> Result<Vec<u8>>;
}
