//! A crate to enumerate PC/SC readers and exchange APDUs with NFC tags.
//!
//! The ACR122U reader gets first-class treatment: it is promoted to the
//! front of the reader list and its vendor commands (firmware revision,
//! UID retrieval, key load and authentication) are issued automatically
//! where they help. Any other reader that speaks bytewise APDU works
//! through the same operations, minus the vendor pre-steps.
//!
//! Every operation is synchronous and self-contained: it establishes a
//! context, connects to the named reader, exchanges commands, and gives
//! both handles back before returning. Serialization against a single
//! physical reader is left to the PC/SC service itself.

pub mod codec;
pub mod directory;
pub mod ndef;
pub mod pcsc;
pub mod profile;
pub mod tag;
pub mod transport;

mod error;

pub use directory::list_readers;
pub use error::{Error, Result};
pub use profile::Profile;
pub use tag::{ReaderInfo, TagClient, TagContent};

pub use self::pcsc::Pcsc;
