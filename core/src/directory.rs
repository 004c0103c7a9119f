//! Reader enumeration with the ACR122U-first ordering callers rely on.

use crate::transport::{Session, Subsystem};
use crate::{Error, Profile, Result};

/// Lists every visible reader, promoting the first ACR122U to the front.
///
/// Zero attached readers is an empty list, not an error. A context that
/// cannot be established surfaces as [`Error::NoService`].
pub fn list_readers<S: Subsystem>(subsystem: &S) -> Result<Vec<String>> {
    let session = subsystem.establish().map_err(|err| match err {
        Error::Context { code, .. } => Error::NoService(code),
        other => other,
    })?;

    Ok(prioritize(session.reader_names()?))
}

/// Single-pass partial reorder: the first name classified as ACR122U moves
/// to index 0 and every other name keeps its relative position. Later
/// ACR122U matches stay where enumeration put them; nothing is dropped or
/// duplicated.
fn prioritize(names: Vec<String>) -> Vec<String> {
    let mut ordered = Vec::with_capacity(names.len());
    let mut promoted = false;

    for name in names {
        if !promoted && Profile::of(&name) == Profile::Acr122u {
            ordered.insert(0, name);
            promoted = true;
        } else {
            ordered.push(name);
        }
    }

    ordered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::Card;

    fn names(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn promotes_first_acr122u_only() {
        assert_eq!(
            prioritize(names(&["ReaderA", "ACR122U-1", "ReaderB", "ACR122U-2"])),
            names(&["ACR122U-1", "ReaderA", "ReaderB", "ACR122U-2"]),
        );
    }

    #[test]
    fn keeps_order_without_a_match() {
        assert_eq!(
            prioritize(names(&["ReaderA", "ReaderB"])),
            names(&["ReaderA", "ReaderB"]),
        );
    }

    #[test]
    fn handles_empty_enumeration() {
        assert_eq!(prioritize(Vec::new()), Vec::<String>::new());
    }

    #[test]
    fn leading_match_stays_put() {
        assert_eq!(
            prioritize(names(&["ACR122U-1", "ReaderA"])),
            names(&["ACR122U-1", "ReaderA"]),
        );
    }

    struct Unreachable;

    impl Subsystem for Unreachable {
        type Session = NoSession;

        fn establish(&self) -> Result<NoSession> {
            Err(Error::context(pcsc::Error::NoService))
        }
    }

    struct NoSession;

    impl Session for NoSession {
        type Card = NoCard;

        fn reader_names(&self) -> Result<Vec<String>> {
            unreachable!()
        }

        fn connect(&self, _reader: &str) -> Result<NoCard> {
            unreachable!()
        }
    }

    struct NoCard;

    impl Card for NoCard {
        fn transmit(&self, _command: &[u8]) -> Result<Vec<u8>> {
            unreachable!()
        }
    }

    #[test]
    fn unreachable_subsystem_is_no_service() {
        assert!(matches!(
            list_readers(&Unreachable),
            Err(Error::NoService(pcsc::Error::NoService)),
        ));
    }
}
