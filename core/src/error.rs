#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The PC/SC context could not be established.
    #[error("failed to establish PC/SC context: {reason} ({code})")]
    Context {
        code: pcsc::Error,
        reason: &'static str,
    },

    /// The named reader is unavailable, busy, or holds no readable card.
    #[error("failed to connect to reader: {0}")]
    Connect(pcsc::Error),

    /// The command exchange failed at the PC/SC level.
    #[error("failed to transmit command: {0}")]
    Transmit(pcsc::Error),

    /// The write-block exchange failed at the PC/SC level.
    #[error("failed to write data: {0}")]
    Write(pcsc::Error),

    /// Caller-supplied hex input could not be turned into a payload.
    #[error("invalid payload encoding: {0}")]
    InvalidEncoding(String),

    /// Reader enumeration failed because the subsystem is unreachable.
    #[error("smart card service unavailable: {0}")]
    NoService(pcsc::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn context(code: pcsc::Error) -> Self {
        Self::Context {
            code,
            reason: classify(code),
        }
    }
}

impl From<hex::FromHexError> for Error {
    fn from(err: hex::FromHexError) -> Self {
        Self::InvalidEncoding(err.to_string())
    }
}

/// Human-readable classification of the context establishment statuses the
/// service is known to return.
fn classify(code: pcsc::Error) -> &'static str {
    match code {
        pcsc::Error::NoService => "smart card service is not running",
        pcsc::Error::NoReadersAvailable => "no readers available",
        pcsc::Error::InvalidParameter => "invalid parameter",
        pcsc::Error::InvalidTarget => "invalid target",
        pcsc::Error::NoMemory => "not enough memory",
        _ => "unknown error",
    }
}
