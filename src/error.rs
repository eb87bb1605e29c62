use std::io;

use thiserror::Error;

use crate::codec::DecodeError;
use crate::registry::Encoding;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("empty multibase encoding name")]
    EmptyEncodingName,

    #[error("unsupported multibase encoding: {0}")]
    UnsupportedEncoding(String),

    #[error("cannot decode empty multibase input")]
    EmptyInput,

    #[error("invalid {encoding} data: {source}")]
    InvalidEncoding {
        encoding: Encoding,
        source: DecodeError,
    },

    #[error("{0} is not supported as a stream writer")]
    UnsupportedAsWriter(Encoding),

    #[error("{0} is not supported as a stream reader")]
    UnsupportedAsReader(Encoding),

    #[error("expected {expected} data, found {found}")]
    EncodingMismatch { expected: Encoding, found: Encoding },

    #[error("{0} output is not valid UTF-8")]
    NotText(Encoding),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Lets the streaming adapters report crate errors through `io::Result`.
/// The wrapped error is recoverable with `io::Error::get_ref` + downcast.
impl From<Error> for io::Error {
    fn from(err: Error) -> io::Error {
        let kind = match err {
            Error::UnsupportedAsWriter(_) | Error::UnsupportedAsReader(_) => {
                io::ErrorKind::Unsupported
            }
            _ => io::ErrorKind::InvalidData,
        };
        io::Error::new(kind, err)
    }
}
