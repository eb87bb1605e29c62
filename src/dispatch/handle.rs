use std::io::{Read, Write};
use std::str::FromStr;

use super::core::{decode_body, encode};
use crate::error::{Error, Result};
use crate::registry::{self, Encoding};
use crate::stream::{Reader, Writer};

fn validate(encoding: Encoding) -> Result<Encoding> {
    if encoding.is_supported() {
        Ok(encoding)
    } else {
        Err(Error::UnsupportedEncoding(encoding.to_string()))
    }
}

fn name_of(encoding: Encoding) -> &'static str {
    match registry::name_for(encoding) {
        Some(name) => name,
        None => unreachable!("validated encoding {encoding:?} missing from the registry"),
    }
}

/// An encoding that is known to be registered, with an `encode` that cannot
/// fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Encoder {
    encoding: Encoding,
}

impl Encoder {
    pub fn new(encoding: Encoding) -> Result<Self> {
        validate(encoding).map(|encoding| Encoder { encoding })
    }

    /// Like [`Encoder::new`] but panics on an unregistered identifier.
    /// Meant for identifiers fixed at compile time.
    pub fn must_new(encoding: Encoding) -> Self {
        match Self::new(encoding) {
            Ok(encoder) => encoder,
            Err(err) => panic!("{err}"),
        }
    }

    /// Accepts either a name (`"base64url"`) or a single-character tag (`"u"`).
    pub fn by_name(name: &str) -> Result<Self> {
        registry::resolve(name).map(|encoding| Encoder { encoding })
    }

    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    pub fn name(&self) -> &'static str {
        name_of(self.encoding)
    }

    pub fn encode(&self, data: &[u8]) -> Vec<u8> {
        match encode(self.encoding, data) {
            Ok(out) => out,
            // Construction already checked the registry; reaching this means
            // the registry and the dispatcher disagree.
            Err(err) => panic!("validated encoder failed: {err}"),
        }
    }

    /// Wrap `out` in a streaming writer. Fails with
    /// [`Error::UnsupportedAsWriter`] when this base cannot stream.
    pub fn writer<W: Write>(&self, out: W) -> Result<Writer<W>> {
        Writer::new(self.encoding, out)
    }
}

impl TryFrom<Encoding> for Encoder {
    type Error = Error;

    fn try_from(encoding: Encoding) -> Result<Self> {
        Encoder::new(encoding)
    }
}

impl FromStr for Encoder {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Encoder::by_name(s)
    }
}

/// A decoder pinned to one registered encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Decoder {
    encoding: Encoding,
}

impl Decoder {
    pub fn new(encoding: Encoding) -> Result<Self> {
        validate(encoding).map(|encoding| Decoder { encoding })
    }

    pub fn must_new(encoding: Encoding) -> Self {
        match Self::new(encoding) {
            Ok(decoder) => decoder,
            Err(err) => panic!("{err}"),
        }
    }

    pub fn by_name(name: &str) -> Result<Self> {
        registry::resolve(name).map(|encoding| Decoder { encoding })
    }

    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    pub fn name(&self) -> &'static str {
        name_of(self.encoding)
    }

    /// Decode tagged input, rejecting input tagged with any other encoding.
    pub fn decode(&self, input: impl AsRef<[u8]>) -> Result<Vec<u8>> {
        let (found, body) = registry::split_tag(input.as_ref())?;
        if found != self.encoding {
            return Err(Error::EncodingMismatch {
                expected: self.encoding,
                found,
            });
        }
        decode_body(found, body)
    }

    /// Wrap `source` in a streaming reader that only accepts this encoding's
    /// tag. Fails with [`Error::UnsupportedAsReader`] when this base cannot
    /// stream.
    pub fn reader<R: Read>(&self, source: R) -> Result<Reader<R>> {
        Reader::expecting(self.encoding, source)
    }
}

impl TryFrom<Encoding> for Decoder {
    type Error = Error;

    fn try_from(encoding: Encoding) -> Result<Self> {
        Decoder::new(encoding)
    }
}

impl FromStr for Decoder {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Decoder::by_name(s)
    }
}
