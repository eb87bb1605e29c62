use std::io::{self, Read};

use crate::codec::{Block, Codec, DecodeError};
use crate::error::{Error, Result};
use crate::registry::{self, Encoding};

/// Encoded bytes requested from the source per refill.
const READ_CHUNK: usize = 16 * 1024;

enum State {
    /// Tag not consumed yet.
    Unread,
    Active {
        encoding: Encoding,
        codec: Codec,
        block: Block,
    },
    /// Body fully decoded, or a previous read failed.
    Done,
}

/// Streaming multibase decoder over an `io::Read` source.
///
/// The tag is read and validated on the first `read`. Body bytes are decoded
/// in whole groups as they arrive and the final partial group at end of
/// input. Errors are reported as `io::Error`s wrapping a crate [`Error`]:
/// an unknown tag gives [`Error::UnsupportedEncoding`], a base without a
/// streaming decoder gives [`Error::UnsupportedAsReader`], malformed body
/// bytes give [`Error::InvalidEncoding`] on the read that reaches them.
pub struct Reader<R: Read> {
    inner: R,
    expected: Option<Encoding>,
    /// Encoding named by the tag, once read.
    tag: Option<Encoding>,
    state: State,
    /// Encoded body bytes not decoded yet.
    pending: Vec<u8>,
    /// Body offset of `pending[0]`, for error reporting.
    consumed: usize,
    decoded: Vec<u8>,
    pos: usize,
    /// A group ending in '=' was decoded; nothing may follow it.
    padded: bool,
}

/// Read into `buf`, retrying on `Interrupted`.
fn read_retrying(reader: &mut impl Read, buf: &mut [u8]) -> io::Result<usize> {
    loop {
        match reader.read(buf) {
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            other => return other,
        }
    }
}

impl<R: Read> Reader<R> {
    /// A reader that accepts any registered, streamable tag.
    pub fn new(inner: R) -> Self {
        Reader {
            inner,
            expected: None,
            tag: None,
            state: State::Unread,
            pending: Vec::new(),
            consumed: 0,
            decoded: Vec::new(),
            pos: 0,
            padded: false,
        }
    }

    /// A reader that only accepts `encoding`'s tag. Streaming support is
    /// checked here rather than on the first read.
    pub fn expecting(encoding: Encoding, inner: R) -> Result<Self> {
        let codec = registry::codec_for(encoding)
            .ok_or_else(|| Error::UnsupportedEncoding(encoding.to_string()))?;
        if !codec.supports_streaming_decode() {
            return Err(Error::UnsupportedAsReader(encoding));
        }
        let mut reader = Reader::new(inner);
        reader.expected = Some(encoding);
        Ok(reader)
    }

    /// The encoding named by the tag, once it has been read.
    pub fn encoding(&self) -> Option<Encoding> {
        self.tag
    }

    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    pub fn into_inner(self) -> R {
        self.inner
    }

    fn read_tag(&mut self) -> io::Result<(Encoding, Codec, Block)> {
        let mut tag = [0u8; 4];
        if read_retrying(&mut self.inner, &mut tag[..1])? == 0 {
            return Err(Error::EmptyInput.into());
        }
        let width = registry::tag_width(tag[0])
            .ok_or_else(|| Error::UnsupportedEncoding(format!("{:#04x}", tag[0])))?;
        if width > 1 {
            self.inner.read_exact(&mut tag[1..width]).map_err(|e| {
                if e.kind() == io::ErrorKind::UnexpectedEof {
                    io::Error::from(Error::UnsupportedEncoding(format!(
                        "truncated tag {:#04x}",
                        tag[0]
                    )))
                } else {
                    e
                }
            })?;
        }
        let encoding = registry::parse_tag(&tag[..width])?;

        if let Some(expected) = self.expected {
            if expected != encoding {
                return Err(Error::EncodingMismatch {
                    expected,
                    found: encoding,
                }
                .into());
            }
        }

        let codec = *registry::codec_for(encoding)
            .ok_or_else(|| Error::UnsupportedEncoding(encoding.to_string()))?;
        match codec.block() {
            Some(block) => {
                tracing::debug!(%encoding, "multibase reader consumed tag");
                Ok((encoding, codec, block))
            }
            None => Err(Error::UnsupportedAsReader(encoding).into()),
        }
    }

    /// Decode `pending[..len]` into `decoded`.
    fn decode_pending(
        &mut self,
        encoding: Encoding,
        codec: &Codec,
        block: Block,
        len: usize,
    ) -> Result<()> {
        if len == 0 {
            return Ok(());
        }
        if self.padded {
            return Err(Error::InvalidEncoding {
                encoding,
                source: DecodeError::InvalidPadding,
            });
        }
        let consumed = self.consumed;
        self.decoded = codec
            .decode(&self.pending[..len])
            .map_err(|e| Error::InvalidEncoding {
                encoding,
                source: e.offset_by(consumed),
            })?;
        self.pos = 0;
        // Only expanding codecs pad; identity bodies may contain '=' freely.
        self.padded = block.chars > block.bytes && self.pending[len - 1] == b'=';
        self.pending.drain(..len);
        self.consumed += len;
        Ok(())
    }

    /// Pull one chunk from the source and decode every complete group.
    /// At end of input the remaining partial group is decoded too.
    fn refill(&mut self, encoding: Encoding, codec: Codec, block: Block) -> io::Result<()> {
        let start = self.pending.len();
        self.pending.resize(start + READ_CHUNK, 0);
        let n = match read_retrying(&mut self.inner, &mut self.pending[start..]) {
            Ok(n) => n,
            Err(e) => {
                self.pending.truncate(start);
                return Err(e);
            }
        };
        self.pending.truncate(start + n);

        if n == 0 {
            let len = self.pending.len();
            self.decode_pending(encoding, &codec, block, len)?;
            self.state = State::Done;
            tracing::debug!(%encoding, body = self.consumed, "multibase reader reached end of input");
            return Ok(());
        }

        let usable = self.pending.len() - self.pending.len() % block.chars;
        tracing::trace!(%encoding, read = n, usable, "multibase reader chunk");
        self.decode_pending(encoding, &codec, block, usable)?;
        Ok(())
    }

    fn fill(&mut self) -> io::Result<()> {
        let (encoding, codec, block) = match self.state {
            State::Done => return Ok(()),
            State::Unread => {
                let (encoding, codec, block) = self.read_tag()?;
                self.tag = Some(encoding);
                self.state = State::Active {
                    encoding,
                    codec,
                    block,
                };
                (encoding, codec, block)
            }
            State::Active {
                encoding,
                codec,
                block,
            } => (encoding, codec, block),
        };
        self.refill(encoding, codec, block)
    }
}

impl<R: Read> Read for Reader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }
        loop {
            if self.pos < self.decoded.len() {
                let n = buf.len().min(self.decoded.len() - self.pos);
                buf[..n].copy_from_slice(&self.decoded[self.pos..self.pos + n]);
                self.pos += n;
                return Ok(n);
            }
            if matches!(self.state, State::Done) {
                return Ok(0);
            }
            if let Err(err) = self.fill() {
                self.state = State::Done;
                self.decoded.clear();
                self.pos = 0;
                return Err(err);
            }
        }
    }
}

impl<R: Read> std::fmt::Debug for Reader<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Reader")
            .field("encoding", &self.encoding())
            .field("pending", &self.pending.len())
            .field("buffered", &(self.decoded.len() - self.pos))
            .finish()
    }
}
