use std::io::{self, Write};

use crate::codec::{Block, Codec};
use crate::error::{Error, Result};
use crate::registry::{self, Encoding};

/// Upper bound on input bytes encoded per `write` call, rounded down to a
/// whole number of groups.
const STREAM_ENCODE_CHUNK: usize = 64 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Unwritten,
    Active,
    Closed,
}

/// Streaming multibase encoder over an `io::Write` sink.
///
/// The tag is written once, before the first body byte. Input is encoded in
/// whole groups as it arrives; a trailing partial group is held until
/// [`Writer::close`], which encodes it (with padding, for padded variants)
/// and flushes the sink. The bytes produced are identical to a single
/// [`encode`](crate::encode) of everything written.
///
/// Dropping a writer that was not closed closes it and ignores any error.
pub struct Writer<W: Write> {
    encoding: Encoding,
    codec: Codec,
    block: Block,
    out: Option<W>,
    carry: Vec<u8>,
    state: State,
}

impl<W: Write> Writer<W> {
    /// Fails with [`Error::UnsupportedEncoding`] for unregistered identifiers
    /// and [`Error::UnsupportedAsWriter`] for bases without a streaming
    /// encoder.
    pub fn new(encoding: Encoding, out: W) -> Result<Self> {
        let codec = *registry::codec_for(encoding)
            .ok_or_else(|| Error::UnsupportedEncoding(encoding.to_string()))?;
        let block = match codec.block() {
            Some(block) => block,
            None => return Err(Error::UnsupportedAsWriter(encoding)),
        };
        Ok(Writer {
            encoding,
            codec,
            block,
            out: Some(out),
            carry: Vec::with_capacity(block.bytes),
            state: State::Unwritten,
        })
    }

    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// The underlying sink. Carried input is not reflected in it until
    /// [`Writer::close`].
    pub fn get_ref(&self) -> &W {
        match self.out.as_ref() {
            Some(out) => out,
            None => unreachable!("sink is only taken by finish"),
        }
    }

    fn sink(&mut self) -> io::Result<&mut W> {
        match (self.state, self.out.as_mut()) {
            (State::Closed, _) | (_, None) => Err(io::Error::new(
                io::ErrorKind::BrokenPipe,
                "multibase writer is closed",
            )),
            (_, Some(out)) => Ok(out),
        }
    }

    fn write_tag(&mut self) -> io::Result<()> {
        if self.state != State::Unwritten {
            return Ok(());
        }
        let mut tag_buf = [0u8; 4];
        let tag = registry::tag_for(self.encoding)
            .unwrap_or(char::REPLACEMENT_CHARACTER)
            .encode_utf8(&mut tag_buf);
        self.sink()?.write_all(tag.as_bytes())?;
        self.state = State::Active;
        tracing::debug!(encoding = %self.encoding, "multibase writer emitted tag");
        Ok(())
    }

    fn write_groups(&mut self, groups: &[u8]) -> io::Result<()> {
        debug_assert_eq!(groups.len() % self.block.bytes, 0);
        let encoded = self.codec.encode(groups);
        self.sink()?.write_all(&encoded)
    }

    /// Encode any carried partial group, then flush the sink. Emits the tag
    /// if nothing was written yet. A second call is a no-op.
    pub fn close(&mut self) -> io::Result<()> {
        if self.state == State::Closed {
            return Ok(());
        }
        self.write_tag()?;
        // Cleared only once the encoded tail reached the sink.
        let tail = self.carry.len();
        let encoded = self.codec.encode(&self.carry);
        self.sink()?.write_all(&encoded)?;
        self.carry.clear();
        self.sink()?.flush()?;
        self.state = State::Closed;
        tracing::debug!(
            encoding = %self.encoding,
            tail,
            "multibase writer closed"
        );
        Ok(())
    }

    /// Close the writer and hand back the sink.
    pub fn finish(mut self) -> io::Result<W> {
        self.close()?;
        self.out
            .take()
            .ok_or_else(|| io::Error::other("multibase writer sink already taken"))
    }
}

impl<W: Write> Write for Writer<W> {
    /// Either completes the carried partial group, or encodes a bounded run
    /// of whole groups from `buf`, or carries a short tail. Returns how much
    /// of `buf` was taken. On error nothing from `buf` was taken.
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.sink()?;
        self.write_tag()?;

        let bytes = self.block.bytes;

        if !self.carry.is_empty() {
            let take = (bytes - self.carry.len()).min(buf.len());
            if self.carry.len() + take == bytes {
                let mut group = self.carry.clone();
                group.extend_from_slice(&buf[..take]);
                self.write_groups(&group)?;
                self.carry.clear();
            } else {
                self.carry.extend_from_slice(&buf[..take]);
            }
            return Ok(take);
        }

        let limit = (STREAM_ENCODE_CHUNK / bytes).max(1) * bytes;
        let whole = (buf.len() - buf.len() % bytes).min(limit);
        if whole > 0 {
            self.write_groups(&buf[..whole])?;
            tracing::trace!(encoding = %self.encoding, encoded = whole, "multibase writer chunk");
            return Ok(whole);
        }

        self.carry.extend_from_slice(buf);
        tracing::trace!(
            encoding = %self.encoding,
            carried = self.carry.len(),
            "multibase writer holding partial group"
        );
        Ok(buf.len())
    }

    /// Flushes the sink. A carried partial group is not emitted, since
    /// encoding it early would place padding in the middle of the body.
    fn flush(&mut self) -> io::Result<()> {
        self.sink()?.flush()
    }
}

impl<W: Write> Drop for Writer<W> {
    fn drop(&mut self) {
        if self.state != State::Closed && self.out.is_some() {
            if let Err(err) = self.close() {
                tracing::warn!(encoding = %self.encoding, error = %err, "multibase writer failed to close on drop");
            }
        }
    }
}

impl<W: Write> std::fmt::Debug for Writer<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Writer")
            .field("encoding", &self.encoding)
            .field("state", &self.state)
            .field("carried", &self.carry.len())
            .finish()
    }
}
