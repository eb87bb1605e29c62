use thiserror::Error;

/// Reasons a codec rejects an encoded body.
///
/// Offsets are byte offsets into the body handed to the codec (the tag is
/// not counted).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("invalid byte {byte:#04x} at offset {offset}")]
    InvalidByte { offset: usize, byte: u8 },

    #[error("invalid length {0}")]
    InvalidLength(usize),

    #[error("invalid padding")]
    InvalidPadding,

    #[error("invalid symbol at offset {offset}")]
    InvalidSymbol { offset: usize },

    #[error("invalid base64 input")]
    InvalidBase64,
}

impl DecodeError {
    /// Move an offset-carrying error forward by `base` bytes. Used when a
    /// body is decoded piecewise and the piece does not start at offset 0.
    pub fn offset_by(self, base: usize) -> Self {
        match self {
            DecodeError::InvalidByte { offset, byte } => DecodeError::InvalidByte {
                offset: offset + base,
                byte,
            },
            DecodeError::InvalidSymbol { offset } => DecodeError::InvalidSymbol {
                offset: offset + base,
            },
            other => other,
        }
    }
}

/// Group geometry of a codec that can run incrementally: every `bytes` input
/// bytes encode to exactly `chars` output characters with no padding, so a
/// stream can be cut on group boundaries and each piece encoded (or decoded)
/// independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block {
    pub bytes: usize,
    pub chars: usize,
}

impl Block {
    pub const fn new(bytes: usize, chars: usize) -> Self {
        Block { bytes, chars }
    }
}

type EncodeFn = fn(&[u8]) -> Vec<u8>;
type DecodeFn = fn(&[u8]) -> Result<Vec<u8>, DecodeError>;

/// One row of the dispatch table: whole-buffer encode/decode plus the
/// optional block geometry that enables streaming.
#[derive(Clone, Copy)]
pub struct Codec {
    encode: EncodeFn,
    decode: DecodeFn,
    block: Option<Block>,
}

impl Codec {
    /// A codec that only works on whole buffers.
    pub const fn whole(encode: EncodeFn, decode: DecodeFn) -> Self {
        Codec {
            encode,
            decode,
            block: None,
        }
    }

    /// A codec that can also be driven group by group.
    pub const fn streaming(encode: EncodeFn, decode: DecodeFn, block: Block) -> Self {
        Codec {
            encode,
            decode,
            block: Some(block),
        }
    }

    #[inline]
    pub fn encode(&self, data: &[u8]) -> Vec<u8> {
        (self.encode)(data)
    }

    #[inline]
    pub fn decode(&self, body: &[u8]) -> Result<Vec<u8>, DecodeError> {
        (self.decode)(body)
    }

    #[inline]
    pub fn block(&self) -> Option<Block> {
        self.block
    }

    pub fn supports_streaming_encode(&self) -> bool {
        self.block.is_some()
    }

    pub fn supports_streaming_decode(&self) -> bool {
        self.block.is_some()
    }
}

impl std::fmt::Debug for Codec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Codec").field("block", &self.block).finish()
    }
}

/// Identity: the body is the input.
pub fn identity_encode(data: &[u8]) -> Vec<u8> {
    data.to_vec()
}

pub fn identity_decode(body: &[u8]) -> Result<Vec<u8>, DecodeError> {
    Ok(body.to_vec())
}

/// Build a 256-entry reverse lookup table for an ASCII alphabet.
/// Bytes outside the alphabet map to 0xFF.
pub(crate) const fn build_decode_table(alphabet: &[u8]) -> [u8; 256] {
    let mut table = [0xFFu8; 256];
    let mut i = 0;
    while i < alphabet.len() {
        table[alphabet[i] as usize] = i as u8;
        i += 1;
    }
    table
}
