use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;

use crate::codec::{self, Codec};
use crate::error::{Error, Result};

/// Identifier of one multibase variant.
///
/// The value is the Unicode scalar of the variant's tag, which is what
/// appears on the wire, so identifiers never change between releases.
/// Arbitrary values can be built with [`Encoding::from_code`]; every API
/// that accepts an `Encoding` checks it against the registry.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Encoding(u32);

impl Encoding {
    pub const IDENTITY: Encoding = Encoding(0x00);
    pub const BASE2: Encoding = Encoding::from_tag('0');
    pub const BASE16: Encoding = Encoding::from_tag('f');
    pub const BASE16_UPPER: Encoding = Encoding::from_tag('F');
    pub const BASE32_HEX: Encoding = Encoding::from_tag('v');
    pub const BASE32_HEX_UPPER: Encoding = Encoding::from_tag('V');
    pub const BASE32_HEX_PAD: Encoding = Encoding::from_tag('t');
    pub const BASE32_HEX_PAD_UPPER: Encoding = Encoding::from_tag('T');
    pub const BASE32: Encoding = Encoding::from_tag('b');
    pub const BASE32_UPPER: Encoding = Encoding::from_tag('B');
    pub const BASE32_PAD: Encoding = Encoding::from_tag('c');
    pub const BASE32_PAD_UPPER: Encoding = Encoding::from_tag('C');
    pub const BASE36: Encoding = Encoding::from_tag('k');
    pub const BASE36_UPPER: Encoding = Encoding::from_tag('K');
    pub const BASE58_FLICKR: Encoding = Encoding::from_tag('Z');
    pub const BASE58_BTC: Encoding = Encoding::from_tag('z');
    pub const BASE64: Encoding = Encoding::from_tag('m');
    pub const BASE64_PAD: Encoding = Encoding::from_tag('M');
    pub const BASE64_URL: Encoding = Encoding::from_tag('u');
    pub const BASE64_URL_PAD: Encoding = Encoding::from_tag('U');
    pub const BASE256_EMOJI: Encoding = Encoding::from_tag('🚀');

    /// Build an identifier from a raw code. The result may be unregistered.
    pub const fn from_code(code: u32) -> Self {
        Encoding(code)
    }

    pub const fn from_tag(tag: char) -> Self {
        Encoding(tag as u32)
    }

    pub const fn code(self) -> u32 {
        self.0
    }

    /// The wire tag, if this identifier is registered.
    pub fn tag(self) -> Option<char> {
        tag_for(self)
    }

    /// The canonical name, if this identifier is registered.
    pub fn name(self) -> Option<&'static str> {
        name_for(self)
    }

    pub fn is_supported(self) -> bool {
        REGISTRY.by_encoding.contains_key(&self)
    }
}

impl fmt::Debug for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "Encoding({name})"),
            None => write!(f, "Encoding({:#x})", self.0),
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "{:#x}", self.0),
        }
    }
}

impl FromStr for Encoding {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        resolve(s)
    }
}

/// One registered variant.
#[derive(Debug)]
pub struct Entry {
    pub encoding: Encoding,
    pub name: &'static str,
    pub codec: Codec,
}

impl Entry {
    const fn new(encoding: Encoding, name: &'static str, codec: Codec) -> Self {
        Entry {
            encoding,
            name,
            codec,
        }
    }

    pub fn tag(&self) -> char {
        // Every row is built with `Encoding::from_tag`/`IDENTITY`, so the code
        // is always a valid scalar.
        char::from_u32(self.encoding.0).unwrap_or(char::REPLACEMENT_CHARACTER)
    }
}

/// Every supported variant. Adding a base means adding a row here.
static TABLE: [Entry; 21] = [
    Entry::new(Encoding::IDENTITY, "identity", codec::IDENTITY),
    Entry::new(Encoding::BASE2, "base2", codec::BASE2),
    Entry::new(Encoding::BASE16, "base16", codec::BASE16),
    Entry::new(Encoding::BASE16_UPPER, "base16upper", codec::BASE16_UPPER),
    Entry::new(Encoding::BASE32_HEX, "base32hex", codec::BASE32_HEX),
    Entry::new(Encoding::BASE32_HEX_UPPER, "base32hexupper", codec::BASE32_HEX_UPPER),
    Entry::new(Encoding::BASE32_HEX_PAD, "base32hexpad", codec::BASE32_HEX_PAD),
    Entry::new(Encoding::BASE32_HEX_PAD_UPPER, "base32hexpadupper", codec::BASE32_HEX_PAD_UPPER),
    Entry::new(Encoding::BASE32, "base32", codec::BASE32),
    Entry::new(Encoding::BASE32_UPPER, "base32upper", codec::BASE32_UPPER),
    Entry::new(Encoding::BASE32_PAD, "base32pad", codec::BASE32_PAD),
    Entry::new(Encoding::BASE32_PAD_UPPER, "base32padupper", codec::BASE32_PAD_UPPER),
    Entry::new(Encoding::BASE36, "base36", codec::BASE36),
    Entry::new(Encoding::BASE36_UPPER, "base36upper", codec::BASE36_UPPER),
    Entry::new(Encoding::BASE58_FLICKR, "base58flickr", codec::BASE58_FLICKR),
    Entry::new(Encoding::BASE58_BTC, "base58btc", codec::BASE58_BTC),
    Entry::new(Encoding::BASE64, "base64", codec::BASE64),
    Entry::new(Encoding::BASE64_PAD, "base64pad", codec::BASE64_PAD),
    Entry::new(Encoding::BASE64_URL, "base64url", codec::BASE64_URL),
    Entry::new(Encoding::BASE64_URL_PAD, "base64urlpad", codec::BASE64_URL_PAD),
    Entry::new(Encoding::BASE256_EMOJI, "base256emoji", codec::BASE256_EMOJI),
];

struct Registry {
    by_encoding: HashMap<Encoding, &'static Entry>,
    by_name: HashMap<&'static str, Encoding>,
}

/// Indexes over `TABLE`, built on first use and never mutated afterwards.
static REGISTRY: Lazy<Registry> = Lazy::new(|| {
    let by_encoding: HashMap<_, _> = TABLE.iter().map(|e| (e.encoding, e)).collect();
    let by_name: HashMap<_, _> = TABLE.iter().map(|e| (e.name, e.encoding)).collect();
    tracing::debug!(encodings = by_encoding.len(), "multibase registry built");
    Registry {
        by_encoding,
        by_name,
    }
});

pub fn entry(encoding: Encoding) -> Option<&'static Entry> {
    REGISTRY.by_encoding.get(&encoding).copied()
}

pub fn codec_for(encoding: Encoding) -> Option<&'static Codec> {
    entry(encoding).map(|e| &e.codec)
}

pub fn tag_for(encoding: Encoding) -> Option<char> {
    entry(encoding).map(Entry::tag)
}

pub fn name_for(encoding: Encoding) -> Option<&'static str> {
    entry(encoding).map(|e| e.name)
}

pub fn encoding_for_tag(tag: char) -> Option<Encoding> {
    let encoding = Encoding::from_tag(tag);
    entry(encoding).map(|e| e.encoding)
}

pub fn encoding_for_name(name: &str) -> Option<Encoding> {
    REGISTRY.by_name.get(name).copied()
}

/// All registered identifiers, in table order.
pub fn encodings() -> impl Iterator<Item = Encoding> {
    TABLE.iter().map(|e| e.encoding)
}

/// Resolve a user-supplied string: a single code point is a tag, anything
/// longer is a name.
pub fn resolve(s: &str) -> Result<Encoding> {
    let mut chars = s.chars();
    let found = match (chars.next(), chars.next()) {
        (None, _) => return Err(Error::EmptyEncodingName),
        (Some(tag), None) => encoding_for_tag(tag),
        _ => encoding_for_name(s),
    };
    found.ok_or_else(|| Error::UnsupportedEncoding(s.to_string()))
}

/// Byte length of the UTF-8 sequence introduced by `first`, or `None` if
/// `first` cannot start a sequence.
pub(crate) const fn tag_width(first: u8) -> Option<usize> {
    match first {
        0x00..=0x7F => Some(1),
        0xC2..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF4 => Some(4),
        _ => None,
    }
}

/// Split a tagged buffer into its registered encoding and the body.
pub(crate) fn split_tag(input: &[u8]) -> Result<(Encoding, &[u8])> {
    let first = match input.first() {
        Some(&b) => b,
        None => return Err(Error::EmptyInput),
    };
    let width = match tag_width(first) {
        Some(w) if w <= input.len() => w,
        _ => return Err(Error::UnsupportedEncoding(format!("{first:#04x}"))),
    };
    let encoding = parse_tag(&input[..width])?;
    Ok((encoding, &input[width..]))
}

/// Interpret exactly one encoded code point as a registered tag.
pub(crate) fn parse_tag(bytes: &[u8]) -> Result<Encoding> {
    let tag = std::str::from_utf8(bytes)
        .ok()
        .and_then(|s| s.chars().next())
        .ok_or_else(|| Error::UnsupportedEncoding(format!("{bytes:02x?}")))?;
    encoding_for_tag(tag).ok_or_else(|| Error::UnsupportedEncoding(format!("{tag:?}")))
}
