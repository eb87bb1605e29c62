// Allow lints that fight the table-driven codec code
#![allow(
    clippy::needless_range_loop,
    clippy::identity_op,
    clippy::manual_div_ceil,
    clippy::manual_range_contains
)]

//! Self-describing binary-to-text encoding.
//!
//! A multibase string is `TAG || BODY`: one code point naming the base,
//! followed by the data encoded in that base. [`encode`] prepends the tag,
//! [`decode`] reads it back and picks the matching codec, so callers never
//! have to agree on a base out of band.
//!
//! ```
//! use multibase_rs::{Encoding, decode, encode};
//!
//! let tagged = encode(Encoding::BASE64_URL, b"yes mani !").unwrap();
//! assert_eq!(tagged, b"ueWVzIG1hbmkgIQ");
//! assert_eq!(decode(&tagged).unwrap(), (Encoding::BASE64_URL, b"yes mani !".to_vec()));
//! ```
//!
//! Bases with a fixed group size (identity, lowercase base16, the base32 and
//! base64 families) can also be streamed through [`Writer`] and [`Reader`].

pub mod codec;
pub mod dispatch;
mod error;
pub mod registry;
pub mod stream;

pub use dispatch::{Decoder, Encoder, decode, encode, encode_to_string};
pub use error::{Error, Result};
pub use registry::{Encoding, encodings};
pub use stream::{Reader, Writer};
