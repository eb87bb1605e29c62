//! The codec set: one [`Codec`] row per base variant.
//!
//! Rows with a [`Block`] geometry can be driven incrementally by the
//! streaming writer and reader; the rest only work on whole buffers.

pub mod base16;
pub mod base2;
pub mod base32;
pub mod base64;
pub mod basex;
pub mod core;
pub mod emoji;


pub use self::core::*;

pub const IDENTITY: Codec = Codec::streaming(identity_encode, identity_decode, Block::new(1, 1));

pub const BASE2: Codec = Codec::whole(base2::encode, base2::decode);

pub const BASE16: Codec =
    Codec::streaming(base16::encode_lower, base16::decode_lower, Block::new(1, 2));
pub const BASE16_UPPER: Codec = Codec::whole(base16::encode_upper, base16::decode_upper);

const BASE32_BLOCK: Block = Block::new(5, 8);

pub const BASE32: Codec =
    Codec::streaming(base32::encode_lower, base32::decode_lower, BASE32_BLOCK);
pub const BASE32_UPPER: Codec =
    Codec::streaming(base32::encode_upper, base32::decode_upper, BASE32_BLOCK);
pub const BASE32_PAD: Codec =
    Codec::streaming(base32::encode_pad_lower, base32::decode_pad_lower, BASE32_BLOCK);
pub const BASE32_PAD_UPPER: Codec =
    Codec::streaming(base32::encode_pad_upper, base32::decode_pad_upper, BASE32_BLOCK);
pub const BASE32_HEX: Codec =
    Codec::streaming(base32::encode_hex_lower, base32::decode_hex_lower, BASE32_BLOCK);
pub const BASE32_HEX_UPPER: Codec =
    Codec::streaming(base32::encode_hex_upper, base32::decode_hex_upper, BASE32_BLOCK);
pub const BASE32_HEX_PAD: Codec = Codec::streaming(
    base32::encode_hex_pad_lower,
    base32::decode_hex_pad_lower,
    BASE32_BLOCK,
);
pub const BASE32_HEX_PAD_UPPER: Codec = Codec::streaming(
    base32::encode_hex_pad_upper,
    base32::decode_hex_pad_upper,
    BASE32_BLOCK,
);

pub const BASE36: Codec = Codec::whole(basex::encode_base36_lower, basex::decode_base36_lower);
pub const BASE36_UPPER: Codec =
    Codec::whole(basex::encode_base36_upper, basex::decode_base36_upper);

pub const BASE58_BTC: Codec = Codec::whole(basex::encode_base58_btc, basex::decode_base58_btc);
pub const BASE58_FLICKR: Codec =
    Codec::whole(basex::encode_base58_flickr, basex::decode_base58_flickr);

const BASE64_BLOCK: Block = Block::new(3, 4);

pub const BASE64: Codec = Codec::streaming(base64::encode_std, base64::decode_std, BASE64_BLOCK);
pub const BASE64_PAD: Codec =
    Codec::streaming(base64::encode_std_pad, base64::decode_std_pad, BASE64_BLOCK);
pub const BASE64_URL: Codec =
    Codec::streaming(base64::encode_url, base64::decode_url, BASE64_BLOCK);
pub const BASE64_URL_PAD: Codec =
    Codec::streaming(base64::encode_url_pad, base64::decode_url_pad, BASE64_BLOCK);

pub const BASE256_EMOJI: Codec = Codec::whole(emoji::encode, emoji::decode);
