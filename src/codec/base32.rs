use super::core::{DecodeError, build_decode_table};

const STD_LOWER: &[u8; 32] = b"abcdefghijklmnopqrstuvwxyz234567";
const STD_UPPER: &[u8; 32] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";
const HEX_LOWER: &[u8; 32] = b"0123456789abcdefghijklmnopqrstuv";
const HEX_UPPER: &[u8; 32] = b"0123456789ABCDEFGHIJKLMNOPQRSTUV";

const STD_LOWER_DECODE: [u8; 256] = build_decode_table(STD_LOWER);
const STD_UPPER_DECODE: [u8; 256] = build_decode_table(STD_UPPER);
const HEX_LOWER_DECODE: [u8; 256] = build_decode_table(HEX_LOWER);
const HEX_UPPER_DECODE: [u8; 256] = build_decode_table(HEX_UPPER);

/// Encode base32 directly to bytes.
/// Full 5-byte chunks are processed branch-free; the tail is padded with
/// '=' to a multiple of 8 only when `pad` is set.
fn encode_with(data: &[u8], alphabet: &[u8; 32], pad: bool) -> Vec<u8> {
    if data.is_empty() {
        return Vec::new();
    }
    let mut result = Vec::with_capacity(data.len().div_ceil(5) * 8);
    let full_end = (data.len() / 5) * 5;

    for chunk in data[..full_end].chunks_exact(5) {
        let b0 = chunk[0];
        let b1 = chunk[1];
        let b2 = chunk[2];
        let b3 = chunk[3];
        let b4 = chunk[4];
        result.extend_from_slice(&[
            alphabet[(b0 >> 3) as usize],
            alphabet[((b0 & 0x07) << 2 | b1 >> 6) as usize],
            alphabet[((b1 >> 1) & 0x1F) as usize],
            alphabet[((b1 & 0x01) << 4 | b2 >> 4) as usize],
            alphabet[((b2 & 0x0F) << 1 | b3 >> 7) as usize],
            alphabet[((b3 >> 2) & 0x1F) as usize],
            alphabet[((b3 & 0x03) << 3 | b4 >> 5) as usize],
            alphabet[(b4 & 0x1F) as usize],
        ]);
    }

    let remainder = data.len() % 5;
    if remainder > 0 {
        let mut buf = [0u8; 5];
        buf[..remainder].copy_from_slice(&data[full_end..]);
        let [b0, b1, b2, b3, b4] = buf;
        let symbols = [
            alphabet[(b0 >> 3) as usize],
            alphabet[((b0 & 0x07) << 2 | b1 >> 6) as usize],
            alphabet[((b1 >> 1) & 0x1F) as usize],
            alphabet[((b1 & 0x01) << 4 | b2 >> 4) as usize],
            alphabet[((b2 & 0x0F) << 1 | b3 >> 7) as usize],
            alphabet[((b3 >> 2) & 0x1F) as usize],
            alphabet[((b3 & 0x03) << 3 | b4 >> 5) as usize],
        ];
        // Characters needed for 1..=4 trailing bytes.
        let used = match remainder {
            1 => 2,
            2 => 4,
            3 => 5,
            _ => 7,
        };
        result.extend_from_slice(&symbols[..used]);
        if pad {
            result.resize(result.len() + 8 - used, b'=');
        }
    }
    result
}

/// Strict base32 decode. Padded variants require the body to be a multiple
/// of 8 characters with canonical trailing '='; unpadded variants reject '='.
fn decode_with(input: &[u8], table: &[u8; 256], pad: bool) -> Result<Vec<u8>, DecodeError> {
    let body = if pad {
        if input.len() % 8 != 0 {
            return Err(DecodeError::InvalidLength(input.len()));
        }
        let pads = input.iter().rev().take_while(|&&b| b == b'=').count();
        if !matches!(pads, 0 | 1 | 3 | 4 | 6) {
            return Err(DecodeError::InvalidPadding);
        }
        &input[..input.len() - pads]
    } else {
        input
    };

    let tail = body.len() % 8;
    if matches!(tail, 1 | 3 | 6) {
        return Err(DecodeError::InvalidLength(body.len()));
    }

    let mut result = Vec::with_capacity(body.len() * 5 / 8 + 1);
    let mut vals = [0u8; 8];
    for (group, chunk) in body.chunks(8).enumerate() {
        for (i, &b) in chunk.iter().enumerate() {
            let v = table[b as usize];
            if v == 0xFF {
                return Err(DecodeError::InvalidByte {
                    offset: group * 8 + i,
                    byte: b,
                });
            }
            vals[i] = v;
        }
        let n = chunk.len();
        if n >= 2 {
            result.push((vals[0] << 3) | (vals[1] >> 2));
        }
        if n >= 4 {
            result.push((vals[1] << 6) | (vals[2] << 1) | (vals[3] >> 4));
        }
        if n >= 5 {
            result.push((vals[3] << 4) | (vals[4] >> 1));
        }
        if n >= 7 {
            result.push((vals[4] << 7) | (vals[5] << 2) | (vals[6] >> 3));
        }
        if n == 8 {
            result.push((vals[6] << 5) | vals[7]);
        }
    }
    Ok(result)
}

pub fn encode_lower(data: &[u8]) -> Vec<u8> {
    encode_with(data, STD_LOWER, false)
}

pub fn encode_upper(data: &[u8]) -> Vec<u8> {
    encode_with(data, STD_UPPER, false)
}

pub fn encode_pad_lower(data: &[u8]) -> Vec<u8> {
    encode_with(data, STD_LOWER, true)
}

pub fn encode_pad_upper(data: &[u8]) -> Vec<u8> {
    encode_with(data, STD_UPPER, true)
}

pub fn encode_hex_lower(data: &[u8]) -> Vec<u8> {
    encode_with(data, HEX_LOWER, false)
}

pub fn encode_hex_upper(data: &[u8]) -> Vec<u8> {
    encode_with(data, HEX_UPPER, false)
}

pub fn encode_hex_pad_lower(data: &[u8]) -> Vec<u8> {
    encode_with(data, HEX_LOWER, true)
}

pub fn encode_hex_pad_upper(data: &[u8]) -> Vec<u8> {
    encode_with(data, HEX_UPPER, true)
}

pub fn decode_lower(input: &[u8]) -> Result<Vec<u8>, DecodeError> {
    decode_with(input, &STD_LOWER_DECODE, false)
}

pub fn decode_upper(input: &[u8]) -> Result<Vec<u8>, DecodeError> {
    decode_with(input, &STD_UPPER_DECODE, false)
}

pub fn decode_pad_lower(input: &[u8]) -> Result<Vec<u8>, DecodeError> {
    decode_with(input, &STD_LOWER_DECODE, true)
}

pub fn decode_pad_upper(input: &[u8]) -> Result<Vec<u8>, DecodeError> {
    decode_with(input, &STD_UPPER_DECODE, true)
}

pub fn decode_hex_lower(input: &[u8]) -> Result<Vec<u8>, DecodeError> {
    decode_with(input, &HEX_LOWER_DECODE, false)
}

pub fn decode_hex_upper(input: &[u8]) -> Result<Vec<u8>, DecodeError> {
    decode_with(input, &HEX_UPPER_DECODE, false)
}

pub fn decode_hex_pad_lower(input: &[u8]) -> Result<Vec<u8>, DecodeError> {
    decode_with(input, &HEX_LOWER_DECODE, true)
}

pub fn decode_hex_pad_upper(input: &[u8]) -> Result<Vec<u8>, DecodeError> {
    decode_with(input, &HEX_UPPER_DECODE, true)
}
