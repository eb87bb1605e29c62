use super::core::{DecodeError, build_decode_table};

const LOWER_DIGITS: &[u8; 16] = b"0123456789abcdef";
const UPPER_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Pre-computed hex encoding table: byte → 2 hex chars.
const fn build_hex_table(digits: &[u8; 16]) -> [[u8; 2]; 256] {
    let mut table = [[0u8; 2]; 256];
    let mut i = 0u16;
    while i < 256 {
        table[i as usize] = [digits[(i >> 4) as usize], digits[(i & 0x0F) as usize]];
        i += 1;
    }
    table
}

static LOWER_TABLE: [[u8; 2]; 256] = build_hex_table(LOWER_DIGITS);
static UPPER_TABLE: [[u8; 2]; 256] = build_hex_table(UPPER_DIGITS);

// Decoding is case-strict: the lower-case variant does not accept 'A'..'F'.
const LOWER_DECODE: [u8; 256] = build_decode_table(LOWER_DIGITS);
const UPPER_DECODE: [u8; 256] = build_decode_table(UPPER_DIGITS);

fn encode_with(data: &[u8], table: &[[u8; 2]; 256]) -> Vec<u8> {
    let mut result = Vec::with_capacity(data.len() * 2);
    for &b in data {
        result.extend_from_slice(&table[b as usize]);
    }
    result
}

fn decode_with(input: &[u8], table: &[u8; 256]) -> Result<Vec<u8>, DecodeError> {
    if input.len() % 2 != 0 {
        return Err(DecodeError::InvalidLength(input.len()));
    }

    let mut result = Vec::with_capacity(input.len() / 2);
    for (i, pair) in input.chunks_exact(2).enumerate() {
        let hi = table[pair[0] as usize];
        if hi == 0xFF {
            return Err(DecodeError::InvalidByte {
                offset: i * 2,
                byte: pair[0],
            });
        }
        let lo = table[pair[1] as usize];
        if lo == 0xFF {
            return Err(DecodeError::InvalidByte {
                offset: i * 2 + 1,
                byte: pair[1],
            });
        }
        result.push((hi << 4) | lo);
    }
    Ok(result)
}

pub fn encode_lower(data: &[u8]) -> Vec<u8> {
    encode_with(data, &LOWER_TABLE)
}

pub fn encode_upper(data: &[u8]) -> Vec<u8> {
    encode_with(data, &UPPER_TABLE)
}

pub fn decode_lower(input: &[u8]) -> Result<Vec<u8>, DecodeError> {
    decode_with(input, &LOWER_DECODE)
}

pub fn decode_upper(input: &[u8]) -> Result<Vec<u8>, DecodeError> {
    decode_with(input, &UPPER_DECODE)
}
