use super::core::DecodeError;

/// Pre-computed MSBF lookup table: byte → 8 ASCII bit characters.
const fn build_base2_table() -> [[u8; 8]; 256] {
    let mut table = [[0u8; 8]; 256];
    let mut i = 0u16;
    while i < 256 {
        let b = i as u8;
        let mut j = 0;
        while j < 8 {
            table[i as usize][j] = if (b >> (7 - j)) & 1 == 1 { b'1' } else { b'0' };
            j += 1;
        }
        i += 1;
    }
    table
}

static BASE2_TABLE: [[u8; 8]; 256] = build_base2_table();

/// Encode as a bit string, most significant bit first.
pub fn encode(data: &[u8]) -> Vec<u8> {
    let mut result = Vec::with_capacity(data.len() * 8);
    for &b in data {
        result.extend_from_slice(&BASE2_TABLE[b as usize]);
    }
    result
}

pub fn decode(input: &[u8]) -> Result<Vec<u8>, DecodeError> {
    if input.len() % 8 != 0 {
        return Err(DecodeError::InvalidLength(input.len()));
    }

    let mut result = Vec::with_capacity(input.len() / 8);
    for (group, chunk) in input.chunks_exact(8).enumerate() {
        let mut byte = 0u8;
        for (i, &b) in chunk.iter().enumerate() {
            if b != b'0' && b != b'1' {
                return Err(DecodeError::InvalidByte {
                    offset: group * 8 + i,
                    byte: b,
                });
            }
            byte = (byte << 1) | (b - b'0');
        }
        result.push(byte);
    }
    Ok(result)
}
