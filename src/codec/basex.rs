//! Big-number radix conversion for the non power-of-two bases (36, 58).
//!
//! Leading zero bytes are not representable as a number, so each one is
//! carried over as a single leading zero digit (`alphabet[0]`). Base58 goes
//! through `bs58`; base36 uses the carry loop below.

use super::core::{DecodeError, build_decode_table};

pub struct Alphabet {
    digits: &'static [u8],
    table: [u8; 256],
}

impl Alphabet {
    const fn new(digits: &'static [u8]) -> Self {
        Alphabet {
            digits,
            table: build_decode_table(digits),
        }
    }

    #[inline]
    fn radix(&self) -> u32 {
        self.digits.len() as u32
    }

    #[inline]
    fn zero(&self) -> u8 {
        self.digits[0]
    }
}

pub static BASE36_LOWER: Alphabet = Alphabet::new(b"0123456789abcdefghijklmnopqrstuvwxyz");
pub static BASE36_UPPER: Alphabet = Alphabet::new(b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ");

pub fn encode(alphabet: &Alphabet, data: &[u8]) -> Vec<u8> {
    let zeros = data.iter().take_while(|&&b| b == 0).count();
    let radix = alphabet.radix();

    // Little-endian digit values of the number formed by data[zeros..].
    let mut digits: Vec<u8> = Vec::with_capacity((data.len() - zeros) * 2);
    for &byte in &data[zeros..] {
        let mut carry = byte as u32;
        for d in digits.iter_mut() {
            carry += (*d as u32) << 8;
            *d = (carry % radix) as u8;
            carry /= radix;
        }
        while carry > 0 {
            digits.push((carry % radix) as u8);
            carry /= radix;
        }
    }

    let mut result = Vec::with_capacity(zeros + digits.len());
    result.resize(zeros, alphabet.zero());
    result.extend(digits.iter().rev().map(|&d| alphabet.digits[d as usize]));
    result
}

pub fn decode(alphabet: &Alphabet, input: &[u8]) -> Result<Vec<u8>, DecodeError> {
    let zeros = input.iter().take_while(|&&c| c == alphabet.zero()).count();
    let radix = alphabet.radix();

    // Little-endian bytes of the number formed by input[zeros..].
    let mut bytes: Vec<u8> = Vec::with_capacity(input.len());
    for (i, &c) in input.iter().enumerate().skip(zeros) {
        let v = alphabet.table[c as usize];
        if v == 0xFF {
            return Err(DecodeError::InvalidByte { offset: i, byte: c });
        }
        let mut carry = v as u32;
        for b in bytes.iter_mut() {
            carry += (*b as u32) * radix;
            *b = carry as u8;
            carry >>= 8;
        }
        while carry > 0 {
            bytes.push(carry as u8);
            carry >>= 8;
        }
    }

    let mut result = vec![0u8; zeros];
    result.extend(bytes.iter().rev());
    Ok(result)
}

pub fn encode_base36_lower(data: &[u8]) -> Vec<u8> {
    encode(&BASE36_LOWER, data)
}

pub fn encode_base36_upper(data: &[u8]) -> Vec<u8> {
    encode(&BASE36_UPPER, data)
}

pub fn decode_base36_lower(input: &[u8]) -> Result<Vec<u8>, DecodeError> {
    decode(&BASE36_LOWER, input)
}

pub fn decode_base36_upper(input: &[u8]) -> Result<Vec<u8>, DecodeError> {
    decode(&BASE36_UPPER, input)
}

fn encode_base58(alphabet: &'static bs58::Alphabet, data: &[u8]) -> Vec<u8> {
    bs58::encode(data).with_alphabet(alphabet).into_vec()
}

fn decode_base58(alphabet: &'static bs58::Alphabet, input: &[u8]) -> Result<Vec<u8>, DecodeError> {
    bs58::decode(input)
        .with_alphabet(alphabet)
        .into_vec()
        .map_err(|err| match err {
            bs58::decode::Error::InvalidCharacter { index, .. }
            | bs58::decode::Error::NonAsciiCharacter { index } => DecodeError::InvalidByte {
                offset: index,
                byte: input[index],
            },
            _ => DecodeError::InvalidLength(input.len()),
        })
}

pub fn encode_base58_btc(data: &[u8]) -> Vec<u8> {
    encode_base58(bs58::Alphabet::BITCOIN, data)
}

pub fn encode_base58_flickr(data: &[u8]) -> Vec<u8> {
    encode_base58(bs58::Alphabet::FLICKR, data)
}

pub fn decode_base58_btc(input: &[u8]) -> Result<Vec<u8>, DecodeError> {
    decode_base58(bs58::Alphabet::BITCOIN, input)
}

pub fn decode_base58_flickr(input: &[u8]) -> Result<Vec<u8>, DecodeError> {
    decode_base58(bs58::Alphabet::FLICKR, input)
}
