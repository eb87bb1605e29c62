use base64_simd::AsOut;

use super::core::DecodeError;

/// SIMD-accelerated base64 engines, one per multibase variant.
const STANDARD_NO_PAD: &base64_simd::Base64 = &base64_simd::STANDARD_NO_PAD;
const STANDARD: &base64_simd::Base64 = &base64_simd::STANDARD;
const URL_SAFE_NO_PAD: &base64_simd::Base64 = &base64_simd::URL_SAFE_NO_PAD;
const URL_SAFE: &base64_simd::Base64 = &base64_simd::URL_SAFE;

/// Encode into an exactly-sized buffer in a single SIMD pass.
fn encode_with(engine: &base64_simd::Base64, data: &[u8]) -> Vec<u8> {
    let enc_len = engine.encoded_length(data.len());
    let mut buf = vec![0u8; enc_len];
    if enc_len > 0 {
        engine.encode(data, buf[..enc_len].as_out());
    }
    buf
}

fn decode_with(engine: &base64_simd::Base64, input: &[u8]) -> Result<Vec<u8>, DecodeError> {
    if input.is_empty() {
        return Ok(Vec::new());
    }
    engine
        .decode_to_vec(input)
        .map_err(|_| DecodeError::InvalidBase64)
}

pub fn encode_std(data: &[u8]) -> Vec<u8> {
    encode_with(STANDARD_NO_PAD, data)
}

pub fn encode_std_pad(data: &[u8]) -> Vec<u8> {
    encode_with(STANDARD, data)
}

pub fn encode_url(data: &[u8]) -> Vec<u8> {
    encode_with(URL_SAFE_NO_PAD, data)
}

pub fn encode_url_pad(data: &[u8]) -> Vec<u8> {
    encode_with(URL_SAFE, data)
}

pub fn decode_std(input: &[u8]) -> Result<Vec<u8>, DecodeError> {
    decode_with(STANDARD_NO_PAD, input)
}

pub fn decode_std_pad(input: &[u8]) -> Result<Vec<u8>, DecodeError> {
    decode_with(STANDARD, input)
}

pub fn decode_url(input: &[u8]) -> Result<Vec<u8>, DecodeError> {
    decode_with(URL_SAFE_NO_PAD, input)
}

pub fn decode_url_pad(input: &[u8]) -> Result<Vec<u8>, DecodeError> {
    decode_with(URL_SAFE, input)
}
