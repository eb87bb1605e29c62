use crate::error::{Error, Result};
use crate::registry::{self, Encoding};

/// Encode `data` as `tag || body`.
///
/// The output is bytes rather than `String` because identity output carries
/// the input verbatim; every other encoding produces UTF-8 (see
/// [`encode_to_string`]).
pub fn encode(encoding: Encoding, data: &[u8]) -> Result<Vec<u8>> {
    let entry = registry::entry(encoding)
        .ok_or_else(|| Error::UnsupportedEncoding(encoding.to_string()))?;

    let tag = entry.tag();
    let body = entry.codec.encode(data);
    let mut out = Vec::with_capacity(tag.len_utf8() + body.len());
    let mut tag_buf = [0u8; 4];
    out.extend_from_slice(tag.encode_utf8(&mut tag_buf).as_bytes());
    out.extend_from_slice(&body);
    Ok(out)
}

/// Like [`encode`], but returns text. Only identity output can fail this,
/// when the input itself is not UTF-8.
pub fn encode_to_string(encoding: Encoding, data: &[u8]) -> Result<String> {
    let bytes = encode(encoding, data)?;
    String::from_utf8(bytes).map_err(|_| Error::NotText(encoding))
}

/// Decode tagged input, returning the encoding named by its tag and the
/// decoded bytes. Never returns partial output.
pub fn decode(input: impl AsRef<[u8]>) -> Result<(Encoding, Vec<u8>)> {
    let (encoding, body) = registry::split_tag(input.as_ref())?;
    let data = decode_body(encoding, body)?;
    Ok((encoding, data))
}

/// Decode an untagged body with the codec registered for `encoding`.
pub(crate) fn decode_body(encoding: Encoding, body: &[u8]) -> Result<Vec<u8>> {
    let codec = registry::codec_for(encoding)
        .ok_or_else(|| Error::UnsupportedEncoding(encoding.to_string()))?;
    codec
        .decode(body)
        .map_err(|source| Error::InvalidEncoding { encoding, source })
}
