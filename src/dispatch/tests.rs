use proptest::prelude::*;

use super::*;
use crate::codec::DecodeError;
use crate::error::Error;
use crate::registry::{Encoding, encodings};

const SAMPLE: &[u8] = b"yes mani !";

// ===== ENCODE =====

#[test]
fn test_encode_base64url() {
    assert_eq!(encode(Encoding::BASE64_URL, SAMPLE).unwrap(), b"ueWVzIG1hbmkgIQ");
}

#[test]
fn test_encode_known_vectors() {
    let cases: &[(Encoding, &str)] = &[
        (
            Encoding::BASE2,
            "001111001011001010111001100100000011011010110000101101110011010010010000000100001",
        ),
        (Encoding::BASE16, "f796573206d616e692021"),
        (Encoding::BASE16_UPPER, "F796573206D616E692021"),
        (Encoding::BASE32, "bpfsxgidnmfxgsibb"),
        (Encoding::BASE32_UPPER, "BPFSXGIDNMFXGSIBB"),
        (Encoding::BASE32_PAD, "cpfsxgidnmfxgsibb"),
        (Encoding::BASE32_HEX, "vf5in683dc5n6i811"),
        (Encoding::BASE32_HEX_PAD_UPPER, "TF5IN683DC5N6I811"),
        (Encoding::BASE36, "k2lcpzo5yikidynfl"),
        (Encoding::BASE36_UPPER, "K2LCPZO5YIKIDYNFL"),
        (Encoding::BASE58_BTC, "z7paNL19xttacUY"),
        (Encoding::BASE58_FLICKR, "Z7Pznk19XTTzBtx"),
        (Encoding::BASE64, "meWVzIG1hbmkgIQ"),
        (Encoding::BASE64_PAD, "MeWVzIG1hbmkgIQ=="),
        (Encoding::BASE64_URL_PAD, "UeWVzIG1hbmkgIQ=="),
        (Encoding::BASE256_EMOJI, "🚀🏃✋🌈😅🌷🤤😻🌟😅👏"),
    ];
    for (encoding, expected) in cases {
        assert_eq!(
            encode_to_string(*encoding, SAMPLE).unwrap(),
            *expected,
            "{encoding}"
        );
    }
}

#[test]
fn test_encode_empty_is_tag_only() {
    assert_eq!(encode(Encoding::IDENTITY, b"").unwrap(), vec![0u8]);
    assert_eq!(encode(Encoding::BASE256_EMOJI, b"").unwrap(), "🚀".as_bytes());
    for encoding in encodings() {
        let out = encode(encoding, b"").unwrap();
        let tag = encoding.tag().unwrap();
        assert_eq!(out.len(), tag.len_utf8(), "{encoding}");
    }
}

#[test]
fn test_encode_identity_is_verbatim() {
    let data = [0xFFu8, 0x00, 0x80, b'='];
    let out = encode(Encoding::IDENTITY, &data).unwrap();
    assert_eq!(out[0], 0);
    assert_eq!(&out[1..], &data);
}

#[test]
fn test_encode_unregistered() {
    let err = encode(Encoding::from_code('q' as u32), SAMPLE).unwrap_err();
    assert_eq!(err, Error::UnsupportedEncoding("0x71".to_string()));
}

#[test]
fn test_encode_to_string_not_text() {
    assert_eq!(
        encode_to_string(Encoding::IDENTITY, &[0xFF]).unwrap_err(),
        Error::NotText(Encoding::IDENTITY)
    );
    assert_eq!(encode_to_string(Encoding::IDENTITY, b"ok").unwrap(), "\0ok");
}

#[test]
fn test_output_starts_with_tag() {
    for encoding in encodings() {
        let out = encode(encoding, SAMPLE).unwrap();
        let mut buf = [0u8; 4];
        let tag = encoding.tag().unwrap().encode_utf8(&mut buf);
        assert!(out.starts_with(tag.as_bytes()), "{encoding}");
    }
}

// ===== DECODE =====

#[test]
fn test_decode_base64url() {
    let (encoding, data) = decode("ueWVzIG1hbmkgIQ").unwrap();
    assert_eq!(encoding, Encoding::BASE64_URL);
    assert_eq!(data, SAMPLE);
}

#[test]
fn test_decode_accepts_bytes_and_str() {
    let from_str = decode("f68690a").unwrap();
    let from_bytes = decode(b"f68690a").unwrap();
    let from_vec = decode(b"f68690a".to_vec()).unwrap();
    assert_eq!(from_str, from_bytes);
    assert_eq!(from_bytes, from_vec);
    assert_eq!(from_str.1, b"hi\n");
}

#[test]
fn test_decode_tag_only() {
    for encoding in encodings() {
        let tagged = encode(encoding, b"").unwrap();
        assert_eq!(decode(&tagged).unwrap(), (encoding, Vec::new()), "{encoding}");
    }
}

#[test]
fn test_decode_empty_input() {
    assert_eq!(decode("").unwrap_err(), Error::EmptyInput);
    assert_eq!(decode(b"").unwrap_err(), Error::EmptyInput);
}

#[test]
fn test_decode_unknown_tag() {
    assert!(matches!(
        decode("qabc").unwrap_err(),
        Error::UnsupportedEncoding(_)
    ));
    assert!(matches!(
        decode("éabc").unwrap_err(),
        Error::UnsupportedEncoding(_)
    ));
}

#[test]
fn test_decode_invalid_body() {
    assert_eq!(
        decode("f6g").unwrap_err(),
        Error::InvalidEncoding {
            encoding: Encoding::BASE16,
            source: DecodeError::InvalidByte {
                offset: 1,
                byte: b'g'
            },
        }
    );
    assert!(matches!(
        decode("z0OIl").unwrap_err(),
        Error::InvalidEncoding {
            encoding: Encoding::BASE58_BTC,
            ..
        }
    ));
    assert!(matches!(
        decode("🚀abc").unwrap_err(),
        Error::InvalidEncoding {
            encoding: Encoding::BASE256_EMOJI,
            ..
        }
    ));
}

#[test]
fn test_decode_is_case_strict() {
    // Lowercase tag, uppercase body.
    assert!(matches!(
        decode("fABCD").unwrap_err(),
        Error::InvalidEncoding { .. }
    ));
    assert!(matches!(
        decode("bMZXW6").unwrap_err(),
        Error::InvalidEncoding { .. }
    ));
    assert_eq!(decode("FABCD").unwrap().1, vec![0xAB, 0xCD]);
}

#[test]
fn test_case_variants_share_bytes_not_tags() {
    let lower = encode(Encoding::BASE32_HEX, SAMPLE).unwrap();
    let upper = encode(Encoding::BASE32_HEX_UPPER, SAMPLE).unwrap();
    assert_ne!(lower[0], upper[0]);
    assert_eq!(lower[1..].to_ascii_uppercase(), upper[1..]);
    assert_eq!(decode(&lower).unwrap().1, decode(&upper).unwrap().1);
}

#[test]
fn test_padded_variant_rejects_missing_padding() {
    assert!(matches!(
        decode("MeWVzIG1hbmkgIQ").unwrap_err(),
        Error::InvalidEncoding { .. }
    ));
    assert!(matches!(
        decode("meWVzIG1hbmkgIQ==").unwrap_err(),
        Error::InvalidEncoding { .. }
    ));
}

// ===== HANDLES =====

#[test]
fn test_encoder_by_name_and_tag() {
    let by_name = Encoder::by_name("base32").unwrap();
    let by_tag = Encoder::by_name("b").unwrap();
    assert_eq!(by_name, by_tag);
    assert_eq!(by_name.encoding(), Encoding::BASE32);
    assert_eq!(by_name.name(), "base32");
    assert_eq!("base58flickr".parse::<Encoder>().unwrap().encoding(), Encoding::BASE58_FLICKR);
    assert_eq!("🚀".parse::<Decoder>().unwrap().encoding(), Encoding::BASE256_EMOJI);
}

#[test]
fn test_encoder_by_name_errors() {
    assert_eq!(Encoder::by_name("").unwrap_err(), Error::EmptyEncodingName);
    assert_eq!(Decoder::by_name("").unwrap_err(), Error::EmptyEncodingName);
    assert_eq!(
        Encoder::by_name("base32HEX").unwrap_err(),
        Error::UnsupportedEncoding("base32HEX".to_string())
    );
    assert!(matches!(
        Encoder::by_name("q").unwrap_err(),
        Error::UnsupportedEncoding(_)
    ));
}

#[test]
fn test_encoder_new_checks_registry() {
    assert!(Encoder::new(Encoding::BASE36).is_ok());
    assert!(Encoder::try_from(Encoding::BASE36_UPPER).is_ok());
    assert_eq!(
        Encoder::new(Encoding::from_code(0x71)).unwrap_err(),
        Error::UnsupportedEncoding("0x71".to_string())
    );
    assert!(Decoder::try_from(Encoding::from_code(0x1F680 + 1)).is_err());
}

#[test]
#[should_panic]
fn test_encoder_must_new_panics() {
    let _ = Encoder::must_new(Encoding::from_code('q' as u32));
}

#[test]
#[should_panic]
fn test_decoder_must_new_panics() {
    let _ = Decoder::must_new(Encoding::from_code('q' as u32));
}

#[test]
fn test_encoder_matches_dispatcher() {
    for encoding in encodings() {
        let encoder = Encoder::must_new(encoding);
        assert_eq!(encoder.encode(SAMPLE), encode(encoding, SAMPLE).unwrap());
    }
}

#[test]
fn test_decoder_accepts_own_tag() {
    let decoder = Decoder::by_name("base64pad").unwrap();
    assert_eq!(decoder.decode("MeWVzIG1hbmkgIQ==").unwrap(), SAMPLE);
}

#[test]
fn test_decoder_rejects_other_tag() {
    let decoder = Decoder::must_new(Encoding::BASE64);
    assert_eq!(
        decoder.decode("MeWVzIG1hbmkgIQ==").unwrap_err(),
        Error::EncodingMismatch {
            expected: Encoding::BASE64,
            found: Encoding::BASE64_PAD,
        }
    );
    assert_eq!(decoder.decode("").unwrap_err(), Error::EmptyInput);
}

#[test]
fn test_error_messages() {
    let err = decode("f6g").unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid base16 data: invalid byte 0x67 at offset 1"
    );
    let err = Decoder::must_new(Encoding::BASE64)
        .decode("ueWVzIG1hbmkgIQ")
        .unwrap_err();
    assert_eq!(err.to_string(), "expected base64 data, found base64url");
}

proptest! {
    #[test]
    fn prop_round_trip_every_encoding(data in proptest::collection::vec(any::<u8>(), 0..256)) {
        for encoding in encodings() {
            let tagged = encode(encoding, &data).unwrap();
            let (found, decoded) = decode(&tagged).unwrap();
            prop_assert_eq!(found, encoding);
            prop_assert_eq!(&decoded, &data);
        }
    }

    #[test]
    fn prop_leading_zeros_survive(zeros in 0usize..8, tail in proptest::collection::vec(any::<u8>(), 0..32)) {
        let mut data = vec![0u8; zeros];
        data.extend_from_slice(&tail);
        for encoding in [Encoding::BASE36, Encoding::BASE36_UPPER, Encoding::BASE58_BTC, Encoding::BASE58_FLICKR] {
            let tagged = encode(encoding, &data).unwrap();
            prop_assert_eq!(decode(&tagged).unwrap().1, data.clone());
        }
    }
}

#[test]
fn test_submodule_paths_match_reexports() {
    assert_eq!(crate::registry::core::resolve("b"), crate::registry::resolve("b"));
    assert_eq!(
        crate::dispatch::core::encode(Encoding::BASE16, b"a"),
        encode(Encoding::BASE16, b"a")
    );
    let decoder: crate::dispatch::handle::Decoder = Decoder::must_new(Encoding::BASE16);
    assert_eq!(decoder.decode("f61").unwrap(), b"a");
    let codec: &crate::codec::core::Codec = crate::registry::codec_for(Encoding::BASE16).unwrap();
    assert!(codec.supports_streaming_decode());
}
