//! Property-based tests for audio payload handling

use application::{ApplicationError, decode_audio_payload, encode_audio};
use domain::AudioFormat;
use proptest::prelude::*;

proptest! {
    #[test]
    fn data_url_prefix_does_not_change_bytes(data in proptest::collection::vec(any::<u8>(), 1..512)) {
        let encoded = encode_audio(&data);
        let raw = decode_audio_payload(&encoded).unwrap();
        let prefixed = decode_audio_payload(&format!("data:audio/ogg;base64,{encoded}")).unwrap();

        prop_assert_eq!(raw.data(), data.as_slice());
        prop_assert_eq!(prefixed.data(), data.as_slice());
        prop_assert_eq!(raw.format(), AudioFormat::Wav);
        prop_assert_eq!(prefixed.format(), AudioFormat::Ogg);
    }

    #[test]
    fn wrapped_base64_decodes_like_unwrapped(data in proptest::collection::vec(any::<u8>(), 1..512)) {
        let encoded = encode_audio(&data);
        let wrapped: String = encoded
            .as_bytes()
            .chunks(76)
            .map(|line| String::from_utf8_lossy(line).into_owned())
            .collect::<Vec<_>>()
            .join("\r\n");
        let decoded = decode_audio_payload(&wrapped).unwrap();
        prop_assert_eq!(decoded.data(), data.as_slice());
    }

    #[test]
    fn decoding_never_panics(payload in ".*") {
        match decode_audio_payload(&payload) {
            Ok(clip) => prop_assert!(!clip.is_empty()),
            Err(err) => prop_assert!(matches!(err, ApplicationError::Decode(_))),
        }
    }
}
