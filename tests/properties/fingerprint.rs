//! Property tests for content fingerprints.

use proptest::prelude::*;

use static_upload::Fingerprint;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Streaming and in-memory hashing agree, whatever the content.
    #[test]
    fn property_reader_matches_bytes(
        content in proptest::collection::vec(any::<u8>(), 0..80_000)
    ) {
        let streamed = Fingerprint::from_reader(content.as_slice()).unwrap();
        prop_assert_eq!(streamed, Fingerprint::from_bytes(&content));
    }

    /// PROPERTY: Fingerprints are fixed-length lowercase hex.
    #[test]
    fn property_fixed_length_hex(
        content in proptest::collection::vec(any::<u8>(), 0..4096)
    ) {
        let fp = Fingerprint::from_bytes(&content);
        prop_assert_eq!(fp.as_str().len(), Fingerprint::LEN);
        prop_assert!(fp.as_str().bytes().all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b)));
    }

    /// PROPERTY: Changing any byte changes the fingerprint.
    #[test]
    fn property_content_sensitive(
        content in proptest::collection::vec(any::<u8>(), 1..4096),
        index in any::<prop::sample::Index>(),
        flip in 1u8..=255
    ) {
        let mut changed = content.clone();
        let i = index.index(changed.len());
        changed[i] ^= flip;
        prop_assert_ne!(Fingerprint::from_bytes(&content), Fingerprint::from_bytes(&changed));
    }
}
