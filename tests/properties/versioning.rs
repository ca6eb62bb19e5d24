//! Property tests for versioned filenames.

use proptest::prelude::*;

use static_upload::domain::value_objects::{is_versionable, versioned_filename};
use static_upload::Fingerprint;

fn stem() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9_-][A-Za-z0-9._-]{0,15}").unwrap()
}

fn directory() -> impl Strategy<Value = String> {
    let segment = proptest::string::string_regex("[A-Za-z0-9._-]{1,8}").unwrap();
    proptest::collection::vec(segment, 0..=3).prop_map(|segments| {
        segments
            .into_iter()
            .map(|s| format!("{}/", s))
            .collect::<String>()
    })
}

fn extension() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("js"), Just("css")]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Versioning never panics on arbitrary names.
    #[test]
    fn property_versioning_never_panics(
        name in "(?s).{0,128}",
        content in proptest::collection::vec(any::<u8>(), 0..64)
    ) {
        let _ = versioned_filename(&name, &Fingerprint::from_bytes(&content));
    }

    /// PROPERTY: The fingerprint sits right before the final extension, which
    /// is kept, and the directory part is untouched.
    #[test]
    fn property_fingerprint_before_extension(
        dir in directory(),
        stem in stem(),
        ext in extension(),
        content in proptest::collection::vec(any::<u8>(), 0..64)
    ) {
        let fp = Fingerprint::from_bytes(&content);
        let name = format!("{}{}.{}", dir, stem, ext);

        prop_assert!(is_versionable(&name, &["js", "css"]));
        let versioned = versioned_filename(&name, &fp);
        prop_assert_eq!(versioned, format!("{}{}.{}.{}", dir, stem, fp, ext));
    }

    /// PROPERTY: Distinct (name, fingerprint) pairs give distinct names.
    #[test]
    fn property_versioning_is_injective(
        a in stem(), b in stem(),
        ext in extension(),
        ca in proptest::collection::vec(any::<u8>(), 0..32),
        cb in proptest::collection::vec(any::<u8>(), 0..32)
    ) {
        let (fa, fb) = (Fingerprint::from_bytes(&ca), Fingerprint::from_bytes(&cb));
        let (na, nb) = (format!("{}.{}", a, ext), format!("{}.{}", b, ext));
        prop_assume!(na != nb || fa != fb);

        prop_assert_ne!(versioned_filename(&na, &fa), versioned_filename(&nb, &fb));
    }

    /// PROPERTY: Names without a versionable extension are not versionable.
    #[test]
    fn property_other_extensions_not_versionable(
        stem in stem(),
        ext in "(png|svg|woff2|html|map|json|txt|JS|CSS|Css)"
    ) {
        let name = format!("{}.{}", stem, ext);
        prop_assert!(!is_versionable(&name, &["js", "css"]));
    }
}
