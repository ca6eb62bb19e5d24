//! Property tests for object keys and URLs.

use proptest::prelude::*;

use static_upload::domain::services::UrlResolver;
use static_upload::ObjectKey;

fn path_like() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9./_-]{0,48}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Keys are clean: no leading slash, no empty, `.` or `..` segments.
    #[test]
    fn property_keys_are_clean(dir in path_like(), name in path_like()) {
        let key = ObjectKey::new(&dir, &name);
        let key = key.as_str();

        prop_assert!(!key.starts_with('/'));
        if !key.is_empty() {
            for segment in key.split('/') {
                prop_assert!(!segment.is_empty());
                prop_assert!(segment != "." && segment != "..");
            }
        }
    }

    /// PROPERTY: Joining clean segments keeps them all, in order.
    #[test]
    fn property_clean_segments_survive(
        dir in proptest::collection::vec("[A-Za-z0-9_-]{1,8}", 0..=3),
        name in proptest::collection::vec("[A-Za-z0-9_-]{1,8}", 1..=3)
    ) {
        let key = ObjectKey::new(&dir.join("/"), &name.join("/"));
        let expected: Vec<String> = dir.into_iter().chain(name).collect();
        prop_assert_eq!(key.as_str(), expected.join("/"));
    }

    /// PROPERTY: The default-bucket URL form never equals the generic form.
    #[test]
    fn property_url_forms_differ(
        bucket in "[a-z0-9.-]{3,20}",
        other in "[a-z0-9.-]{3,20}",
        name in "[A-Za-z0-9_-]{1,12}"
    ) {
        prop_assume!(bucket != other);
        let key = ObjectKey::new("v1", &name);
        let aliased = UrlResolver::new(bucket.clone(), "s3.amazonaws.com");
        let generic = UrlResolver::new(other, "s3.amazonaws.com");

        let a = aliased.resolve(&bucket, &key);
        let g = generic.resolve(&bucket, &key);

        prop_assert_eq!(&a, &format!("https://{}/{}", bucket, key));
        prop_assert_eq!(&g, &format!("https://s3.amazonaws.com/{}/{}", bucket, key));
        prop_assert_ne!(a, g);
    }
}
