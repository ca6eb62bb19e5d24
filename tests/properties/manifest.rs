//! Property tests for manifest output.

use std::collections::BTreeMap;

use proptest::prelude::*;

use static_upload::domain::services::format_manifest;
use static_upload::{Manifest, ManifestFormat};

fn entries() -> impl Strategy<Value = BTreeMap<String, String>> {
    proptest::collection::btree_map("(?s).{1,24}", "https://[a-z.]{1,12}/(?s).{0,24}", 0..16)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: JSON manifests parse back to the same mapping.
    #[test]
    fn property_json_round_trips(map in entries()) {
        let manifest: Manifest = map.clone().into_iter().collect();
        let bytes = format_manifest(&manifest, ManifestFormat::Json).unwrap();

        let parsed: BTreeMap<String, String> = serde_json::from_slice(&bytes).unwrap();
        prop_assert_eq!(parsed, map);
    }

    /// PROPERTY: CSV manifests hold one two-field record per entry, no header.
    #[test]
    fn property_csv_one_record_per_entry(map in entries()) {
        let manifest: Manifest = map.clone().into_iter().collect();
        let bytes = format_manifest(&manifest, ManifestFormat::Csv).unwrap();

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_reader(bytes.as_slice());
        let rows: Vec<(String, String)> = reader
            .records()
            .map(|r| {
                let r = r.unwrap();
                prop_assert_eq!(r.len(), 2);
                Ok((r[0].to_string(), r[1].to_string()))
            })
            .collect::<Result<_, TestCaseError>>()?;

        prop_assert_eq!(rows, map.into_iter().collect::<Vec<_>>());
    }
}
