//! Library-level scenarios: pattern expansion, batch upload against an
//! in-memory store, manifest output.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use static_upload::config::Config;
use static_upload::domain::services::format_manifest;
use static_upload::infrastructure::{expand_file_list, publish_manifest, MemoryObjectStore};
use static_upload::presentation::factory::create_upload_use_case;
use static_upload::{ManifestFormat, UploadOptions, UploadOutcome};
use tempfile::tempdir;

const BUCKET: &str = "assets.example.com";

fn config() -> Config {
    let mut config = Config::default();
    config.storage.default_bucket = BUCKET.to_string();
    config
}

fn site(root: &Path) {
    fs::create_dir_all(root.join("public/css")).unwrap();
    fs::write(root.join("public/app.js"), "console.log('app')").unwrap();
    fs::write(root.join("public/css/style.css"), "body{margin:0}").unwrap();
    fs::write(root.join("public/logo.png"), [0x89, b'P', b'N', b'G']).unwrap();
}

fn run(
    root: &Path,
    store: &Arc<MemoryObjectStore>,
    dry_run: bool,
    format: ManifestFormat,
) -> (static_upload::UploadReport, Vec<u8>) {
    let patterns = format!(
        "{root}/public/*.js,{root}/public/**/*.css,{root}/public/*.png",
        root = root.display()
    );
    let files = expand_file_list(&patterns).unwrap();
    let options = UploadOptions::new(BUCKET, "v1")
        .with_files(files)
        .with_dry_run(dry_run);

    let use_case = create_upload_use_case(&config(), store.clone());
    let report = use_case.execute(&options).unwrap();
    let bytes = format_manifest(&report.manifest, format).unwrap();
    (report, bytes)
}

#[test]
fn scenario_first_run_uploads_everything() {
    let dir = tempdir().unwrap();
    site(dir.path());
    let store = Arc::new(MemoryObjectStore::new());

    let (report, bytes) = run(dir.path(), &store, false, ManifestFormat::Json);

    assert_eq!(report.records.len(), 3);
    assert!(report
        .records
        .iter()
        .all(|r| r.outcome == UploadOutcome::Uploaded));
    assert_eq!(store.keys(BUCKET).len(), 3);

    let manifest: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    let png = format!("{}/public/logo.png", dir.path().display());
    let expected_png_key = format!("v1{}/public/logo.png", dir.path().display());
    assert_eq!(
        manifest[&png],
        format!("https://{}/{}", BUCKET, expected_png_key)
    );

    let js = format!("{}/public/app.js", dir.path().display());
    let js_url = manifest[&js].as_str().unwrap();
    assert!(js_url.starts_with(&format!("https://{}/v1/", BUCKET)));
    assert!(js_url.ends_with(".js"));
    assert!(!js_url.ends_with("/app.js"));
}

#[test]
fn scenario_second_run_is_idempotent() {
    let dir = tempdir().unwrap();
    site(dir.path());
    let store = Arc::new(MemoryObjectStore::new());

    let (_, first) = run(dir.path(), &store, false, ManifestFormat::Csv);
    let puts_after_first = store.put_calls();
    let (report, second) = run(dir.path(), &store, false, ManifestFormat::Csv);

    assert_eq!(first, second);
    assert_eq!(store.put_calls(), puts_after_first);
    assert!(report
        .records
        .iter()
        .all(|r| !r.outcome.is_new()));
}

#[test]
fn scenario_dry_run_transfers_nothing() {
    let dir = tempdir().unwrap();
    site(dir.path());
    let store = Arc::new(MemoryObjectStore::new());

    let (report, _) = run(dir.path(), &store, true, ManifestFormat::Json);
    let out = dir.path().join("staticAssets.json");
    let written = publish_manifest(&report.manifest, ManifestFormat::Json, &out, true).unwrap();

    assert_eq!(report.planned_count(), 3);
    assert_eq!(store.put_calls(), 0);
    assert_eq!(store.head_calls(), 3);
    assert!(!written);
    assert!(!out.exists());
}

#[test]
fn scenario_manifest_written_to_disk() {
    let dir = tempdir().unwrap();
    site(dir.path());
    let store = Arc::new(MemoryObjectStore::new());
    let (report, bytes) = run(dir.path(), &store, false, ManifestFormat::Csv);

    let out = dir.path().join("build/staticAssets.csv");
    assert!(publish_manifest(&report.manifest, ManifestFormat::Csv, &out, false).unwrap());

    let written = fs::read_to_string(&out).unwrap();
    assert_eq!(written.as_bytes(), bytes.as_slice());
    assert_eq!(written.lines().count(), 3);
    assert!(written.lines().all(|l| l.contains(",https://")));
}
