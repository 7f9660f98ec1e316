//! Generate-then-upload flow against a local target directory.

use chrono::NaiveDate;
use sales_batch::{build_uploaders, run_generate, run_upload, UploadOpts};
use sales_core::{Branch, Manifest};
use sales_csv::GenerateArgs;
use tempfile::TempDir;

fn generate_args(root: &std::path::Path) -> GenerateArgs {
    GenerateArgs {
        output_root: root.to_path_buf(),
        rows: 25,
        start_hour: 9,
        end_hour: 22,
        seed: Some(11),
        batch_date: NaiveDate::from_ymd_opt(2024, 3, 7),
        reference_data: None,
    }
}

#[tokio::test]
async fn test_generate_and_upload_to_local_target() {
    let output = TempDir::new().unwrap();
    let lake = TempDir::new().unwrap();

    let opts = UploadOpts {
        local_target: Some(lake.path().to_path_buf()),
        ..Default::default()
    };
    let uploaders = build_uploaders(&opts).unwrap();
    let outcome = run_generate(&generate_args(output.path())).unwrap();
    run_upload(&outcome.manifest, &uploaders).await.unwrap();

    for branch in Branch::ALL {
        let remote = lake
            .path()
            .join(branch.key())
            .join(outcome.manifest.files_name.get(branch));
        let local = outcome.manifest.files_path.get(branch);
        assert_eq!(
            std::fs::read(&remote).unwrap(),
            std::fs::read(local).unwrap(),
            "{branch} upload differs from local file"
        );
    }
}

#[tokio::test]
async fn test_reupload_from_manifest_overwrites() {
    let output = TempDir::new().unwrap();
    let lake = TempDir::new().unwrap();
    let outcome = run_generate(&generate_args(output.path())).unwrap();

    let opts = UploadOpts {
        local_target: Some(lake.path().to_path_buf()),
        ..Default::default()
    };
    let uploaders = build_uploaders(&opts).unwrap();
    let manifest = Manifest::from_file(&outcome.manifest_path).unwrap();

    run_upload(&manifest, &uploaders).await.unwrap();
    run_upload(&manifest, &uploaders).await.unwrap();

    let north = lake
        .path()
        .join("north")
        .join(manifest.files_name.get(Branch::North));
    assert_eq!(
        std::fs::read(north).unwrap(),
        std::fs::read(manifest.files_path.get(Branch::North)).unwrap()
    );
}

#[tokio::test]
async fn test_upload_fails_on_missing_source_file() {
    let output = TempDir::new().unwrap();
    let lake = TempDir::new().unwrap();
    let outcome = run_generate(&generate_args(output.path())).unwrap();
    std::fs::remove_file(outcome.manifest.files_path.get(Branch::South)).unwrap();

    let opts = UploadOpts {
        local_target: Some(lake.path().to_path_buf()),
        ..Default::default()
    };
    let uploaders = build_uploaders(&opts).unwrap();
    let err = run_upload(&outcome.manifest, &uploaders)
        .await
        .unwrap_err();

    assert!(format!("{err:#}").contains("south"));
    // North went first and succeeded; West was never attempted.
    assert!(lake.path().join("north").exists());
    assert!(!lake.path().join("west").exists());
}
