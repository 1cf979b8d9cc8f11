//! Object store integration tests.
//!
//! These tests talk to a real S3-compatible store and are skipped unless the
//! `VBOOST_STORE_*` environment variables are set. Run with:
//! `cargo test --test integration -- --ignored`

use std::io::Write;

use tempfile::NamedTempFile;

use vboost_storage::BlobClient;

/// Test store connectivity.
#[tokio::test]
#[ignore = "requires object store credentials"]
async fn test_store_connectivity() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let client = BlobClient::from_env()?;
    client.check_connectivity().await?;

    println!("Store connectivity check passed");
    Ok(())
}

/// Test file upload and the public URL shape.
#[tokio::test]
#[ignore = "requires object store credentials"]
async fn test_upload_file() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let client = BlobClient::from_env()?;

    let mut temp_file = NamedTempFile::new()?;
    temp_file.write_all(b"integration test content")?;

    let artifact = client
        .upload_file(
            temp_file.path(),
            "integration/vboost-test.bin",
            "application/octet-stream",
        )
        .await?;

    assert!(artifact.url.contains(client.container()));
    assert!(artifact.url.ends_with("integration/vboost-test.bin"));

    println!("Uploaded to {}", artifact.url);
    Ok(())
}

/// Overwrite semantics: publishing the same name twice must succeed.
#[tokio::test]
#[ignore = "requires object store credentials"]
async fn test_upload_overwrites_on_collision() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let client = BlobClient::from_env()?;

    let first = client
        .upload_bytes(
            b"first".to_vec(),
            "integration/vboost-overwrite.bin",
            "application/octet-stream",
        )
        .await?;
    let second = client
        .upload_bytes(
            b"second".to_vec(),
            "integration/vboost-overwrite.bin",
            "application/octet-stream",
        )
        .await?;

    assert_eq!(first.url, second.url);
    Ok(())
}
