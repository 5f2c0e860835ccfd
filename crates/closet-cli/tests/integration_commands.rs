//! Integration tests for the closet commands against a real directory.
//!
//! Capture is covered in closet-fs; these exercise the handlers that need no
//! remote services.

use closet_cli::{CliError, bootstrap_with, handlers};
use closet_core::ClosetDirSource;
use closet_fs::FsEntryStore;
use tempfile::TempDir;

const TOP: &str = "Top_Striped-Tee_dark_1700000000000.png";
const BOTTOM: &str = "Bottom_Chinos_light_1700000000001.png";

fn seeded() -> TempDir {
    let temp = TempDir::new().expect("tempdir");
    std::fs::write(temp.path().join(TOP), b"top-png").unwrap();
    std::fs::write(temp.path().join(BOTTOM), b"bottom-png").unwrap();
    temp
}

#[tokio::test]
async fn list_reads_existing_entries() {
    let temp = seeded();
    let ctx = bootstrap_with(FsEntryStore::new(temp.path()), ClosetDirSource::Explicit);

    handlers::list::execute(&ctx, false).await.unwrap();
    handlers::list::execute(&ctx, true).await.unwrap();

    let listing = ctx.closet().list().await.unwrap();
    assert_eq!(listing.tops[0].entry_name, TOP);
    assert_eq!(listing.bottoms[0].entry_name, BOTTOM);
}

#[tokio::test]
async fn forced_remove_deletes_file() {
    let temp = seeded();
    let ctx = bootstrap_with(FsEntryStore::new(temp.path()), ClosetDirSource::Explicit);

    handlers::remove::execute(&ctx, TOP, true).await.unwrap();

    assert!(!temp.path().join(TOP).exists());
    assert!(temp.path().join(BOTTOM).exists());
    assert!(ctx.closet().list().await.unwrap().tops.is_empty());
}

#[tokio::test]
async fn remove_unknown_entry_is_reported_not_failed() {
    let temp = seeded();
    let ctx = bootstrap_with(FsEntryStore::new(temp.path()), ClosetDirSource::Explicit);

    handlers::remove::execute(&ctx, "Top_Ghost_dark_1.png", true)
        .await
        .unwrap();
    assert_eq!(ctx.closet().list().await.unwrap().len(), 2);
}

#[tokio::test]
async fn export_copies_asset_bytes() {
    let temp = seeded();
    let out = TempDir::new().unwrap();
    let ctx = bootstrap_with(FsEntryStore::new(temp.path()), ClosetDirSource::Explicit);

    handlers::export::execute(&ctx, BOTTOM, out.path())
        .await
        .unwrap();
    assert_eq!(std::fs::read(out.path().join(BOTTOM)).unwrap(), b"bottom-png");

    let err = handlers::export::execute(&ctx, "Bottom_Ghost_light_2.png", out.path())
        .await
        .unwrap_err();
    let cli_err = err.downcast_ref::<CliError>().expect("CliError");
    assert_eq!(cli_err.exit_code(), 66);
}
