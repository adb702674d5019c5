//! End-to-end seed workflow over real `SQLite` collaborators.

use std::path::PathBuf;

use seedpress_core::{ContentModel, SeedBundle, SeedOutcome, SeedRunner};
use seedpress_db::{SqliteContentStore, build_collaborators, setup_test_database};

/// Write a bundle with two authors, three posts (two author references, one
/// without), SEO on the first post, and the referenced media files.
fn write_bundle(root: &std::path::Path) -> PathBuf {
    let uploads = root.join("uploads");
    std::fs::create_dir_all(&uploads).unwrap();
    std::fs::write(uploads.join("ada.png"), b"avatar-bytes").unwrap();
    std::fs::write(uploads.join("cover.jpg"), b"cover-bytes").unwrap();
    std::fs::write(uploads.join("og.png"), b"og-bytes").unwrap();

    std::fs::write(
        root.join("data.json"),
        r#"{
            "authors": [
                {"name": "Ada", "email": "ada@example.com", "avatar": "ada.png"},
                {"name": "Brian", "email": "brian@example.com"}
            ],
            "posts": [
                {
                    "title": "One", "slug": "one", "excerpt": "e", "content": "c",
                    "author": {"id": 1},
                    "coverImage": "cover.jpg",
                    "seo": {
                        "metaTitle": "One",
                        "metaDescription": "First post",
                        "canonicalURL": "https://example.com/one",
                        "metaImage": "og.png",
                        "metaSocial": [
                            {"socialNetwork": "Twitter", "title": "One", "description": "d", "image": "og.png"}
                        ]
                    }
                },
                {"title": "Two", "slug": "two", "excerpt": "e", "content": "c", "author": {"id": 2}},
                {"title": "Three", "slug": "three", "excerpt": "e", "content": "c"}
            ]
        }"#,
    )
    .unwrap();

    root.to_path_buf()
}

#[tokio::test]
async fn seeding_twice_imports_once() {
    let dir = tempfile::tempdir().unwrap();
    let bundle_root = write_bundle(dir.path());
    let media_dir = dir.path().join("managed-uploads");

    let pool = setup_test_database().await.unwrap();
    let collaborators = build_collaborators(pool.clone(), "test", media_dir);
    let bundle = SeedBundle::load(&bundle_root).unwrap();
    let runner = SeedRunner::new(&collaborators, bundle.uploads_dir());

    assert_eq!(runner.run(&bundle).await.unwrap(), SeedOutcome::Imported);
    assert_eq!(
        runner.run(&bundle).await.unwrap(),
        SeedOutcome::AlreadySeeded
    );

    let content = SqliteContentStore::new(pool.clone());
    assert_eq!(content.count(ContentModel::Author).await.unwrap(), 2);
    assert_eq!(content.count(ContentModel::Post).await.unwrap(), 3);

    // og.png is referenced twice in the first post's SEO but uploaded once.
    let (media_count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM media_files")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(media_count, 3);

    // Permissions were created exactly once thanks to the gate.
    let (permission_count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM permissions")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(permission_count, 4);
}

#[tokio::test]
async fn posts_carry_author_connections_where_mapped() {
    let dir = tempfile::tempdir().unwrap();
    let bundle_root = write_bundle(dir.path());
    let media_dir = dir.path().join("managed-uploads");

    let pool = setup_test_database().await.unwrap();
    let collaborators = build_collaborators(pool.clone(), "test", media_dir);
    let bundle = SeedBundle::load(&bundle_root).unwrap();
    let runner = SeedRunner::new(&collaborators, bundle.uploads_dir());

    assert_eq!(runner.run(&bundle).await.unwrap(), SeedOutcome::Imported);

    let rows: Vec<(String,)> = sqlx::query_as("SELECT data FROM entries WHERE model = ?")
        .bind(ContentModel::Post.uid())
        .fetch_all(&pool)
        .await
        .unwrap();

    let linked = rows
        .iter()
        .filter(|(data,)| {
            let value: serde_json::Value = serde_json::from_str(data).unwrap();
            value.get("author").is_some()
        })
        .count();
    assert_eq!(linked, 2);
}

#[tokio::test]
async fn environments_are_seeded_independently() {
    let dir = tempfile::tempdir().unwrap();
    let bundle_root = write_bundle(dir.path());

    let pool = setup_test_database().await.unwrap();
    let bundle = SeedBundle::load(&bundle_root).unwrap();

    let dev = build_collaborators(pool.clone(), "development", dir.path().join("dev-uploads"));
    let dev_runner = SeedRunner::new(&dev, bundle.uploads_dir());
    assert_eq!(dev_runner.run(&bundle).await.unwrap(), SeedOutcome::Imported);

    // A different environment namespace has its own setup flag. The media
    // library dedupes by name, so assets are shared but entries double up.
    let prod = build_collaborators(pool.clone(), "production", dir.path().join("prod-uploads"));
    let prod_runner = SeedRunner::new(&prod, bundle.uploads_dir());
    assert_eq!(
        prod_runner.run(&bundle).await.unwrap(),
        SeedOutcome::Imported
    );

    let content = SqliteContentStore::new(pool.clone());
    assert_eq!(content.count(ContentModel::Author).await.unwrap(), 4);

    let (media_count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM media_files")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(media_count, 3);
}
