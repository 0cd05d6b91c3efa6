mod common;

use shortyqr::error::AppError;
use std::collections::HashSet;

#[tokio::test]
async fn test_create_then_resolve_round_trip() {
    let pool = common::memory_pool().await;
    let service = common::create_test_service(pool);

    let created = service
        .create_link("https://example.com/path?q=1".to_string(), None)
        .await
        .unwrap();

    assert_eq!(created.link.clicks, 0);
    assert_eq!(created.link.slug.len(), 6);
    assert!(created.qr_png.starts_with(b"\x89PNG"));

    let resolved = service.resolve(&created.link.slug).await.unwrap();

    assert_eq!(resolved.url, "https://example.com/path?q=1");
    assert_eq!(resolved.clicks, 1);
}

#[tokio::test]
async fn test_custom_slug_is_kept_verbatim() {
    let pool = common::memory_pool().await;
    let service = common::create_test_service(pool);

    let created = service
        .create_link(
            "https://example.com".to_string(),
            Some("Promo2025".to_string()),
        )
        .await
        .unwrap();

    assert_eq!(created.link.slug, "Promo2025");
    assert_eq!(service.get_link("Promo2025").await.unwrap().clicks, 0);
}

#[tokio::test]
async fn test_custom_slug_conflict() {
    let pool = common::memory_pool().await;
    let service = common::create_test_service(pool);

    service
        .create_link("https://a.example".to_string(), Some("taken".to_string()))
        .await
        .unwrap();

    let result = service
        .create_link("https://b.example".to_string(), Some("taken".to_string()))
        .await;

    match result {
        Err(AppError::Conflict { message, .. }) => assert_eq!(message, "Slug already exists"),
        other => panic!("expected conflict, got {:?}", other),
    }

    // The original mapping is untouched.
    assert_eq!(
        service.get_link("taken").await.unwrap().url,
        "https://a.example"
    );
}

#[tokio::test]
async fn test_invalid_url_is_rejected_before_storage() {
    let pool = common::memory_pool().await;
    let service = common::create_test_service(pool);

    let result = service
        .create_link("ftp://example.com".to_string(), None)
        .await;

    assert!(matches!(result, Err(AppError::Validation { .. })));
    assert_eq!(service.count_links().await.unwrap(), 0);
}

#[tokio::test]
async fn test_generated_slugs_are_unique() {
    let pool = common::memory_pool().await;
    let service = common::create_test_service(pool);

    let mut slugs = HashSet::new();
    for i in 0..50 {
        let created = service
            .create_link(format!("https://example.com/{}", i), None)
            .await
            .unwrap();
        assert!(slugs.insert(created.link.slug));
    }

    assert_eq!(service.count_links().await.unwrap(), 50);
}

#[tokio::test]
async fn test_resolve_unknown_slug() {
    let pool = common::memory_pool().await;
    let service = common::create_test_service(pool);

    let result = service.resolve("nothere").await;

    assert!(matches!(result, Err(AppError::NotFound { .. })));
}

#[tokio::test]
async fn test_delete_then_resolve_is_not_found() {
    let pool = common::memory_pool().await;
    let service = common::create_test_service(pool);

    let created = service
        .create_link("https://example.com".to_string(), Some("bye".to_string()))
        .await
        .unwrap();

    service.delete_link(created.link.id).await.unwrap();

    assert!(matches!(
        service.resolve("bye").await,
        Err(AppError::NotFound { .. })
    ));
    assert!(matches!(
        service.delete_link(created.link.id).await,
        Err(AppError::NotFound { .. })
    ));

    // Slug is free again.
    let again = service
        .create_link("https://other.example".to_string(), Some("bye".to_string()))
        .await
        .unwrap();
    assert_ne!(again.link.id, created.link.id);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_identical_custom_slugs_have_one_winner() {
    let (pool, _dir) = common::file_pool().await;
    let service = common::create_test_service(pool);

    let tasks: Vec<_> = (0..16)
        .map(|i| {
            let service = service.clone();
            tokio::spawn(async move {
                service
                    .create_link(
                        format!("https://example.com/{}", i),
                        Some("launch".to_string()),
                    )
                    .await
            })
        })
        .collect();

    let mut created = 0;
    let mut conflicts = 0;
    for task in tasks {
        match task.await.unwrap() {
            Ok(_) => created += 1,
            Err(AppError::Conflict { .. }) => conflicts += 1,
            Err(e) => panic!("unexpected error: {:?}", e),
        }
    }

    assert_eq!(created, 1);
    assert_eq!(conflicts, 15);
    assert_eq!(service.count_links().await.unwrap(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_resolutions_count_every_visit() {
    let (pool, _dir) = common::file_pool().await;
    let service = common::create_test_service(pool.clone());

    service
        .create_link("https://example.com".to_string(), Some("busy".to_string()))
        .await
        .unwrap();

    let tasks: Vec<_> = (0..40)
        .map(|_| {
            let service = service.clone();
            tokio::spawn(async move { service.resolve("busy").await })
        })
        .collect();

    for task in tasks {
        assert_eq!(task.await.unwrap().unwrap().url, "https://example.com");
    }

    assert_eq!(common::clicks_of(&pool, "busy").await, 40);
}

#[tokio::test]
async fn test_list_links_pages() {
    let pool = common::memory_pool().await;
    let service = common::create_test_service(pool);

    for slug in ["one", "two", "three"] {
        service
            .create_link("https://example.com".to_string(), Some(slug.to_string()))
            .await
            .unwrap();
    }

    let page = service.list_links(2, 0).await.unwrap();

    assert_eq!(page.total, 3);
    assert_eq!(
        page.items.iter().map(|l| l.slug.as_str()).collect::<Vec<_>>(),
        vec!["three", "two"]
    );
}
