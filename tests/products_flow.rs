mod common;

use common::{admin, payload, seed_product, setup_state};
use storefront_api::{
    dto::{cart::AddToCartRequest, products::SearchQuery},
    error::AppError,
    services::{cart_service, product_service},
};

#[tokio::test]
async fn created_product_reads_back_identically() -> anyhow::Result<()> {
    let (state, _dir) = setup_state().await?;

    let mut body = payload("Linen Shirt", "Light summer shirt", 29.99);
    body.image_url = "/uploads/front.png".into();
    body.images = Some(vec!["/uploads/front.png".into(), "/uploads/back.png".into()]);
    let created =
        product_service::create_product(&state, &admin(&state), body.into_draft()?).await?;

    let fetched = product_service::get_product(&state, created.id).await?;
    assert_eq!(fetched, created);
    assert_eq!(fetched.images.len(), 2);
    Ok(())
}

#[tokio::test]
async fn description_defaults_to_empty() -> anyhow::Result<()> {
    let (state, _dir) = setup_state().await?;

    let mut body = payload("Scarf", "", 5.0);
    body.description = None;
    let created =
        product_service::create_product(&state, &admin(&state), body.into_draft()?).await?;

    assert_eq!(created.description, "");
    assert!(created.images.is_empty());
    Ok(())
}

#[tokio::test]
async fn ids_are_unique_across_products() -> anyhow::Result<()> {
    let (state, _dir) = setup_state().await?;

    let a = seed_product(&state, "A", "", 1.0).await?;
    let b = seed_product(&state, "B", "", 2.0).await?;
    assert_ne!(a.id, b.id);
    Ok(())
}

#[tokio::test]
async fn deleted_product_is_not_found() -> anyhow::Result<()> {
    let (state, _dir) = setup_state().await?;
    let product = seed_product(&state, "Cap", "Baseball cap", 10.0).await?;

    product_service::delete_product(&state, &admin(&state), product.id).await?;

    let err = product_service::get_product(&state, product.id)
        .await
        .expect_err("deleted product must be gone");
    assert!(matches!(err, AppError::NotFound(_)));

    let err = product_service::delete_product(&state, &admin(&state), product.id)
        .await
        .expect_err("second delete must fail");
    assert!(matches!(err, AppError::NotFound(_)));
    Ok(())
}

#[tokio::test]
async fn update_replaces_every_field() -> anyhow::Result<()> {
    let (state, _dir) = setup_state().await?;
    let mut body = payload("Old", "old description", 3.0);
    body.images = Some(vec!["/uploads/a.png".into()]);
    let product =
        product_service::create_product(&state, &admin(&state), body.into_draft()?).await?;

    let mut replacement = payload("New", "new description", 4.5);
    replacement.image_url = "/uploads/b.png".into();
    let updated = product_service::update_product(
        &state,
        &admin(&state),
        product.id,
        replacement.into_draft()?,
    )
    .await?;

    assert_eq!(updated.id, product.id);
    assert_eq!(updated.name, "New");
    assert_eq!(updated.description, "new description");
    assert_eq!(updated.price, 4.5);
    assert_eq!(updated.image_url, "/uploads/b.png");
    assert!(updated.images.is_empty());
    assert_eq!(product_service::get_product(&state, product.id).await?, updated);
    Ok(())
}

#[tokio::test]
async fn update_of_missing_product_is_not_found() -> anyhow::Result<()> {
    let (state, _dir) = setup_state().await?;

    let err = product_service::update_product(
        &state,
        &admin(&state),
        4242,
        payload("Ghost", "", 1.0).into_draft()?,
    )
    .await
    .expect_err("missing product");
    assert!(matches!(err, AppError::NotFound(_)));
    Ok(())
}

#[tokio::test]
async fn negative_price_is_rejected_before_storage() -> anyhow::Result<()> {
    let (state, _dir) = setup_state().await?;

    let err = payload("Refund", "", -1.0)
        .into_draft()
        .expect_err("negative price");
    assert!(matches!(err, AppError::BadRequest(_)));
    assert!(product_service::list_products(&state).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn search_without_filters_matches_list() -> anyhow::Result<()> {
    let (state, _dir) = setup_state().await?;
    seed_product(&state, "T-shirt", "Cotton tee", 12.0).await?;
    seed_product(&state, "Jeans", "Blue denim", 40.0).await?;

    let all = product_service::list_products(&state).await?;
    let unfiltered = product_service::search_products(&state, SearchQuery::default()).await?;
    assert_eq!(unfiltered, all);

    let empty_filters = product_service::search_products(
        &state,
        SearchQuery {
            query: Some(String::new()),
            category: Some(String::new()),
        },
    )
    .await?;
    assert_eq!(empty_filters, all);
    Ok(())
}

#[tokio::test]
async fn search_is_case_insensitive_and_combines_filters() -> anyhow::Result<()> {
    let (state, _dir) = setup_state().await?;
    let tee = seed_product(&state, "T-shirt", "Cotton tee", 12.0).await?;
    let polo = seed_product(&state, "Polo shirt", "Pique knit", 25.0).await?;
    seed_product(&state, "Jeans", "Blue denim", 40.0).await?;

    let by_name = product_service::search_products(
        &state,
        SearchQuery {
            query: Some("SHIRT".into()),
            category: None,
        },
    )
    .await?;
    assert_eq!(by_name, vec![tee.clone(), polo]);

    let both = product_service::search_products(
        &state,
        SearchQuery {
            query: Some("shirt".into()),
            category: Some("COTTON".into()),
        },
    )
    .await?;
    assert_eq!(both, vec![tee]);

    let none = product_service::search_products(
        &state,
        SearchQuery {
            query: Some("jeans".into()),
            category: Some("cotton".into()),
        },
    )
    .await?;
    assert!(none.is_empty());
    Ok(())
}

#[tokio::test]
async fn search_matches_non_ascii_needle_typed_as_stored() -> anyhow::Result<()> {
    let (state, _dir) = setup_state().await?;
    let coffee = seed_product(&state, "CAFÉ NOIR", "Dark roast", 9.0).await?;
    seed_product(&state, "Tea", "Green", 5.0).await?;

    for needle in ["CAFÉ", "cafÉ n"] {
        let hits = product_service::search_products(
            &state,
            SearchQuery {
                query: Some(needle.into()),
                category: None,
            },
        )
        .await?;
        assert_eq!(hits, vec![coffee.clone()], "needle {needle:?}");
    }
    Ok(())
}

#[tokio::test]
async fn add_to_cart_echoes_product_and_quantity() -> anyhow::Result<()> {
    let (state, _dir) = setup_state().await?;
    let product = seed_product(&state, "Socks", "Wool socks", 6.0).await?;

    let resp = cart_service::add_to_cart(
        &state,
        AddToCartRequest {
            product_id: product.id,
            quantity: 3,
        },
    )
    .await?;
    assert_eq!(resp.product, product);
    assert_eq!(resp.quantity, 3);

    let missing = cart_service::add_to_cart(
        &state,
        AddToCartRequest {
            product_id: product.id + 100,
            quantity: 1,
        },
    )
    .await
    .expect_err("missing product");
    assert!(matches!(missing, AppError::NotFound(_)));

    let zero = cart_service::add_to_cart(
        &state,
        AddToCartRequest {
            product_id: product.id,
            quantity: 0,
        },
    )
    .await
    .expect_err("zero quantity");
    assert!(matches!(zero, AppError::BadRequest(_)));
    Ok(())
}
