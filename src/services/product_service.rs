use sea_orm::{
    ActiveModelTrait, Condition, EntityTrait, QueryFilter, QueryOrder, Set,
    ActiveValue::NotSet,
    sea_query::{BinOper, Expr, Func, SimpleExpr},
};

use crate::{
    dto::products::SearchQuery,
    entity::products::{ActiveModel, Column, Entity as Products, Model as ProductModel},
    error::{AppError, AppResult},
    middleware::auth::AdminSession,
    models::{NewProduct, Product},
    state::AppState,
    uploads::IncomingFile,
};

pub async fn list_products(state: &AppState) -> AppResult<Vec<Product>> {
    Products::find()
        .order_by_asc(Column::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(product_from_entity)
        .collect()
}

/// Filters by name (`query`) and description (`category`); empty filters are ignored.
pub async fn search_products(state: &AppState, query: SearchQuery) -> AppResult<Vec<Product>> {
    let mut condition = Condition::all();

    if let Some(name) = query.query.as_deref().filter(|s| !s.is_empty()) {
        condition = condition.add(contains_ignore_case(Column::Name, name));
    }
    if let Some(description) = query.category.as_deref().filter(|s| !s.is_empty()) {
        condition = condition.add(contains_ignore_case(Column::Description, description));
    }

    Products::find()
        .filter(condition)
        .order_by_asc(Column::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(product_from_entity)
        .collect()
}

pub async fn get_product(state: &AppState, id: i32) -> AppResult<Product> {
    let model = Products::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound("Product"))?;
    product_from_entity(model)
}

pub async fn create_product(
    state: &AppState,
    _admin: &AdminSession,
    draft: NewProduct,
) -> AppResult<Product> {
    let active = ActiveModel {
        id: NotSet,
        name: Set(draft.name),
        description: Set(draft.description),
        price: Set(draft.price),
        image_url: Set(draft.image_url),
        images: Set(encode_images(&draft.images)?),
    };
    let product = active.insert(&state.orm).await?;
    tracing::info!(product_id = product.id, "product created");

    product_from_entity(product)
}

/// Replaces every mutable field of the product.
pub async fn update_product(
    state: &AppState,
    _admin: &AdminSession,
    id: i32,
    draft: NewProduct,
) -> AppResult<Product> {
    let existing = Products::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound("Product"))?;

    let mut active: ActiveModel = existing.into();
    active.name = Set(draft.name);
    active.description = Set(draft.description);
    active.price = Set(draft.price);
    active.image_url = Set(draft.image_url);
    active.images = Set(encode_images(&draft.images)?);

    let product = active.update(&state.orm).await?;
    tracing::info!(product_id = product.id, "product updated");

    product_from_entity(product)
}

pub async fn delete_product(state: &AppState, _admin: &AdminSession, id: i32) -> AppResult<()> {
    let result = Products::delete_by_id(id).exec(&state.orm).await?;

    if result.rows_affected == 0 {
        return Err(AppError::NotFound("Product"));
    }
    tracing::info!(product_id = id, "product deleted");

    Ok(())
}

/// Stores `files`, then inserts the product pointing at them.
///
/// The two steps are not atomic: if the insert fails the stored files stay
/// unreferenced until the orphan sweep collects them.
pub async fn create_product_with_images(
    state: &AppState,
    admin: &AdminSession,
    mut draft: NewProduct,
    files: Vec<IncomingFile>,
) -> AppResult<Product> {
    let paths = state.images.ingest(files).await?;

    draft.image_url = paths.first().cloned().unwrap_or_default();
    draft.images = paths.clone();

    create_product(state, admin, draft).await.inspect_err(|err| {
        tracing::warn!(
            error = %err,
            images = ?paths,
            "product insert failed after upload, images left orphaned"
        );
    })
}

/// `LOWER(column) LIKE LOWER('%needle%')`; both sides go through the same SQL function
/// so the backend's case folding applies to the column and the needle alike.
fn contains_ignore_case(column: Column, needle: &str) -> SimpleExpr {
    Expr::expr(Func::lower(Expr::col(column))).binary(
        BinOper::Like,
        Func::lower(Expr::val(format!("%{needle}%"))),
    )
}

fn encode_images(images: &[String]) -> AppResult<Option<String>> {
    if images.is_empty() {
        return Ok(None);
    }
    Ok(Some(serde_json::to_string(images)?))
}

pub(crate) fn decode_images(raw: Option<&str>) -> AppResult<Vec<String>> {
    match raw {
        Some(raw) if !raw.trim().is_empty() => Ok(serde_json::from_str(raw)?),
        _ => Ok(Vec::new()),
    }
}

fn product_from_entity(model: ProductModel) -> AppResult<Product> {
    let images = decode_images(model.images.as_deref())?;
    Ok(Product {
        id: model.id,
        name: model.name,
        description: model.description,
        price: model.price,
        image_url: model.image_url,
        images,
    })
}
