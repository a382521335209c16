use utoipa::{
    Modify, OpenApi,
    openapi::{
        self,
        OpenApi as OpenApiSpec,
        security::{ApiKey, ApiKeyValue, SecurityScheme},
    },
};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        cart::{AddToCartRequest, AddToCartResponse},
        orders::{CheckoutRequest, CheckoutResponse, CreateOrderRequest, OrderList},
        products::{ProductList, ProductPayload},
        uploads::{ProductWithImagesForm, UploadImagesForm, UploadedImages},
    },
    models::{CartLine, Customer, Order, Product},
    response::MessageResponse,
    routes::{admin, cart, health, orders, products, uploads},
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "admin_session",
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new("admin_session"))),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::welcome,
        health::health_check,
        products::list_products,
        products::search_products,
        products::get_product,
        products::create_product,
        products::update_product,
        products::delete_product,
        cart::add_to_cart,
        orders::checkout,
        orders::create_order,
        admin::list_all_orders,
        uploads::upload_images,
        uploads::create_product_with_images
    ),
    components(
        schemas(
            Product,
            Order,
            CartLine,
            Customer,
            ProductPayload,
            ProductList,
            AddToCartRequest,
            AddToCartResponse,
            CheckoutRequest,
            CheckoutResponse,
            CreateOrderRequest,
            OrderList,
            UploadedImages,
            UploadImagesForm,
            ProductWithImagesForm,
            MessageResponse
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Service status endpoints"),
        (name = "Products", description = "Product endpoints"),
        (name = "Cart", description = "Cart endpoints"),
        (name = "Orders", description = "Order endpoints"),
        (name = "Admin", description = "Admin endpoints"),
        (name = "Uploads", description = "Image upload endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
