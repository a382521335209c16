use sea_orm::{ActiveModelTrait, ActiveValue::NotSet, EntityTrait, PaginatorTrait, Set};
use storefront_api::{
    config::AppConfig,
    db::{create_orm_conn, run_migrations},
    entity::products::{ActiveModel as ProductActive, Entity as Products},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let orm = create_orm_conn(&config.database_url).await?;
    // Ensure migrations are applied.
    run_migrations(&orm).await?;

    let existing = Products::find().count(&orm).await?;
    if existing > 0 {
        println!("Products table already holds {existing} rows, nothing to seed");
        return Ok(());
    }

    let products = vec![
        ("Denim Jacket", "Vintage washed denim, unisex", 45.0),
        ("Striped T-shirt", "Organic cotton, navy and white", 12.5),
        ("Wool Beanie", "Hand knitted, one size", 9.9),
        ("Canvas Tote", "Heavy canvas bag with inner pocket", 15.0),
    ];

    for (name, desc, price) in products {
        ProductActive {
            id: NotSet,
            name: Set(name.to_string()),
            description: Set(desc.to_string()),
            price: Set(price),
            image_url: Set(String::new()),
            images: Set(None),
        }
        .insert(&orm)
        .await?;
    }

    println!("Seeded products");
    Ok(())
}
