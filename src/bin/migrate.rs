use sea_orm_migration::MigratorTrait;
use storefront_api::{
    config::AppConfig,
    db::{create_orm_conn, run_migrations},
    migration::Migrator,
};

/// `migrate [up|down|status]`, defaulting to `up`.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;
    let orm = create_orm_conn(&config.database_url).await?;

    match std::env::args().nth(1).as_deref() {
        None | Some("up") => {
            run_migrations(&orm).await?;
            println!("Migrations applied");
        }
        Some("down") => {
            Migrator::down(&orm, Some(1)).await?;
            println!("Rolled back the latest migration");
        }
        Some("status") => {
            let pending = Migrator::get_pending_migrations(&orm).await?;
            println!("{} pending migration(s)", pending.len());
        }
        Some(other) => anyhow::bail!("unknown command {other:?}, expected up, down or status"),
    }
    Ok(())
}
