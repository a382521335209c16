use storefront_api::{
    config::AppConfig,
    db::create_orm_conn,
    middleware::auth::AdminGate,
    services::upload_service::sweep_orphans,
    state::AppState,
    uploads::ImageIntake,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;
    let state = AppState {
        orm: create_orm_conn(&config.database_url).await?,
        admin_gate: AdminGate::new(config.admin_secret.clone()),
        images: ImageIntake::new(&config.upload_dir),
    };

    let report = sweep_orphans(&state, config.sweep_grace).await?;
    println!(
        "Scanned {} uploads, kept {}, removed {}",
        report.scanned,
        report.kept,
        report.removed.len()
    );
    Ok(())
}
