//! Database command handlers.

use std::path::Path;

async fn connect() -> anyhow::Result<sqlx::PgPool> {
    let config = vendora_core::load_app_config()?;
    let pool_config = vendora_db::PoolConfig::from_app_config(&config);
    let pool = vendora_db::connect_pool(&config.database_url, pool_config).await?;
    Ok(pool)
}

pub(crate) async fn run_migrate() -> anyhow::Result<()> {
    let pool = connect().await?;
    let applied = vendora_db::run_migrations(&pool).await?;
    println!("applied {applied} migration(s)");
    Ok(())
}

/// Load a YAML vendor catalog and upsert it.
///
/// The file is fully parsed and validated before the database is touched.
pub(crate) async fn run_seed(file: &Path) -> anyhow::Result<()> {
    let vendors = vendora_core::load_vendor_catalog(file)?;
    tracing::info!(path = %file.display(), vendors = vendors.len(), "loaded vendor catalog");

    let rows: Vec<vendora_db::NewVendor> =
        vendors.iter().map(vendora_db::NewVendor::from).collect();
    let pool = connect().await?;
    vendora_db::run_migrations(&pool).await?;
    let (inserted, updated) = vendora_db::upsert_vendors(&pool, &rows).await?;

    println!("seeded {} vendors ({inserted} new, {updated} updated)", rows.len());
    Ok(())
}
