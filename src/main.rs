use dotenvy::dotenv;
use meal_planner::{
    config::{database, meals},
    errors::Result,
    menu::{Menu, MenuData},
};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 1. Initialize tracing on stderr so it never interleaves with the menu on stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    // 2. Load .env file, env vars can be set externally
    dotenv().ok();

    // 3. Open the database and make sure the schema exists
    let database_url = database::get_database_url();
    let db = database::create_connection(&database_url)
        .await
        .inspect_err(|e| error!("Failed to open database {}: {}", database_url, e))?;

    // 4. Seed the catalog from meals.toml, if present
    let data = MenuData::new(db);
    let seed = meals::load_default_config()?;
    meals::seed_catalog(&data.catalog, &seed)
        .await
        .inspect_err(|e| error!("Failed to seed catalog: {}", e))?;

    // 5. Run the menu on the terminal
    info!("Starting menu");
    let stdin = io::stdin();
    let mut menu = Menu::new(stdin.lock(), io::stdout(), data);
    menu.run().await
}
