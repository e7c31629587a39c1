//! Applies the `gasto` schema outside of the server.
//!
//! The target is read from `GASTOS_DATABASE_URL`, then `DATABASE_URL`, and
//! defaults to the same SQLite file the server uses.

use sea_orm::Database;
use sea_orm_migration::prelude::*;

const DEFAULT_DATABASE_URL: &str = "sqlite:gastos.db?mode=rwc";

const USAGE: &str = "\
Usage: migration [up|down|fresh|status]

Environment:
  GASTOS_DATABASE_URL  target database, e.g. sqlite:gastos.db?mode=rwc
                       or mysql://root@localhost/gastos
  DATABASE_URL         fallback when GASTOS_DATABASE_URL is unset";

fn database_url() -> String {
    ["GASTOS_DATABASE_URL", "DATABASE_URL"]
        .iter()
        .find_map(|key| std::env::var(key).ok())
        .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let cmd = std::env::args().nth(1).unwrap_or_else(|| "up".to_string());
    if !matches!(cmd.as_str(), "up" | "down" | "fresh" | "status") {
        eprintln!("{USAGE}");
        std::process::exit(2);
    }

    let url = database_url();
    let db = Database::connect(&url).await?;

    match cmd.as_str() {
        "up" => migration::Migrator::up(&db, None).await?,
        "down" => migration::Migrator::down(&db, Some(1)).await?,
        "fresh" => migration::Migrator::fresh(&db).await?,
        _ => migration::Migrator::status(&db).await?,
    }

    println!("gasto schema: `{cmd}` done");
    Ok(())
}
