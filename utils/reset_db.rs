use sea_orm::{ConnectionTrait, Database, Statement};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    let database_url = env::var("DATABASE_URL").map_err(|_| "DATABASE_URL must be set")?;

    let db = Database::connect(database_url).await?;
    let backend = db.get_database_backend();

    for table in ["movies", "seaql_migrations"] {
        db.execute(Statement::from_string(
            backend,
            format!("DROP TABLE IF EXISTS {table};"),
        ))
        .await?;
        println!("Dropped table {table}");
    }

    println!("Database reset successfully");
    Ok(())
}
