//! Loads movies from a JSON array into the `movies` table.
//!
//! ```text
//! seed_movies --file movies.json [--truncate]
//! ```

use std::{env, fs, path::PathBuf};

use chrono::NaiveDate;
use clap::Parser;
use migration::{Migrator, MigratorTrait};
use sea_orm::{
    sea_query::{Alias, Query},
    ConnectionTrait, Database, TransactionTrait,
};
use serde::Deserialize;
use validator::Validate;

#[derive(Parser, Debug)]
#[command(name = "seed_movies", about = "Seed the movie catalog from a JSON file")]
struct Args {
    /// JSON file holding an array of movies
    #[arg(short, long)]
    file: PathBuf,

    /// Delete existing movies before inserting
    #[arg(long)]
    truncate: bool,
}

#[derive(Debug, Deserialize, Validate)]
struct MovieSeed {
    #[validate(length(min = 1))]
    name: String,
    date: NaiveDate,
    score: f64,
    genre: String,
    overview: String,
    crew: String,
    orig_title: String,
    status: String,
    orig_lang: String,
    #[validate(range(min = 0.0))]
    budget: f64,
    #[validate(range(min = 0.0))]
    revenue: f64,
    country: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    let args = Args::parse();
    let database_url = env::var("DATABASE_URL").map_err(|_| "DATABASE_URL must be set")?;

    let raw = fs::read_to_string(&args.file)?;
    let movies: Vec<MovieSeed> = serde_json::from_str(&raw)?;
    for (i, movie) in movies.iter().enumerate() {
        movie
            .validate()
            .map_err(|e| format!("movie #{i} ({:?}) is invalid: {e}", movie.name))?;
    }

    let db = Database::connect(database_url).await?;
    Migrator::up(&db, None).await?;

    let backend = db.get_database_backend();
    let txn = db.begin().await?;

    if args.truncate {
        let delete = Query::delete().from_table(Alias::new("movies")).to_owned();
        txn.execute(backend.build(&delete)).await?;
        println!("Removed existing movies");
    }

    for movie in &movies {
        let insert = Query::insert()
            .into_table(Alias::new("movies"))
            .columns([
                Alias::new("name"),
                Alias::new("date"),
                Alias::new("score"),
                Alias::new("genre"),
                Alias::new("overview"),
                Alias::new("crew"),
                Alias::new("orig_title"),
                Alias::new("status"),
                Alias::new("orig_lang"),
                Alias::new("budget"),
                Alias::new("revenue"),
                Alias::new("country"),
            ])
            .values([
                movie.name.clone().into(),
                movie.date.into(),
                movie.score.into(),
                movie.genre.clone().into(),
                movie.overview.clone().into(),
                movie.crew.clone().into(),
                movie.orig_title.clone().into(),
                movie.status.clone().into(),
                movie.orig_lang.clone().into(),
                movie.budget.into(),
                movie.revenue.into(),
                movie.country.clone().into(),
            ])?
            .to_owned();
        txn.execute(backend.build(&insert)).await?;
    }

    txn.commit().await?;
    println!("Seeded {} movies from {}", movies.len(), args.file.display());
    Ok(())
}
