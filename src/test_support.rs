//! Shared fixtures: an in-memory SQLite database with the real schema.

use chrono::NaiveDate;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ActiveModelTrait, ConnectOptions, Database, DatabaseConnection, Set};

use crate::entities::movie;

pub async fn setup_db() -> DatabaseConnection {
    // A single connection: every new in-memory connection is a fresh database.
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1).min_connections(1).sqlx_logging(false);

    let db = Database::connect(opts).await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    db
}

/// Deterministic movie number `n` (1-based); `id` is left for the database.
pub fn sample_movie(n: i32) -> movie::Model {
    movie::Model {
        id: 0,
        name: format!("Movie {n:02}"),
        date: NaiveDate::from_ymd_opt(2000 + n, 1 + (n % 12) as u32, 15).unwrap(),
        score: 50.0 + n as f64,
        genre: "Drama".to_string(),
        overview: format!("Overview of movie {n}"),
        crew: "Director, Actor".to_string(),
        orig_title: format!("Original {n}"),
        status: "Released".to_string(),
        orig_lang: "English".to_string(),
        budget: 1_000_000.0 * n as f64,
        revenue: 2_500_000.5 * n as f64,
        country: "US".to_string(),
    }
}

/// Inserts `count` movies; they receive ids `1..=count`.
pub async fn seed(db: &DatabaseConnection, count: i32) {
    for n in 1..=count {
        let m = sample_movie(n);
        movie::ActiveModel {
            name: Set(m.name),
            date: Set(m.date),
            score: Set(m.score),
            genre: Set(m.genre),
            overview: Set(m.overview),
            crew: Set(m.crew),
            orig_title: Set(m.orig_title),
            status: Set(m.status),
            orig_lang: Set(m.orig_lang),
            budget: Set(m.budget),
            revenue: Set(m.revenue),
            country: Set(m.country),
            ..Default::default()
        }
        .insert(db)
        .await
        .unwrap();
    }
}
