use axum::{
    extract::{rejection::PathRejection, Path, State},
    response::Json,
};
use chrono::NaiveDate;
use serde::Serialize;

use crate::entities::movie;
use crate::error::{AppError, ErrorResponse};
use crate::pagination::{neighbour_links, paginate, PageQuery};
use crate::routes::AppState;
use crate::services::catalog::MovieCatalog;
use crate::validation::ValidatedQuery;

pub const NO_MOVIES: &str = "No movies found.";
pub const MOVIE_NOT_FOUND: &str = "Movie with the given ID was not found.";

#[derive(Debug, Clone, PartialEq, Serialize, utoipa::ToSchema)]
pub struct MovieDetailResponse {
    pub id: i32,
    pub name: String,
    pub date: NaiveDate,
    pub score: f64,
    pub genre: String,
    pub overview: String,
    pub crew: String,
    pub orig_title: String,
    pub status: String,
    pub orig_lang: String,
    pub budget: f64,
    pub revenue: f64,
    pub country: String,
}

impl From<movie::Model> for MovieDetailResponse {
    fn from(movie: movie::Model) -> Self {
        MovieDetailResponse {
            id: movie.id,
            name: movie.name,
            date: movie.date,
            score: movie.score,
            genre: movie.genre,
            overview: movie.overview,
            crew: movie.crew,
            orig_title: movie.orig_title,
            status: movie.status,
            orig_lang: movie.orig_lang,
            budget: movie.budget,
            revenue: movie.revenue,
            country: movie.country,
        }
    }
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct MovieListResponse {
    pub movies: Vec<MovieDetailResponse>,
    pub prev_page: Option<String>,
    pub next_page: Option<String>,
    pub total_pages: u64,
    pub total_items: u64,
}

impl MovieListResponse {
    pub fn new(
        movies: Vec<movie::Model>,
        page: u64,
        per_page: u64,
        total_items: u64,
        total_pages: u64,
        base_path: &str,
    ) -> Self {
        let (prev_page, next_page) = neighbour_links(base_path, page, per_page, total_pages);
        Self {
            movies: movies.into_iter().map(MovieDetailResponse::from).collect(),
            prev_page,
            next_page,
            total_pages,
            total_items,
        }
    }
}

#[utoipa::path(
    get,
    path = "/movies/",
    params(PageQuery),
    responses(
        (status = 200, description = "One page of movies", body = MovieListResponse),
        (status = 404, description = "No movies on the requested page", body = ErrorResponse),
        (status = 422, description = "Invalid pagination parameters", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Movies"
)]
pub async fn list_movies(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<PageQuery>,
) -> Result<Json<MovieListResponse>, AppError> {
    tracing::debug!(page = query.page, per_page = query.per_page, "List movies request");

    let catalog = MovieCatalog::new(&state.db);
    let total_items = catalog.count().await?;

    let window = paginate(total_items, query.page, query.per_page).map_err(|out| {
        tracing::debug!(page = out.page, total_pages = out.total_pages, "Page out of range");
        AppError::NotFound(NO_MOVIES.to_string())
    })?;
    let movies = catalog.fetch_page(window).await?;

    Ok(Json(MovieListResponse::new(
        movies,
        query.page,
        query.per_page,
        total_items,
        window.total_pages,
        &state.movies_path,
    )))
}

#[utoipa::path(
    get,
    path = "/movies/{movie_id}/",
    params(
        ("movie_id" = i32, Path, description = "Movie ID")
    ),
    responses(
        (status = 200, description = "Movie details", body = MovieDetailResponse),
        (status = 404, description = "Movie not found", body = ErrorResponse),
        (status = 422, description = "Movie ID is not an integer", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Movies"
)]
pub async fn get_movie(
    State(state): State<AppState>,
    movie_id: Result<Path<i32>, PathRejection>,
) -> Result<Json<MovieDetailResponse>, AppError> {
    let Path(movie_id) = movie_id.map_err(|rejection| AppError::Validation(rejection.body_text()))?;
    tracing::debug!(movie_id, "Get movie request");

    let movie = MovieCatalog::new(&state.db)
        .fetch_by_id(movie_id)
        .await?
        .ok_or(AppError::NotFound(MOVIE_NOT_FOUND.to_string()))?;

    Ok(Json(MovieDetailResponse::from(movie)))
}
