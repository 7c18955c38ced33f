mod home;
pub mod movies;

use axum::{http::Method, routing::get, Router};
use sea_orm::DatabaseConnection;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::error::AppError;

// Define the OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // General endpoints
        home::root,
        // Movie endpoints
        movies::list_movies,
        movies::get_movie,
    ),
    components(
        schemas(
            movies::MovieDetailResponse,
            movies::MovieListResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "General", description = "General API information"),
        (name = "Movies", description = "Read-only, paginated access to the movie catalog")
    ),
    info(
        title = "Movie Theater API",
        version = "0.1.0",
        description = "A Rust/Axum read-only API over a movie catalog",
    )
)]
struct ApiDoc;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub api_prefix: String,
    /// Mount path of the list endpoint, base of its navigation links.
    pub movies_path: String,
}

impl AppState {
    pub fn new(db: DatabaseConnection, api_prefix: &str) -> Self {
        Self {
            db,
            api_prefix: api_prefix.to_string(),
            movies_path: format!("{api_prefix}/movies/"),
        }
    }

    fn movie_path(&self) -> String {
        format!("{}{{movie_id}}/", self.movies_path)
    }
}

fn api_doc(api_prefix: &str) -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    if !api_prefix.is_empty() {
        doc.servers = Some(vec![utoipa::openapi::server::Server::new(api_prefix)]);
    }
    doc
}

async fn not_found() -> AppError {
    AppError::NotFound("Not Found".to_string())
}

pub fn create_routes(state: AppState) -> Router {
    // Swagger UI (stateless)
    let swagger_router: Router = SwaggerUi::new("/swagger-ui")
        .url("/api-docs/openapi.json", api_doc(&state.api_prefix))
        .into();

    let app_routes = Router::new()
        .route("/", get(home::root))
        .route(&state.movies_path, get(movies::list_movies))
        .route(&state.movie_path(), get(movies::get_movie))
        .with_state(state);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET]);

    // Merge Swagger UI (which has no state) with the rest
    Router::new()
        .merge(swagger_router)
        .merge(app_routes)
        .fallback(not_found)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
