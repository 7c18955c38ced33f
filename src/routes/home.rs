use axum::{extract::State, response::Html};

use crate::routes::AppState;

fn render_index(movies_path: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head><meta charset=\"UTF-8\"><title>Movie Theater API</title></head>\n\
         <body>\n\
         <h1>Movie Theater API</h1>\n\
         <ul>\n\
         <li><a href=\"{movies_path}\">Movie catalog</a> (page and per_page query parameters)</li>\n\
         <li><a href=\"/swagger-ui/\">API docs</a></li>\n\
         </ul>\n\
         </body>\n\
         </html>\n"
    )
}

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Index page linking to the catalog and the API docs", content_type = "text/html")
    ),
    tag = "General"
)]
pub async fn root(State(state): State<AppState>) -> Html<String> {
    Html(render_index(&state.movies_path))
}
