//! Index page listing the available routes.

use axum::response::Html;
use tracing::debug;

const INDEX_PAGE: &str = "Welcome to the Hawaii climate API!<br/>\
Available routes:<br/>\
Precipitation by date: /api/v1.0/precipitation<br/>\
Weather stations: /api/v1.0/stations<br/>\
Last 12 months of temperature observations from the most active station: /api/v1.0/tobs<br/>\
Temperature statistics from a start date (yyyy-mm-dd): /api/v1.0/yyyy-mm-dd<br/>\
Temperature statistics between two dates, inclusive (yyyy-mm-dd): /api/v1.0/yyyy-mm-dd/yyyy-mm-dd<br/>";

/// Handle GET / requests
pub async fn index_handler() -> Html<&'static str> {
    debug!(endpoint = "/", "Serving index page");
    Html(INDEX_PAGE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_index_lists_every_route() {
        let Html(page) = index_handler().await;
        for route in [
            "/api/v1.0/precipitation",
            "/api/v1.0/stations",
            "/api/v1.0/tobs",
            "/api/v1.0/yyyy-mm-dd/yyyy-mm-dd",
        ] {
            assert!(page.contains(route), "index is missing {}", route);
        }
    }
}
