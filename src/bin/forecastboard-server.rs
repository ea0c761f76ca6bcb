/// ForecastBoard Server
///
/// Standalone server that loads a forecast workbook and serves the filter
/// catalog and chart frames over HTTP for frontend clients.

use forecastboard::dashboard::{Dashboard, DashboardConfig};
use forecastboard::server::run_server;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    // Get host and port from environment or use defaults
    let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "8080".to_string())
        .parse()
        .expect("PORT must be a number");

    // Workbook location and dashboard knobs
    let mut config = DashboardConfig::new(
        std::env::var("FORECASTBOARD_DATA").unwrap_or_else(|_| "data/forecasts.xlsx".to_string()),
    );
    config.sheet = std::env::var("FORECASTBOARD_SHEET").ok();
    if let Ok(top_n) = std::env::var("FORECASTBOARD_TOP_N") {
        config.top_n = top_n.parse().expect("FORECASTBOARD_TOP_N must be a number");
    }

    let dashboard = match Dashboard::open(&config) {
        Ok(dashboard) => dashboard,
        Err(err) => {
            log::error!("failed to load {}: {}", config.path.display(), err);
            std::process::exit(1);
        }
    };

    // Start the server
    run_server(&host, port, dashboard).await
}
