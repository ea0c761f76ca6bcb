//! HTTP server exposing the dashboard to frontend clients.

use actix_web::{middleware, web, App, HttpResponse, HttpServer};

use crate::dashboard::Dashboard;
use crate::filter::FilterSelection;
use crate::messages::{CatalogResponse, FrameReply};

struct AppState {
    dashboard: Dashboard,
}

/// Health check endpoint
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "message": "ForecastBoard server is running"
    }))
}

/// Filter catalog endpoint
async fn catalog(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(CatalogResponse::new(&state.dashboard))
}

/// Frame endpoint: takes a selection, returns chart data.
///
/// The selection is intersected with the catalog first, so values the data
/// does not contain simply narrow the result.
async fn frame(state: web::Data<AppState>, selection: web::Json<FilterSelection>) -> HttpResponse {
    let effective = state.dashboard.catalog().intersect(&selection);
    let frame = state.dashboard.frame(&effective);
    HttpResponse::Ok().json(FrameReply::from_frame(frame, state.dashboard.top_n()))
}

/// Start the HTTP server around a loaded dashboard
pub async fn run_server(host: &str, port: u16, dashboard: Dashboard) -> std::io::Result<()> {
    let state = web::Data::new(AppState { dashboard });

    println!("🚀 ForecastBoard Server");
    println!("====================================");
    println!("📊 Catalog: http://{}:{}/api/catalog", host, port);
    println!("📈 Frames: POST http://{}:{}/api/frame", host, port);
    println!("🏥 Health check: http://{}:{}/health", host, port);
    println!("====================================");
    println!();

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            // Enable logger
            .wrap(middleware::Logger::default())
            // CORS for development
            .wrap(
                actix_cors::Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            // Dashboard API
            .route("/api/catalog", web::get().to(catalog))
            .route("/api/frame", web::post().to(frame))
            // Health check
            .route("/health", web::get().to(health_check))
    })
    .bind((host, port))?
    .run()
    .await
}
