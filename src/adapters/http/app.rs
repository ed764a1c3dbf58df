//! Application router assembly.
//!
//! Builds every handler from the ports in [`AppServices`], mounts the
//! routers enabled by the feature flags, and applies the tower-http layers.

use std::sync::Arc;
use std::time::Duration;

use axum::http::{HeaderValue, Method};
use axum::Router;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use super::health::health_routes;
use super::industries::industry_routes;
use super::quick::{quick_routes, QuickReportHandlers};
use super::wizard::{wizard_routes, WizardHandlers};
use crate::adapters::analysis::SimulatedAnalyzer;
use crate::adapters::document::PulldownReportExporter;
use crate::adapters::memory::InMemoryFormStore;
use crate::application::handlers::quick::{
    CreateQuickReportHandler, ExportQuickReportHandler, GenerateQuickReportHandler,
    GetQuickReportHandler, ResetQuickReportHandler, SetBusinessNameHandler,
};
use crate::application::handlers::wizard::{
    AdvanceWizardHandler, CreateWizardHandler, ExportWizardReportHandler, GetWizardHandler,
    ResetWizardHandler, StepBackWizardHandler, UpdateWizardFieldsHandler,
};
use crate::application::{new_write_lock, FormWriteLock};
use crate::config::AppConfig;
use crate::ports::{QuickReportRepository, ReportAnalyzer, ReportExportService, WizardRepository};

/// Port implementations the router is built from.
#[derive(Clone)]
pub struct AppServices {
    pub quick_repository: Arc<dyn QuickReportRepository>,
    pub wizard_repository: Arc<dyn WizardRepository>,
    pub analyzer: Arc<dyn ReportAnalyzer>,
    pub exporter: Arc<dyn ReportExportService>,
}

impl AppServices {
    /// In-memory store, simulated analyzer, pulldown exporter.
    pub fn in_memory(store: InMemoryFormStore, analysis_delay: Duration) -> Self {
        let store = Arc::new(store);
        Self {
            quick_repository: store.clone(),
            wizard_repository: store,
            analyzer: Arc::new(SimulatedAnalyzer::new(analysis_delay)),
            exporter: Arc::new(PulldownReportExporter::new()),
        }
    }

    fn quick_handlers(&self, write_lock: &FormWriteLock) -> QuickReportHandlers {
        let repo = &self.quick_repository;
        QuickReportHandlers {
            create_handler: Arc::new(CreateQuickReportHandler::new(repo.clone())),
            get_handler: Arc::new(GetQuickReportHandler::new(repo.clone())),
            set_name_handler: Arc::new(SetBusinessNameHandler::new(
                repo.clone(),
                write_lock.clone(),
            )),
            generate_handler: Arc::new(GenerateQuickReportHandler::new(
                repo.clone(),
                self.analyzer.clone(),
                write_lock.clone(),
            )),
            reset_handler: Arc::new(ResetQuickReportHandler::new(
                repo.clone(),
                write_lock.clone(),
            )),
            export_handler: Arc::new(ExportQuickReportHandler::new(
                repo.clone(),
                self.exporter.clone(),
            )),
        }
    }

    fn wizard_handlers(&self, write_lock: &FormWriteLock) -> WizardHandlers {
        let repo = &self.wizard_repository;
        WizardHandlers {
            create_handler: Arc::new(CreateWizardHandler::new(repo.clone())),
            get_handler: Arc::new(GetWizardHandler::new(repo.clone())),
            update_handler: Arc::new(UpdateWizardFieldsHandler::new(
                repo.clone(),
                write_lock.clone(),
            )),
            advance_handler: Arc::new(AdvanceWizardHandler::new(
                repo.clone(),
                self.analyzer.clone(),
                write_lock.clone(),
            )),
            back_handler: Arc::new(StepBackWizardHandler::new(
                repo.clone(),
                write_lock.clone(),
            )),
            reset_handler: Arc::new(ResetWizardHandler::new(repo.clone(), write_lock.clone())),
            export_handler: Arc::new(ExportWizardReportHandler::new(
                repo.clone(),
                self.exporter.clone(),
            )),
        }
    }
}

/// Creates the application router.
pub fn build_router(config: &AppConfig, services: AppServices) -> Router {
    let write_lock = new_write_lock();

    let mut api = Router::new().nest("/industries", industry_routes());
    if config.features.enable_quick_flow {
        api = api.nest("/quick", quick_routes(services.quick_handlers(&write_lock)));
    }
    if config.features.enable_wizard_flow {
        api = api.nest("/wizard", wizard_routes(services.wizard_handlers(&write_lock)));
    }

    let mut app = Router::new()
        .merge(health_routes())
        .nest("/api", api)
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(cors_layer(&config.server.cors_origins_list()));
    if config.features.enable_tracing {
        app = app.layer(TraceLayer::new_for_http());
    }
    app
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::OPTIONS,
        ])
        .allow_headers(Any);

    let parsed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if parsed.is_empty() {
        layer.allow_origin(Any)
    } else {
        layer.allow_origin(AllowOrigin::list(parsed))
    }
}
