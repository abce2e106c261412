use application::service::SeedCatalogService;
use axum::extract::State;
use axum::routing::post;
use axum::Router;

use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::response::{SeedPresenter, UsageHint};

pub trait SeedRouter {
    fn route_seed(self) -> Self;
}

impl SeedRouter for Router<AppModule> {
    fn route_seed(self) -> Self {
        self.route(
            "/api/seed",
            post(|State(module): State<AppModule>| async move {
                tracing::info!("initiating catalog population");
                Controller::new((), SeedPresenter)
                    .bypass(|| module.database().seed_catalog())
                    .await
                    .map_err(ErrorStatus::from)
            })
            .get(|| async { UsageHint::seed() }),
        )
    }
}
