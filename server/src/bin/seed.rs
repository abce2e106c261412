//! Reloads the sample catalog without starting the server.

use std::process::ExitCode;

use application::service::SeedCatalogService;
use driver::database::MongoDatabase;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer().with_filter(tracing_subscriber::EnvFilter::new(
                std::env::var("RUST_LOG")
                    .unwrap_or_else(|_| "driver=info,application=info,seed=info".into()),
            )),
        )
        .init();

    let database = match MongoDatabase::new().await {
        Ok(database) => database,
        Err(report) => {
            tracing::error!(error = ?report, "could not reach the catalog database");
            return ExitCode::FAILURE;
        }
    };

    match database.seed_catalog().await {
        Ok(report) => {
            tracing::info!(
                writers = report.writers_created,
                publications = report.publications_added,
                categories = ?report.categories_available,
                "sample catalog loaded"
            );
            ExitCode::SUCCESS
        }
        Err(report) => {
            tracing::error!(error = ?report, "catalog population failed");
            ExitCode::FAILURE
        }
    }
}
