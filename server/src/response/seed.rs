use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use application::transfer::{PublicationSummaryDto, SeedReportDto, WriterSummaryDto};

use crate::controller::Exhaust;

#[derive(Debug, Serialize)]
pub struct WriterSummaryResponse {
    name: String,
    nationality: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PublicationSummaryResponse {
    title: String,
    genre: String,
    year: i32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedStatisticsResponse {
    writers_created: usize,
    publications_added: usize,
    categories_available: Vec<String>,
    writer_summary: Vec<WriterSummaryResponse>,
    publication_summary: Vec<PublicationSummaryResponse>,
}

#[derive(Debug, Serialize)]
pub struct SeedResponse {
    success: bool,
    message: &'static str,
    statistics: SeedStatisticsResponse,
}

impl IntoResponse for SeedResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, axum::Json(self)).into_response()
    }
}

pub struct SeedPresenter;

impl Exhaust<SeedReportDto> for SeedPresenter {
    type To = SeedResponse;
    fn emit(&self, input: SeedReportDto) -> Self::To {
        let SeedReportDto {
            writers_created,
            publications_added,
            categories_available,
            writer_summary,
            publication_summary,
        } = input;
        SeedResponse {
            success: true,
            message: "Catalog population completed successfully! 🎊",
            statistics: SeedStatisticsResponse {
                writers_created,
                publications_added,
                categories_available,
                writer_summary: writer_summary
                    .into_iter()
                    .map(|WriterSummaryDto { name, nationality }| WriterSummaryResponse {
                        name,
                        nationality,
                    })
                    .collect(),
                publication_summary: publication_summary
                    .into_iter()
                    .map(
                        |PublicationSummaryDto { title, genre, year }| PublicationSummaryResponse {
                            title,
                            genre,
                            year,
                        },
                    )
                    .collect(),
            },
        }
    }
}
