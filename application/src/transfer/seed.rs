use kernel::prelude::entity::{Publication, Writer};

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct WriterSummaryDto {
    pub name: String,
    pub nationality: Option<String>,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct PublicationSummaryDto {
    pub title: String,
    pub genre: String,
    pub year: i32,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct SeedReportDto {
    pub writers_created: usize,
    pub publications_added: usize,
    /// Distinct, in order of first appearance.
    pub categories_available: Vec<String>,
    pub writer_summary: Vec<WriterSummaryDto>,
    pub publication_summary: Vec<PublicationSummaryDto>,
}

impl SeedReportDto {
    pub fn new(writers: &[Writer], publications: &[Publication]) -> Self {
        let mut categories_available: Vec<String> = Vec::new();
        for publication in publications {
            let category: &String = publication.category().as_ref();
            if !categories_available.contains(category) {
                categories_available.push(category.clone());
            }
        }
        Self {
            writers_created: writers.len(),
            publications_added: publications.len(),
            categories_available,
            writer_summary: writers
                .iter()
                .map(|writer| WriterSummaryDto {
                    name: writer.name().as_ref().clone(),
                    nationality: writer.nationality().as_ref().map(|n| n.as_ref().clone()),
                })
                .collect(),
            publication_summary: publications
                .iter()
                .map(|publication| PublicationSummaryDto {
                    title: publication.title().as_ref().clone(),
                    genre: publication.category().as_ref().clone(),
                    year: *publication.release_year().as_ref(),
                })
                .collect(),
        }
    }
}
