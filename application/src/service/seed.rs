use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection};
use kernel::interface::update::{
    DependOnPublicationModifier, DependOnWriterModifier, PublicationModifier, WriterModifier,
};
use kernel::prelude::entity::{
    Category, Isbn, Publication, PublicationId, PublicationTitle, ReleaseYear, Writer,
    WriterBirthYear, WriterId, WriterName, WriterNationality,
};
use kernel::KernelError;

use crate::transfer::SeedReportDto;

struct SampleWriter {
    name: &'static str,
    nationality: &'static str,
    birth_year: i32,
}

struct SamplePublication {
    title: &'static str,
    writer: usize,
    genre: &'static str,
    year: i32,
    isbn: &'static str,
}

const SAMPLE_WRITERS: [SampleWriter; 5] = [
    SampleWriter {
        name: "George Orwell",
        nationality: "British",
        birth_year: 1903,
    },
    SampleWriter {
        name: "Isaac Asimov",
        nationality: "American",
        birth_year: 1920,
    },
    SampleWriter {
        name: "Agatha Christie",
        nationality: "British",
        birth_year: 1890,
    },
    SampleWriter {
        name: "J.K. Rowling",
        nationality: "British",
        birth_year: 1965,
    },
    SampleWriter {
        name: "Stephen King",
        nationality: "American",
        birth_year: 1947,
    },
];

const SAMPLE_PUBLICATIONS: [SamplePublication; 11] = [
    SamplePublication {
        title: "1984",
        writer: 0,
        genre: "Sci-Fi",
        year: 1949,
        isbn: "9780451524935",
    },
    SamplePublication {
        title: "Animal Farm",
        writer: 0,
        genre: "Political Satire",
        year: 1945,
        isbn: "9780451526342",
    },
    SamplePublication {
        title: "Foundation",
        writer: 1,
        genre: "Sci-Fi",
        year: 1951,
        isbn: "9780553803716",
    },
    SamplePublication {
        title: "I, Robot",
        writer: 1,
        genre: "Sci-Fi",
        year: 1950,
        isbn: "9780553294385",
    },
    SamplePublication {
        title: "The Murder of Roger Ackroyd",
        writer: 2,
        genre: "Mystery",
        year: 1926,
        isbn: "9780007527526",
    },
    SamplePublication {
        title: "And Then There Were None",
        writer: 2,
        genre: "Mystery",
        year: 1939,
        isbn: "9780062073488",
    },
    SamplePublication {
        title: "Harry Potter and the Philosopher's Stone",
        writer: 3,
        genre: "Fantasy",
        year: 1997,
        isbn: "9780747532699",
    },
    SamplePublication {
        title: "Harry Potter and the Chamber of Secrets",
        writer: 3,
        genre: "Fantasy",
        year: 1998,
        isbn: "9780747538493",
    },
    SamplePublication {
        title: "The Shining",
        writer: 4,
        genre: "Horror",
        year: 1977,
        isbn: "9780307743657",
    },
    SamplePublication {
        title: "It",
        writer: 4,
        genre: "Horror",
        year: 1986,
        isbn: "9781501142970",
    },
    SamplePublication {
        title: "The Stand",
        writer: 4,
        genre: "Horror",
        year: 1978,
        isbn: "9780307743688",
    },
];

fn sample_writers() -> Vec<Writer> {
    SAMPLE_WRITERS
        .iter()
        .map(|sample| {
            Writer::new(
                WriterId::generate(),
                WriterName::new(sample.name),
                Some(WriterNationality::new(sample.nationality)),
                Some(WriterBirthYear::new(sample.birth_year)),
            )
        })
        .collect()
}

fn sample_publications(writers: &[Writer]) -> Vec<Publication> {
    SAMPLE_PUBLICATIONS
        .iter()
        .filter_map(|sample| {
            writers.get(sample.writer).map(|writer| {
                Publication::new(
                    PublicationId::generate(),
                    PublicationTitle::new(sample.title),
                    *writer.id(),
                    Category::new(sample.genre),
                    ReleaseYear::new(sample.year),
                    Isbn::new(sample.isbn),
                )
            })
        })
        .collect()
}

/// Destructive reseed: clears both collections and loads the sample catalog.
///
/// Not atomic. If inserting publications fails, the writers inserted before
/// remain in place.
#[async_trait::async_trait]
pub trait SeedCatalogService:
    'static + Sync + Send + DependOnWriterModifier + DependOnPublicationModifier
{
    #[tracing::instrument(skip(self))]
    async fn seed_catalog(&self) -> error_stack::Result<SeedReportDto, KernelError> {
        let mut connection = self.database_connection().session().await?;

        tracing::info!("removing existing catalog entries");
        let removed_writers = self.writer_modifier().delete_all(&mut connection).await?;
        let removed_publications = self
            .publication_modifier()
            .delete_all(&mut connection)
            .await?;
        tracing::info!(removed_writers, removed_publications, "catalog cleared");

        let writers = sample_writers();
        self.writer_modifier()
            .create_many(&mut connection, &writers)
            .await?;
        tracing::info!(count = writers.len(), "writer profiles created");

        let publications = sample_publications(&writers);
        self.publication_modifier()
            .create_many(&mut connection, &publications)
            .await?;
        tracing::info!(count = publications.len(), "publications added");

        match self
            .publication_modifier()
            .ensure_identifier_index(&mut connection)
            .await
        {
            Ok(()) => tracing::info!("identifier uniqueness constraint established"),
            Err(report) => {
                tracing::warn!(error = ?report, "identifier constraint not created, proceeding")
            }
        }

        Ok(SeedReportDto::new(&writers, &publications))
    }
}

impl<T> SeedCatalogService for T where T: DependOnWriterModifier + DependOnPublicationModifier {}
