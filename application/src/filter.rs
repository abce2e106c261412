use crate::transfer::PublicationDto;

/// Category value meaning "no category filter".
pub const ALL_CATEGORIES: &str = "all";

/// Listing filter applied over an already-fetched catalog.
#[derive(Debug, Clone, Default)]
pub struct CatalogFilter {
    pub category: Option<String>,
    pub search: String,
}

impl CatalogFilter {
    pub fn new(category: Option<String>, search: impl Into<String>) -> Self {
        Self {
            category,
            search: search.into(),
        }
    }

    pub fn matches(&self, publication: &PublicationDto) -> bool {
        if let Some(category) = self
            .category
            .as_deref()
            .filter(|category| *category != ALL_CATEGORIES)
        {
            if publication.category != category {
                return false;
            }
        }

        if self.search.trim().is_empty() {
            return true;
        }
        let term = self.search.to_lowercase();
        publication.title.to_lowercase().contains(&term)
            || publication
                .writer
                .as_ref()
                .is_some_and(|writer| writer.full_name.to_lowercase().contains(&term))
    }

    pub fn apply<'a>(&self, publications: &'a [PublicationDto]) -> Vec<&'a PublicationDto> {
        publications
            .iter()
            .filter(|publication| self.matches(publication))
            .collect()
    }
}

#[cfg(test)]
mod test {
    use super::CatalogFilter;
    use crate::transfer::{PublicationDto, WriterDto};

    fn publication(title: &str, writer: &str, category: &str) -> PublicationDto {
        PublicationDto {
            id: title.to_string(),
            title: title.to_string(),
            writer: Some(WriterDto {
                id: writer.to_string(),
                full_name: writer.to_string(),
                country: None,
                year_of_birth: None,
            }),
            category: category.to_string(),
            release_year: 1950,
            identifier: "9780000000000".to_string(),
        }
    }

    fn catalog() -> Vec<PublicationDto> {
        vec![
            publication("Foundation", "Isaac Asimov", "Sci-Fi"),
            publication("I, Robot", "Isaac Asimov", "Sci-Fi"),
            publication("The Shining", "Stephen King", "Horror"),
        ]
    }

    #[test]
    fn all_category_and_blank_search_keep_everything() {
        let catalog = catalog();
        let filter = CatalogFilter::new(Some("all".to_string()), "  ");
        assert_eq!(filter.apply(&catalog).len(), 3);
    }

    #[test]
    fn search_matches_title_or_writer_case_insensitively() {
        let catalog = catalog();
        let by_writer = CatalogFilter::new(None, "KING");
        let titles: Vec<_> = by_writer
            .apply(&catalog)
            .into_iter()
            .map(|p| p.title.as_str())
            .collect();
        assert_eq!(titles, vec!["The Shining"]);

        let by_title = CatalogFilter::new(None, "robot");
        assert_eq!(by_title.apply(&catalog).len(), 1);
    }

    #[test]
    fn category_and_search_combine() {
        let catalog = catalog();
        let filter = CatalogFilter::new(Some("Sci-Fi".to_string()), "asimov");
        assert_eq!(filter.apply(&catalog).len(), 2);

        let filter = CatalogFilter::new(Some("Horror".to_string()), "asimov");
        assert!(filter.apply(&catalog).is_empty());
    }
}
