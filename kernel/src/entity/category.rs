use vodca::{AsRefln, Fromln};

/// Genres offered by input forms. Stored publications are not required to
/// carry one of these, so listing the categories present in the catalog may
/// return a different set.
pub const AVAILABLE_CATEGORIES: [&str; 20] = [
    "Sci-Fi",
    "Fantasy",
    "Mystery",
    "Horror",
    "Romance",
    "Thriller",
    "Biography",
    "History",
    "Self-Help",
    "Business",
    "Science",
    "Philosophy",
    "Poetry",
    "Drama",
    "Comedy",
    "Adventure",
    "Political Satire",
    "Non-Fiction",
    "Children",
    "Young Adult",
];

#[derive(Debug, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Fromln, AsRefln)]
pub struct Category(String);

impl Category {
    pub fn new(category: impl Into<String>) -> Self {
        Self(category.into())
    }

    pub fn is_available(&self) -> bool {
        AVAILABLE_CATEGORIES.contains(&self.0.as_str())
    }
}
