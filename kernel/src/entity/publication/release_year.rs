use time::OffsetDateTime;
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Fromln, AsRefln)]
pub struct ReleaseYear(i32);

impl ReleaseYear {
    pub const EARLIEST: i32 = 1000;

    pub fn new(year: impl Into<i32>) -> Self {
        Self(year.into())
    }

    pub fn latest() -> i32 {
        OffsetDateTime::now_utc().year()
    }

    pub fn is_within(&self, latest: i32) -> bool {
        (Self::EARLIEST..=latest).contains(&self.0)
    }
}

#[cfg(test)]
mod test {
    use super::ReleaseYear;

    #[test]
    fn bounds_are_inclusive() {
        assert!(ReleaseYear::new(1000).is_within(2024));
        assert!(ReleaseYear::new(2024).is_within(2024));
        assert!(!ReleaseYear::new(999).is_within(2024));
        assert!(!ReleaseYear::new(2025).is_within(2024));
    }
}
