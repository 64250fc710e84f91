/// One external result page to fetch and process. Created by the driver
/// before the workers start and read-only from then on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    /// Sequential, assigned at creation.
    pub id: usize,
    pub url: String,
}

impl Source {
    pub fn new(id: usize, url: &str) -> Self {
        Self {
            id,
            url: url.to_string(),
        }
    }
}
