use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "test", derive(fake::Dummy))]
pub struct ArtistRef {
    pub name: String,
    pub unique_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "test", derive(fake::Dummy))]
pub struct ArtistJson {
    pub name: String,
    pub unique_name: String,
    /// Unique names of the albums this artist appears on.
    pub albums: Vec<String>,
    #[serde(default)]
    pub cover_url: Option<String>,
}
