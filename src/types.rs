use serde::{Serialize, Deserialize};

/// One entry in the project gallery. Serialized as a bare JSON object with
/// the field names the page has always persisted, so pre-existing storage
/// blobs keep loading; unknown fields are ignored and missing ones default
/// to empty, which is the whole migration story for this schema.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Project {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tech: Vec<String>,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub demo: String,
}

impl Project {
    pub fn new(name: &str) -> Project {
        Project {
            id: String::new(),
            name: name.to_string(),
            description: String::new(),
            tech: Vec::new(),
            url: String::new(),
            demo: String::new(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Profile {
    pub name: String,
    pub bio: String,
    pub avatar_url: String,
}

/// A social icon in the header row. The icon is an SVG path string the host
/// drops into a 24x24 viewBox.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
    pub icon: String,
}

/// One of the big link buttons in the middle of the page.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct LinkButton {
    pub name: String,
    pub url: String,
}
