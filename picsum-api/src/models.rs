use serde::{Deserialize, Serialize};

/// Photo metadata as returned by the Picsum API.
///
/// The list endpoint delivers `id` through `download_url`; `title` and
/// `description` only ever appear on the info endpoint and are usually
/// absent even there, so display goes through the fallback accessors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Photo {
    pub id: String,
    #[serde(default)]
    pub author: String,
    pub width: u32,
    pub height: u32,
    pub url: String,
    pub download_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Photo {
    /// Title for display; an absent or empty title becomes "Photo {id}".
    pub fn display_title(&self) -> String {
        match &self.title {
            Some(title) if !title.is_empty() => title.clone(),
            _ => format!("Photo {}", self.id),
        }
    }

    pub fn display_author(&self) -> &str {
        if self.author.is_empty() {
            "Unknown author"
        } else {
            &self.author
        }
    }

    pub fn display_description(&self) -> &str {
        match &self.description {
            Some(description) if !description.is_empty() => description,
            _ => "No description available for this photo.",
        }
    }

    /// Native dimensions, e.g. "5000 × 3333".
    pub fn dimensions(&self) -> String {
        format!("{} × {}", self.width, self.height)
    }
}
