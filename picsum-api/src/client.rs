use crate::error::ApiError;
use crate::models::Photo;

pub const DEFAULT_BASE_URL: &str = "https://picsum.photos";
pub const DEFAULT_PAGE_SIZE: u32 = 20;
pub const THUMBNAIL_WIDTH: u32 = 300;
pub const THUMBNAIL_HEIGHT: u32 = 200;

/// Configuration for the gallery client.
///
/// The page size is fixed for the whole session; pagination is a plain
/// incrementing page number, there is no cursor token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryConfig {
    /// Base URL of the image API
    pub base_url: String,
    /// Items requested per list page
    pub page_size: u32,
    /// Thumbnail size requested for grid display
    pub thumbnail_width: u32,
    pub thumbnail_height: u32,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            thumbnail_width: THUMBNAIL_WIDTH,
            thumbnail_height: THUMBNAIL_HEIGHT,
        }
    }
}

/// Thin client over the public Picsum endpoints.
///
/// Cheap to clone; the application shares one instance through context.
#[derive(Debug, Clone)]
pub struct PicsumClient {
    config: GalleryConfig,
    http: reqwest::Client,
}

impl Default for PicsumClient {
    fn default() -> Self {
        Self::new()
    }
}

impl PicsumClient {
    pub fn new() -> Self {
        Self::with_config(GalleryConfig::default())
    }

    pub fn with_config(config: GalleryConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    pub fn page_size(&self) -> u32 {
        self.config.page_size
    }

    pub fn list_url(&self, page: u32) -> String {
        format!(
            "{}/v2/list?page={}&limit={}",
            self.config.base_url, page, self.config.page_size
        )
    }

    pub fn info_url(&self, id: &str) -> String {
        format!("{}/id/{}/info", self.config.base_url, id)
    }

    /// URL of the sized thumbnail asset used by the grid.
    pub fn thumbnail_url(&self, id: &str) -> String {
        format!(
            "{}/id/{}/{}/{}",
            self.config.base_url, id, self.config.thumbnail_width, self.config.thumbnail_height
        )
    }

    /// Fetches one page of photo metadata in listing order.
    pub async fn list_page(&self, page: u32) -> Result<Vec<Photo>, ApiError> {
        let url = self.list_url(page);
        log::debug!("GET {}", url);
        let response = self.http.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status().as_u16()));
        }
        Ok(response.json::<Vec<Photo>>().await?)
    }

    /// Fetches the metadata record of a single photo.
    pub async fn photo_info(&self, id: &str) -> Result<Photo, ApiError> {
        let url = self.info_url(id);
        log::debug!("GET {}", url);
        let response = self.http.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status().as_u16()));
        }
        Ok(response.json::<Photo>().await?)
    }
}
