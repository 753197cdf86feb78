use std::fmt;

/// Fetch errors for the Picsum endpoints.
///
/// An empty page is not an error; the list endpoint signals end-of-list
/// with an ordinary `Ok(vec![])`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Network unreachable / request never completed
    Transport(String),
    /// Non-success HTTP status
    Status(u16),
    /// Response body could not be decoded
    Decode(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ApiError::Transport(msg) => write!(f, "Network error: {}", msg),
            ApiError::Status(status) => write!(f, "Request failed with status {}", status),
            ApiError::Decode(msg) => write!(f, "Invalid response: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else {
            ApiError::Transport(e.to_string())
        }
    }
}

impl ApiError {
    /// Message shown inline in the UI in place of content.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Transport(msg) => msg.clone(),
            ApiError::Status(_) => "Not found".to_string(),
            ApiError::Decode(msg) => msg.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_maps_to_not_found() {
        assert_eq!(ApiError::Status(404).user_message(), "Not found");
        assert_eq!(ApiError::Status(500).user_message(), "Not found");
    }

    #[test]
    fn test_transport_message_passes_through() {
        let err = ApiError::Transport("connection refused".to_string());
        assert_eq!(err.user_message(), "connection refused");
    }

    #[test]
    fn test_display_formats() {
        assert_eq!(
            ApiError::Status(404).to_string(),
            "Request failed with status 404"
        );
        assert_eq!(
            ApiError::Transport("timed out".to_string()).to_string(),
            "Network error: timed out"
        );
    }
}
