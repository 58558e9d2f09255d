/// Error type for webmercator-rs operations.
#[derive(Debug, Clone, PartialEq)]
pub enum WebMercatorError {
    /// An input value is not usable for the operation
    /// (e.g. a bounding box center with no coordinates set).
    InvalidArgument(String),
    /// A required parameter combination was not supplied
    /// (e.g. a bounding box with neither radius nor diameter).
    MissingArgument(String),
}

impl std::fmt::Display for WebMercatorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WebMercatorError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            WebMercatorError::MissingArgument(msg) => write!(f, "Missing argument: {}", msg),
        }
    }
}

impl std::error::Error for WebMercatorError {}
