
pub type Result<T> = std::result::Result<T, SegpadError>;

#[derive(Debug)]
pub enum SegpadError {
    Backend(Box<dyn std::error::Error + Send + Sync>),
    Other(Box<dyn std::error::Error + Send + Sync>),
}

impl std::fmt::Display for SegpadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SegpadError::Backend(_) => write!(f, "segpad encountered a backend error"),
            SegpadError::Other(_) => write!(f, "segpad encountered an error"),
        }
    }
}

impl std::error::Error for SegpadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SegpadError::Backend(err) => Some(err.as_ref()),
            SegpadError::Other(err) => Some(err.as_ref()),
        }
    }
}

impl From<std::io::Error> for SegpadError {
    fn from(err: std::io::Error) -> Self {
        SegpadError::Other(Box::new(err))
    }
}

impl From<png::EncodingError> for SegpadError {
    fn from(err: png::EncodingError) -> Self {
        SegpadError::Other(Box::new(err))
    }
}

#[cfg(feature = "cairo")]
impl From<cairo::Error> for SegpadError {
    fn from(err: cairo::Error) -> Self {
        SegpadError::Backend(Box::new(err))
    }
}

#[cfg(feature = "html")]
impl From<quick_xml::Error> for SegpadError {
    fn from(err: quick_xml::Error) -> Self {
        SegpadError::Other(Box::new(err))
    }
}
