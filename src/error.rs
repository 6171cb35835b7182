use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CarouselError {
    #[error("carousel needs at least one slide")]
    Empty,
    #[error("{slides} slides but {indicators} indicators")]
    IndicatorMismatch { slides: usize, indicators: usize },
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("no image files found in directory {0:?}")]
    NoImages(PathBuf),
    #[error("failed to decode image {path:?}: {reason}")]
    Decode { path: PathBuf, reason: String },
    #[error("failed to create texture for {path:?}: {reason}")]
    Texture { path: PathBuf, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn io_message_is_left_to_the_source() {
        let err = LoadError::Io {
            path: PathBuf::from("photos"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such directory"),
        };
        assert_eq!(err.to_string(), "failed to read \"photos\"");
        assert_eq!(err.source().map(|s| s.to_string()).as_deref(), Some("no such directory"));

        let chain = format!("{:#}", anyhow::Error::new(err));
        assert_eq!(chain.matches("no such directory").count(), 1);
    }
}
