//! Input abstraction for the syllabification API

use std::io::Read;
use std::path::{Path, PathBuf};

use crate::api::Error;

/// Source of text to syllabify
pub enum Input {
    /// Direct text input
    Text(String),
    /// File path input
    File(PathBuf),
    /// Raw bytes, expected to be UTF-8
    Bytes(Vec<u8>),
    /// Reader input (boxed for object safety)
    Reader(Box<dyn Read + Send + Sync>),
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Text(text) => f
                .debug_struct("Input::Text")
                .field("length", &text.len())
                .finish(),
            Input::File(path) => f.debug_struct("Input::File").field("path", path).finish(),
            Input::Bytes(bytes) => f
                .debug_struct("Input::Bytes")
                .field("length", &bytes.len())
                .finish(),
            Input::Reader(_) => f.debug_struct("Input::Reader").finish(),
        }
    }
}

impl Input {
    /// Create input from text
    pub fn from_text(text: impl Into<String>) -> Self {
        Input::Text(text.into())
    }

    /// Create input from file path
    pub fn from_file(path: impl AsRef<Path>) -> Self {
        Input::File(path.as_ref().to_path_buf())
    }

    /// Create input from bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }

    /// Create input from reader
    pub fn from_reader(reader: impl Read + Send + Sync + 'static) -> Self {
        Input::Reader(Box::new(reader))
    }

    /// Read the whole input as UTF-8 text
    pub(crate) fn into_text(self) -> Result<String, Error> {
        let bytes = match self {
            Input::Text(text) => return Ok(text),
            Input::Bytes(bytes) => bytes,
            Input::File(path) => std::fs::read(&path).map_err(|e| {
                Error::Infrastructure(format!("Failed to read file {}: {}", path.display(), e))
            })?,
            Input::Reader(mut reader) => {
                let mut buffer = Vec::new();
                reader.read_to_end(&mut buffer).map_err(|e| {
                    Error::Infrastructure(format!("Failed to read from reader: {}", e))
                })?;
                buffer
            }
        };

        String::from_utf8(bytes)
            .map_err(|e| Error::InvalidInput(format!("Invalid UTF-8 encoding: {}", e)))
    }
}

impl From<&str> for Input {
    fn from(text: &str) -> Self {
        Input::from_text(text)
    }
}

impl From<String> for Input {
    fn from(text: String) -> Self {
        Input::Text(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_text_and_bytes() {
        assert_eq!(Input::from_text("hola").into_text().unwrap(), "hola");
        assert_eq!(
            Input::from_bytes("año".as_bytes().to_vec())
                .into_text()
                .unwrap(),
            "año"
        );
    }

    #[test]
    fn test_invalid_utf8() {
        let err = Input::from_bytes(vec![0x61, 0xff, 0x62])
            .into_text()
            .unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn test_reader() {
        let input = Input::from_reader(Cursor::new("¿qué tal?".as_bytes().to_vec()));
        assert_eq!(input.into_text().unwrap(), "¿qué tal?");
    }

    #[test]
    fn test_missing_file() {
        let err = Input::from_file("/nonexistent/silabeo/input.txt")
            .into_text()
            .unwrap_err();
        assert!(matches!(err, Error::Infrastructure(_)));
        assert!(err.to_string().contains("Failed to read file"));
    }

    #[test]
    fn test_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("texto.txt");
        std::fs::write(&path, "casa tren").unwrap();
        assert_eq!(Input::from_file(&path).into_text().unwrap(), "casa tren");
    }

    #[test]
    fn test_debug_hides_content() {
        let debug = format!("{:?}", Input::from_text("secreto"));
        assert!(debug.contains("length"));
        assert!(!debug.contains("secreto"));
    }
}
