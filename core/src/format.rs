use std::path::Path;

/// Extension written for every converted file.
pub const WEBP_EXTENSION: &str = "webp";

/// Formats picked up by the batch walk. Anything else, `.webp` included, is left alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceFormat {
    Png,
    Jpg,
}

impl SourceFormat {
    /// Case-insensitive match on the file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "png" => Some(SourceFormat::Png),
            "jpg" | "jpeg" => Some(SourceFormat::Jpg),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SourceFormat::Png => "PNG",
            SourceFormat::Jpg => "JPEG",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path_is_case_insensitive() {
        for name in ["a.jpg", "a.jpeg", "a.JPG", "a.Jpeg"] {
            assert_eq!(SourceFormat::from_path(Path::new(name)), Some(SourceFormat::Jpg), "{name}");
        }
        assert_eq!(SourceFormat::from_path(Path::new("a.PNG")), Some(SourceFormat::Png));
    }

    #[test]
    fn test_rejects_other_extensions() {
        for name in ["a.webp", "a.WEBP", "a.gif", "a.txt", "png", "a.png.bak", "jpg"] {
            assert_eq!(SourceFormat::from_path(Path::new(name)), None, "{name}");
        }
    }
}
