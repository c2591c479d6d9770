use super::Extractor;

/// Plain text extractor
///
/// Passes file content through unchanged. Handles `.txt` and
/// extensionless files.
pub struct PlainTextExtractor;

impl Extractor for PlainTextExtractor {
    fn can_extract(&self, extension: &str) -> bool {
        extension == "txt" || extension.is_empty()
    }

    fn extract(&self, content: &str) -> String {
        content.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plaintext_can_extract() {
        let extractor = PlainTextExtractor;
        assert!(extractor.can_extract("txt"));
        assert!(extractor.can_extract(""));
        assert!(!extractor.can_extract("md"));
    }

    #[test]
    fn test_plaintext_passthrough() {
        let extractor = PlainTextExtractor;
        assert_eq!(extractor.extract("conteúdo\nbruto"), "conteúdo\nbruto");
    }
}
