use super::Extractor;
use pulldown_cmark::{Event, Parser as CmarkParser};

/// Markdown extractor for study notes and documentation
///
/// Flattens markup to plain text: headings, emphasis and lists are
/// dropped, text and inline code survive, block boundaries become
/// newlines.
pub struct MarkdownExtractor;

impl Extractor for MarkdownExtractor {
    fn can_extract(&self, extension: &str) -> bool {
        extension == "md"
    }

    fn extract(&self, content: &str) -> String {
        let parser = CmarkParser::new(content);
        let mut text = String::new();

        for event in parser {
            match event {
                Event::Text(t) => {
                    text.push_str(&t);
                    text.push(' ');
                }
                Event::Code(code) => {
                    text.push_str(&code);
                    text.push(' ');
                }
                Event::SoftBreak | Event::HardBreak => {
                    text.push('\n');
                }
                Event::End(_) => {
                    // Block boundaries separate sentences for the matcher
                    if !text.ends_with('\n') {
                        text.push('\n');
                    }
                }
                _ => {}
            }
        }

        text.trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_can_extract() {
        let extractor = MarkdownExtractor;
        assert!(extractor.can_extract("md"));
        assert!(!extractor.can_extract("txt"));
    }

    #[test]
    fn test_markdown_strips_markup() {
        let extractor = MarkdownExtractor;
        let text = extractor.extract("# Título\n\nLesão *celular* e `hipóxia`.\n");
        assert!(text.contains("Título"));
        assert!(text.contains("celular"));
        assert!(text.contains("hipóxia"));
        assert!(!text.contains('#'));
        assert!(!text.contains('*'));
        assert!(!text.contains('`'));
    }

    #[test]
    fn test_markdown_empty_input() {
        let extractor = MarkdownExtractor;
        assert_eq!(extractor.extract(""), "");
    }
}
