//! Plain text rendering of content documents.

use crate::model::ContentDocument;
use std::fmt::Write;

/// Maximum title width in the outline before truncation.
const TITLE_WIDTH: usize = 48;

/// Render a one-line-per-slide outline of a document:
/// number, content type and title.
pub fn to_outline(doc: &ContentDocument) -> String {
    let mut output = String::new();
    let _ = writeln!(
        output,
        "{} ({}), {} slides",
        doc.metadata.source_file,
        doc.metadata.source_format,
        doc.slide_count()
    );

    for slide in doc.slides_in_order() {
        let mut line = format!(
            "{:>3}  {:<18} {}",
            slide.number,
            slide.content_type.as_str(),
            truncate(&slide.title)
        );
        if !slide.images.is_empty() {
            let _ = write!(line, "  [{} img]", slide.images.len());
        }
        for note in &slide.extraction_notes {
            let _ = write!(line, "\n       note: {}", note);
        }
        output.push_str(line.trim_end());
        output.push('\n');
    }

    output
}

fn truncate(title: &str) -> String {
    let title = title.lines().next().unwrap_or("").trim();
    if title.chars().count() <= TITLE_WIDTH {
        title.to_string()
    } else {
        let cut: String = title.chars().take(TITLE_WIDTH - 3).collect();
        format!("{}...", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ContentType, Metadata, SlideContent, SlideImage};

    #[test]
    fn test_to_outline() {
        let mut slide = SlideContent::new(2, "Results", "")
            .with_content_type(ContentType::Feature)
            .with_image(SlideImage::new("img/1.png"));
        slide.add_note("classified by image rule");
        let doc = ContentDocument::new(
            Metadata::new("deck.pptx", "pptx"),
            vec![
                SlideContent::new(1, "Welcome", "").with_content_type(ContentType::TitleOpening),
                slide,
            ],
        );

        let result = to_outline(&doc);
        assert!(result.starts_with("deck.pptx (pptx), 2 slides"));
        assert!(result.contains("title_opening"));
        assert!(result.contains("Results"));
        assert!(result.contains("[1 img]"));
        assert!(result.contains("note: classified by image rule"));
    }

    #[test]
    fn test_truncate_long_title() {
        let long = "x".repeat(100);
        let result = truncate(&long);
        assert_eq!(result.chars().count(), TITLE_WIDTH);
        assert!(result.ends_with("..."));
    }
}
