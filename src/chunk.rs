//! Chunked document processing.
//!
//! Oversized documents are split into sections at heading boundaries
//! and rendered independently, bounding per-call rendering cost.
//! Sections share no renderer state, so a list or table open at a
//! section boundary does not continue into the next section.

use crate::error::Result;
use crate::math;
use crate::render::{LatexRenderer, RenderOptions};

/// Documents longer than this many characters are split at section
/// boundaries and rendered per section.
pub const DEFAULT_CHUNK_THRESHOLD: usize = 30_000;

/// Split a document into sections at heading lines.
///
/// A section starts at the document start or wherever a line begins
/// with one to six `#` characters followed by whitespace. The returned
/// slices concatenate back to the input exactly.
pub fn split_sections(content: &str) -> Vec<&str> {
    let mut cuts = Vec::new();
    let mut pos = 0;
    for line in content.split_inclusive('\n') {
        if pos > 0 && is_heading_line(line) {
            cuts.push(pos);
        }
        pos += line.len();
    }

    let mut sections = Vec::with_capacity(cuts.len() + 1);
    let mut start = 0;
    for cut in cuts {
        sections.push(&content[start..cut]);
        start = cut;
    }
    sections.push(&content[start..]);
    sections
}

fn is_heading_line(line: &str) -> bool {
    let hashes = line.bytes().take_while(|b| *b == b'#').count();
    (1..=6).contains(&hashes)
        && line
            .as_bytes()
            .get(hashes)
            .is_some_and(|b| b.is_ascii_whitespace())
}

/// Render a document body, chunking at section boundaries when the
/// input exceeds `threshold` characters.
pub fn render_chunked(
    content: &str,
    options: &RenderOptions,
    threshold: usize,
) -> Result<String> {
    let renderer = LatexRenderer::new(options.clone());

    if content.chars().count() <= threshold {
        return Ok(render_section(&renderer, content));
    }

    let sections = split_sections(content);
    log::debug!(
        "document exceeds {} chars, rendering {} sections",
        threshold,
        sections.len()
    );

    let mut out = String::with_capacity(content.len());
    for section in &sections {
        out.push_str(&render_section(&renderer, section));
    }
    Ok(out)
}

fn render_section(renderer: &LatexRenderer, section: &str) -> String {
    let masked = math::mask_math(section);
    let body = renderer.render(&masked.text);
    masked.restore(&body)
}
