//! Math-span preprocessing.
//!
//! Block math (`$$…$$`) and inline math (`$…$`) are lifted out of the
//! raw Markdown before the structural parse and substituted back into
//! the rendered output afterwards. Without the round trip, a Markdown
//! parser would read `_` and `*` inside formulas as emphasis markers and
//! the leaf escaper would mangle the rewritten LaTeX.
//!
//! The scanner is anchored and never backtracks: each pass walks the
//! text once, so pathological runs of `$` characters stay linear.

use std::fmt::Write;

// Private-use codepoints delimit masked spans; they cannot occur in the
// LaTeX emitted by any render rule.
const MARK_OPEN: char = '\u{E000}';
const MARK_CLOSE: char = '\u{E001}';

/// Markdown text with math spans masked out, plus the LaTeX to restore
/// in their place after rendering.
#[derive(Debug, Clone)]
pub struct MaskedMath {
    /// The input with every math span replaced by a placeholder token.
    pub text: String,
    spans: Vec<String>,
}

impl MaskedMath {
    /// Number of math spans that were masked.
    pub fn span_count(&self) -> usize {
        self.spans.len()
    }

    /// Substitute the rewritten math back into rendered output.
    pub fn restore(&self, rendered: &str) -> String {
        if self.spans.is_empty() {
            return rendered.to_string();
        }

        let mut out = String::with_capacity(rendered.len());
        let mut rest = rendered;
        while let Some(open) = rest.find(MARK_OPEN) {
            out.push_str(&rest[..open]);
            let after = &rest[open + MARK_OPEN.len_utf8()..];
            let replaced = after.find(MARK_CLOSE).and_then(|close| {
                let latex = after[..close].parse::<usize>().ok().and_then(|idx| self.spans.get(idx))?;
                Some((latex, close))
            });
            match replaced {
                Some((latex, close)) => {
                    out.push_str(latex);
                    rest = &after[close + MARK_CLOSE.len_utf8()..];
                }
                None => {
                    out.push(MARK_OPEN);
                    rest = after;
                }
            }
        }
        out.push_str(rest);
        out
    }
}

/// Mask all math spans in `input`.
///
/// Block spans are rewritten to an `equation` environment; inline spans
/// pass through dollar-delimited. The block pass runs first and the
/// inline pass operates on its output, which contains no dollars where
/// blocks were matched, so inline substitution cannot re-match block
/// output. Unbalanced delimiters are left unmodified.
pub fn mask_math(input: &str) -> MaskedMath {
    let mut spans = Vec::new();
    let blocked = mask_block_spans(input, &mut spans);
    let text = mask_inline_spans(&blocked, &mut spans);
    MaskedMath { text, spans }
}

/// Rewrite math spans in place, without masking.
///
/// This is the pure text-level substitution: `$$…$$` becomes an
/// `equation` environment and `$…$` passes through unchanged. Equivalent
/// to [`mask_math`] followed by an immediate [`MaskedMath::restore`] of
/// the masked text.
pub fn rewrite_math(input: &str) -> String {
    let masked = mask_math(input);
    masked.restore(&masked.text)
}

fn mask_block_spans(input: &str, spans: &mut Vec<String>) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(open) = rest.find("$$") {
        let after = &rest[open + 2..];
        match after.find("$$") {
            Some(close) if close > 0 => {
                out.push_str(&rest[..open]);
                let inner = &after[..close];
                push_placeholder(
                    &mut out,
                    spans,
                    format!("\\begin{{equation}}{inner}\\end{{equation}}"),
                );
                rest = &after[close + 2..];
            }
            _ => {
                // Unmatched or empty marker stays verbatim
                out.push_str(&rest[..open + 2]);
                rest = &rest[open + 2..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn mask_inline_spans(input: &str, spans: &mut Vec<String>) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(open) = rest.find('$') {
        let after = &rest[open + 1..];
        // The closing dollar must sit on the same line
        let line_end = after.find('\n').unwrap_or(after.len());
        match after[..line_end].find('$') {
            Some(close) if close > 0 => {
                out.push_str(&rest[..open]);
                let inner = &after[..close];
                push_placeholder(&mut out, spans, format!("${inner}$"));
                rest = &after[close + 1..];
            }
            _ => {
                out.push_str(&rest[..open + 1]);
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

fn push_placeholder(out: &mut String, spans: &mut Vec<String>, latex: String) {
    out.push(MARK_OPEN);
    let _ = write!(out, "{}", spans.len());
    out.push(MARK_CLOSE);
    spans.push(latex);
}
