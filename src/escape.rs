//! LaTeX special-character escaping.

/// Escape the ten LaTeX-reserved characters in literal text.
///
/// Every occurrence is substituted, not just the first. The function is
/// a single forward pass, so the backslashes introduced by replacements
/// are never themselves re-escaped.
///
/// # Example
///
/// ```
/// use mdtex::escape::escape_latex;
///
/// assert_eq!(escape_latex("100% & $5"), r"100\% \& \$5");
/// ```
pub fn escape_latex(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            // Backslash must not pick up escapes introduced below
            '\\' => result.push_str("\\textbackslash{}"),
            '&' => result.push_str("\\&"),
            '%' => result.push_str("\\%"),
            '$' => result.push_str("\\$"),
            '#' => result.push_str("\\#"),
            '_' => result.push_str("\\_"),
            '{' => result.push_str("\\{"),
            '}' => result.push_str("\\}"),
            '~' => result.push_str("\\textasciitilde{}"),
            '^' => result.push_str("\\textasciicircum{}"),
            _ => result.push(c),
        }
    }
    result
}
