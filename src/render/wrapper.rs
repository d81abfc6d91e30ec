//! Document wrapping: preamble and postamble around a rendered body.

use super::RenderOptions;
use crate::escape::escape_latex;

/// Wrap a rendered LaTeX body into a complete compilable document.
///
/// The preamble is fixed: `article` class, input encoding, math
/// symbols, graphics, hyperlinks, code listings, color, tabular
/// extensions, and strikeout support. No escaping is applied to the
/// body at this stage; escaping already happened at leaf emission.
pub fn wrap_document(body: &str, options: &RenderOptions) -> String {
    let mut out = String::with_capacity(body.len() + 512);
    out.push_str("\\documentclass{article}\n");
    out.push_str("\\usepackage[utf8]{inputenc}\n");
    out.push_str("\\usepackage{amsmath}\n");
    out.push_str("\\usepackage{amssymb}\n");
    out.push_str("\\usepackage{graphicx}\n");
    out.push_str("\\usepackage{hyperref}\n");
    out.push_str("\\usepackage{listings}\n");
    out.push_str("\\usepackage{xcolor}\n");
    out.push_str("\\usepackage{tabularx}\n");
    out.push_str("\\usepackage{ulem}\n");
    out.push('\n');
    out.push_str(&format!("\\title{{{}}}\n", escape_latex(&options.title)));
    out.push_str("\\author{}\n");
    out.push_str("\\date{\\today}\n");
    out.push('\n');
    out.push_str("\\begin{document}\n");
    out.push_str("\\maketitle\n\n");
    out.push_str(body);
    if !body.ends_with('\n') {
        out.push('\n');
    }
    out.push_str("\\end{document}\n");
    out
}
