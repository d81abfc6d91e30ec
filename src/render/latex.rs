//! LaTeX rendering of Markdown parse events.
//!
//! The renderer is a backend value consuming the event stream of one
//! parse call. Escaping happens only at leaf text and inline-code
//! nodes; container rules wrap already-rendered child content without
//! re-escaping it. Code-block bodies are emitted byte-for-byte, since
//! verbatim environments are escape-exempt.

use pulldown_cmark::{CodeBlockKind, Event, Options, Parser, Tag, TagEnd};

use super::RenderOptions;
use crate::escape::escape_latex;

/// Convert a Markdown fragment to a LaTeX body (no preamble).
pub fn to_latex_body(markdown: &str, options: &RenderOptions) -> String {
    LatexRenderer::new(options.clone()).render(markdown)
}

/// LaTeX renderer.
///
/// One renderer instance carries its own options and may be reused
/// across parse calls; no process-global state is involved.
pub struct LatexRenderer {
    options: RenderOptions,
}

impl LatexRenderer {
    /// Create a new LaTeX renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Render a Markdown fragment to LaTeX.
    pub fn render(&self, markdown: &str) -> String {
        let mut parse_options = Options::empty();
        parse_options.insert(Options::ENABLE_TABLES);
        parse_options.insert(Options::ENABLE_STRIKETHROUGH);

        let mut walk = EventWalk::new(&self.options);
        for event in Parser::new_ext(markdown, parse_options) {
            walk.handle(event);
        }
        walk.finish()
    }
}

/// State for one pass over a parse event stream.
struct EventWalk<'a> {
    options: &'a RenderOptions,
    body: String,
    /// Open container buffers; child content accumulates on top
    stack: Vec<String>,
    /// Destination and title of open link/image tags
    targets: Vec<(String, String)>,
    /// Language tag of the open code block, if any
    code_language: Option<String>,
    in_code_block: bool,
    table: Option<TableState>,
}

#[derive(Default)]
struct TableState {
    header: String,
    rows: Vec<String>,
    cells: Vec<String>,
}

impl<'a> EventWalk<'a> {
    fn new(options: &'a RenderOptions) -> Self {
        Self {
            options,
            body: String::new(),
            stack: Vec::new(),
            targets: Vec::new(),
            code_language: None,
            in_code_block: false,
            table: None,
        }
    }

    fn handle(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start(tag),
            Event::End(tag) => self.end(tag),
            Event::Text(text) => {
                if self.in_code_block {
                    self.top().push_str(&text);
                } else {
                    let escaped = escape_latex(&text);
                    self.top().push_str(&escaped);
                }
            }
            Event::Code(code) => {
                let fragment = format!("\\texttt{{{}}}", escape_latex(&code));
                self.top().push_str(&fragment);
            }
            Event::SoftBreak => self.top().push('\n'),
            Event::HardBreak => self.top().push_str("\\\\\n"),
            Event::Rule => self.top().push_str("\\hrulefill\n\n"),
            Event::Html(html) | Event::InlineHtml(html) => {
                // No LaTeX equivalent for raw HTML; dropped
                log::debug!("dropping raw HTML fragment ({} bytes)", html.len());
            }
            _ => {}
        }
    }

    fn start(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Paragraph
            | Tag::Heading { .. }
            | Tag::BlockQuote(_)
            | Tag::List(_)
            | Tag::Item
            | Tag::Emphasis
            | Tag::Strong
            | Tag::Strikethrough => self.stack.push(String::new()),
            Tag::CodeBlock(kind) => {
                self.in_code_block = true;
                self.code_language = Some(match kind {
                    CodeBlockKind::Fenced(info) => info
                        .split_whitespace()
                        .next()
                        .unwrap_or_default()
                        .to_string(),
                    CodeBlockKind::Indented => String::new(),
                });
                self.stack.push(String::new());
            }
            Tag::Link {
                dest_url, title, ..
            }
            | Tag::Image {
                dest_url, title, ..
            } => {
                self.targets.push((dest_url.to_string(), title.to_string()));
                self.stack.push(String::new());
            }
            Tag::Table(_) => self.table = Some(TableState::default()),
            Tag::TableCell => self.stack.push(String::new()),
            _ => {}
        }
    }

    fn end(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Paragraph => {
                let content = self.pop();
                self.top().push_str(&content);
                self.top().push_str("\n\n");
            }
            TagEnd::Heading(level) => {
                let content = self.pop();
                let command = self.options.heading_command(level as u8);
                let fragment = format!("\\{command}{{{content}}}\n\n");
                self.top().push_str(&fragment);
            }
            TagEnd::BlockQuote(_) => {
                let content = self.pop();
                let fragment = format!(
                    "\\begin{{quotation}}\n{}\n\\end{{quotation}}\n\n",
                    content.trim_end()
                );
                self.top().push_str(&fragment);
            }
            TagEnd::List(ordered) => {
                let items = self.pop();
                let environment = if ordered { "enumerate" } else { "itemize" };
                let fragment = format!(
                    "\\begin{{{environment}}}\n{}\\end{{{environment}}}\n\n",
                    items
                );
                self.top().push_str(&fragment);
            }
            TagEnd::Item => {
                let content = self.pop();
                let fragment = format!("\\item {}\n", content.trim_end());
                self.top().push_str(&fragment);
            }
            TagEnd::CodeBlock => {
                let mut code = self.pop();
                if !code.ends_with('\n') {
                    code.push('\n');
                }
                let language = self.code_language.take().unwrap_or_default();
                self.in_code_block = false;
                let fragment = if !language.is_empty() && language != "text" {
                    format!("\\begin{{lstlisting}}[language={language}]\n{code}\\end{{lstlisting}}\n\n")
                } else {
                    format!("\\begin{{verbatim}}\n{code}\\end{{verbatim}}\n\n")
                };
                self.top().push_str(&fragment);
            }
            TagEnd::Emphasis => {
                let content = self.pop();
                let fragment = format!("\\textit{{{content}}}");
                self.top().push_str(&fragment);
            }
            TagEnd::Strong => {
                let content = self.pop();
                let fragment = format!("\\textbf{{{content}}}");
                self.top().push_str(&fragment);
            }
            TagEnd::Strikethrough => {
                let content = self.pop();
                let fragment = format!("\\sout{{{content}}}");
                self.top().push_str(&fragment);
            }
            TagEnd::Link => {
                let text = self.pop();
                let (dest, _title) = self.targets.pop().unwrap_or_default();
                let fragment = format!("\\href{{{dest}}}{{{text}}}");
                self.top().push_str(&fragment);
            }
            TagEnd::Image => {
                let alt = self.pop();
                let (dest, title) = self.targets.pop().unwrap_or_default();
                // Caption priority: alt text, then title, then empty
                let caption = if !alt.is_empty() {
                    alt
                } else {
                    escape_latex(&title)
                };
                let fragment = format!(
                    "\\begin{{figure}}[h]\n\\centering\n\\includegraphics[width={}\\textwidth]{{{dest}}}\n\\caption{{{caption}}}\n\\end{{figure}}\n\n",
                    self.options.figure_width
                );
                self.top().push_str(&fragment);
            }
            TagEnd::TableCell => {
                let content = self.pop();
                if let Some(table) = self.table.as_mut() {
                    table.cells.push(content);
                }
            }
            TagEnd::TableHead => {
                if let Some(table) = self.table.as_mut() {
                    table.header = join_row(&mut table.cells, self.options.trim_table_cells);
                }
            }
            TagEnd::TableRow => {
                if let Some(table) = self.table.as_mut() {
                    let row = join_row(&mut table.cells, self.options.trim_table_cells);
                    table.rows.push(row);
                }
            }
            TagEnd::Table => {
                if let Some(table) = self.table.take() {
                    let fragment = self.render_table(table);
                    self.top().push_str(&fragment);
                }
            }
            _ => {}
        }
    }

    fn render_table(&self, table: TableState) -> String {
        // Column count comes from splitting the rendered header row on
        // the cell separator and counting segments; with untrimmed rows
        // this includes the empty segment after the trailing separator.
        let columns = table.header.split(" & ").count();
        let spec = "c".repeat(columns);

        let mut out = String::new();
        out.push_str(&format!("\\begin{{tabular}}{{{spec}}}\n\\hline\n"));
        out.push_str(&table.header);
        out.push_str(" \\\\ \\hline\n");
        for row in &table.rows {
            out.push_str(row);
            out.push_str(" \\\\ \\hline\n");
        }
        out.push_str("\\end{tabular}\n\n");
        out
    }

    fn top(&mut self) -> &mut String {
        self.stack.last_mut().unwrap_or(&mut self.body)
    }

    fn pop(&mut self) -> String {
        self.stack.pop().unwrap_or_default()
    }

    fn finish(mut self) -> String {
        // Any container left open by a truncated event stream drains
        // into the body in order
        while let Some(buf) = self.stack.pop() {
            self.body.push_str(&buf);
        }
        self.body
    }
}

/// Join the pending cells of one row, draining the cell list.
///
/// Each cell contributes its content followed by the `" & "` separator;
/// trimming drops the trailing separator from the assembled row.
fn join_row(cells: &mut Vec<String>, trim: bool) -> String {
    let row: String = cells.drain(..).map(|cell| format!("{cell} & ")).collect();
    if trim {
        row.trim_end_matches(" & ").to_string()
    } else {
        row
    }
}
