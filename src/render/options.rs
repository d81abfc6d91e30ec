//! Rendering options and configuration.

/// Options for rendering Markdown content to LaTeX.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Document title used by the preamble's `\title` command
    pub title: String,

    /// Sectioning command per heading level (index 0 = level 1).
    ///
    /// The default maps level 6 to `subparagraph`, the same command as
    /// level 5 — LaTeX's sectioning hierarchy stops there.
    pub heading_commands: [String; 6],

    /// Trim the trailing cell separator from table rows.
    ///
    /// Off by default: each cell emits its own trailing `" & "`, so rows
    /// carry one superfluous separator and the header-derived column
    /// count includes the resulting empty segment. Turning this on
    /// produces strict rows with true column counts.
    pub trim_table_cells: bool,

    /// Width of included images as a fraction of `\textwidth`
    pub figure_width: f32,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the document title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Override the sectioning command for one heading level (1-6).
    ///
    /// Levels outside 1-6 are ignored.
    pub fn with_heading_command(mut self, level: u8, command: impl Into<String>) -> Self {
        if (1..=6).contains(&level) {
            self.heading_commands[level as usize - 1] = command.into();
        }
        self
    }

    /// Enable or disable trimming of trailing table-cell separators.
    pub fn with_trimmed_table_cells(mut self, trim: bool) -> Self {
        self.trim_table_cells = trim;
        self
    }

    /// Set the figure width as a fraction of the text width.
    pub fn with_figure_width(mut self, width: f32) -> Self {
        self.figure_width = width.clamp(0.1, 1.0);
        self
    }

    /// The sectioning command for a heading level, clamped to 1-6.
    pub fn heading_command(&self, level: u8) -> &str {
        let level = level.clamp(1, 6);
        &self.heading_commands[level as usize - 1]
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            title: "Converted Document".to_string(),
            heading_commands: [
                "section".to_string(),
                "subsection".to_string(),
                "subsubsection".to_string(),
                "paragraph".to_string(),
                "subparagraph".to_string(),
                "subparagraph".to_string(),
            ],
            trim_table_cells: false,
            figure_width: 0.8,
        }
    }
}
