use crate::domain::catalog::Catalog;

#[derive(thiserror::Error, Debug)]
pub enum EditorError {
    #[error("unknown section: {0}")]
    UnknownSection(String),
    #[error("unknown directive {directive} in section {section}")]
    UnknownDirective { section: String, directive: String },
    #[error("invalid filename: {0}")]
    InvalidFilename(String),
}

/// Selected range in char offsets; `start == end` is a caret.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    pub start: usize,
    pub end: usize,
}

impl Selection {
    pub fn caret(at: usize) -> Self {
        Self { start: at, end: at }
    }
}

/// Text buffer of the unit being edited.
#[derive(Debug, Default, Clone)]
pub struct Document {
    text: String,
    selection: Selection,
}

pub fn directive_template(section: &str, directive: &str) -> String {
    format!("\n[{}]\n{}=", section, directive)
}

/// Rejects section/directive pairs that are not offered by the catalog.
pub fn check_catalog(catalog: &Catalog, section: &str, directive: &str) -> Result<(), EditorError> {
    if catalog.section(section).is_none() {
        return Err(EditorError::UnknownSection(section.to_string()));
    }
    if !catalog.has_directive(section, directive) {
        return Err(EditorError::UnknownDirective {
            section: section.to_string(),
            directive: directive.to_string(),
        });
    }
    Ok(())
}

impl Document {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            selection: Selection::default(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Replaces the whole text and resets the caret to the start.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.selection = Selection::default();
    }

    /// Moves the caret, clamped to the end of the text. Returns where it landed.
    pub fn set_cursor(&mut self, at: usize) -> usize {
        self.select(at, at).end
    }

    /// Offsets past the end land on the end, as a text area does.
    pub fn select(&mut self, start: usize, end: usize) -> Selection {
        let len = self.char_len();
        let (start, end) = (start.min(len), end.min(len));
        self.selection = Selection {
            start: start.min(end),
            end: start.max(end),
        };
        self.selection
    }

    pub fn cursor_to_end(&mut self) {
        self.selection = Selection::caret(self.char_len());
    }

    /// Replaces the selection with the directive template and leaves the
    /// caret right after it. Empty section or directive leaves the text as is.
    pub fn insert_directive(&mut self, section: &str, directive: &str) -> bool {
        if section.is_empty() || directive.is_empty() {
            return false;
        }
        let tmpl = directive_template(section, directive);
        let start = self.byte_offset(self.selection.start);
        let end = self.byte_offset(self.selection.end);
        self.text.replace_range(start..end, &tmpl);
        let caret = self.selection.start + tmpl.chars().count();
        self.selection = Selection::caret(caret);
        true
    }

    /// The raw text, exactly as it will be saved.
    pub fn preview(&self) -> &str {
        &self.text
    }

    fn byte_offset(&self, chars: usize) -> usize {
        self.text
            .char_indices()
            .nth(chars)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }
}
