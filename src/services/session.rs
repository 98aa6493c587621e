//! Editing session driven by named user actions.
//!
//! The shell (CLI or line-driven `session`) turns input into `Action`s and
//! hands them to a `Dispatcher`, which routes each `ActionKind` to the
//! handler subscribed for it. The default handlers apply actions to an
//! `EditorSession`, which only talks to the pure core (classifier, catalog,
//! document buffer) and to `storage` for reads and saves.

use crate::domain::catalog::Catalog;
use crate::domain::models::{Config, DetectReport, SaveReport, SessionStatus, TabPanel};
use crate::domain::unit_type::{unit_type_info, UnitType};
use crate::services::classify::{describe, detect_unit_type};
use crate::services::editor::Document;
use crate::services::storage::{load_unit, save_unit};
use serde::Serialize;
use std::collections::HashMap;
use std::path::PathBuf;

/// Identifies one file read. Only the newest ticket may complete.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadTicket(u64);

#[derive(Debug)]
pub enum Action {
    FileSelected(PathBuf),
    FileLoaded {
        ticket: LoadTicket,
        name: String,
        contents: String,
    },
    TabClicked(UnitType),
    SectionChosen(Option<String>),
    DirectiveChosen(Option<String>),
    DirectiveFocused(String),
    InsertDirective,
    SetCursor(usize),
    Edit(String),
    FilenameChanged(String),
    Save,
    Preview,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ActionKind {
    FileSelected,
    FileLoaded,
    TabClicked,
    SectionChosen,
    DirectiveChosen,
    DirectiveFocused,
    InsertDirective,
    SetCursor,
    Edit,
    FilenameChanged,
    Save,
    Preview,
}

impl ActionKind {
    pub const ALL: [ActionKind; 12] = [
        ActionKind::FileSelected,
        ActionKind::FileLoaded,
        ActionKind::TabClicked,
        ActionKind::SectionChosen,
        ActionKind::DirectiveChosen,
        ActionKind::DirectiveFocused,
        ActionKind::InsertDirective,
        ActionKind::SetCursor,
        ActionKind::Edit,
        ActionKind::FilenameChanged,
        ActionKind::Save,
        ActionKind::Preview,
    ];
}

impl Action {
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::FileSelected(_) => ActionKind::FileSelected,
            Action::FileLoaded { .. } => ActionKind::FileLoaded,
            Action::TabClicked(_) => ActionKind::TabClicked,
            Action::SectionChosen(_) => ActionKind::SectionChosen,
            Action::DirectiveChosen(_) => ActionKind::DirectiveChosen,
            Action::DirectiveFocused(_) => ActionKind::DirectiveFocused,
            Action::InsertDirective => ActionKind::InsertDirective,
            Action::SetCursor(_) => ActionKind::SetCursor,
            Action::Edit(_) => ActionKind::Edit,
            Action::FilenameChanged(_) => ActionKind::FilenameChanged,
            Action::Save => ActionKind::Save,
            Action::Preview => ActionKind::Preview,
        }
    }
}

/// What the display should show after an action.
#[derive(Serialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum Outcome {
    Detected(DetectReport),
    Tab(TabPanel),
    Directives(Vec<String>),
    Help(String),
    Inserted { cursor: usize },
    Cursor(usize),
    Preview(String),
    Saved(SaveReport),
    Ignored(String),
}

fn ignored(reason: &str) -> Outcome {
    Outcome::Ignored(reason.to_string())
}

pub struct EditorSession<'c> {
    catalog: &'c Catalog,
    config: Config,
    save_dir: PathBuf,
    doc: Document,
    filename: String,
    detected: UnitType,
    active_tab: Option<UnitType>,
    section: Option<String>,
    directive: Option<String>,
    insert_enabled: bool,
    help: Option<String>,
    load_generation: u64,
}

impl<'c> EditorSession<'c> {
    pub fn new(catalog: &'c Catalog, config: Config, save_dir: PathBuf) -> Self {
        Self {
            catalog,
            config,
            save_dir,
            doc: Document::default(),
            filename: String::new(),
            detected: UnitType::Unknown,
            active_tab: None,
            section: None,
            directive: None,
            insert_enabled: false,
            help: None,
            load_generation: 0,
        }
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    /// Starts a new read. Any ticket handed out earlier becomes stale.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.load_generation += 1;
        LoadTicket(self.load_generation)
    }

    /// Applies a finished read unless a newer one has been started since.
    pub fn complete_load(&mut self, ticket: LoadTicket, name: &str, contents: String) -> Outcome {
        if ticket.0 != self.load_generation {
            tracing::debug!("discarding stale read of {}", name);
            return ignored("stale read superseded by a newer selection");
        }
        self.doc.set_text(contents);
        self.doc.cursor_to_end();
        self.filename = name.to_string();
        self.detected = detect_unit_type(name);
        Outcome::Detected(describe(name))
    }

    pub fn status(&self) -> SessionStatus {
        SessionStatus {
            filename: self.filename.clone(),
            unit_type: self.detected,
            display_name: unit_type_info(self.detected).display_name.to_string(),
            active_tab: self.active_tab,
            section: self.section.clone(),
            directive: self.directive.clone(),
            insert_enabled: self.insert_enabled,
            cursor: self.doc.selection().end,
            chars: self.doc.char_len(),
            help: self.help.clone(),
        }
    }

    pub fn apply(&mut self, action: Action) -> anyhow::Result<Outcome> {
        tracing::trace!("apply {:?}", action.kind());
        let outcome = match action {
            Action::FileSelected(path) => {
                if !path.is_file() {
                    return Ok(ignored("no file selected"));
                }
                let ticket = self.begin_load();
                let loaded = load_unit(&path)?;
                self.complete_load(ticket, &loaded.name, loaded.contents)
            }
            Action::FileLoaded {
                ticket,
                name,
                contents,
            } => self.complete_load(ticket, &name, contents),
            Action::TabClicked(tab) => {
                self.active_tab = Some(tab);
                Outcome::Tab(self.panel(tab))
            }
            Action::SectionChosen(section) => self.choose_section(section),
            Action::DirectiveChosen(directive) => self.choose_directive(directive),
            Action::DirectiveFocused(directive) => {
                let text = self.help_text(&directive);
                self.help = Some(text.clone());
                Outcome::Help(text)
            }
            Action::InsertDirective => {
                if !self.insert_enabled {
                    return Ok(ignored("insert is disabled until a section is chosen"));
                }
                let section = self.section.clone().unwrap_or_default();
                let directive = self.directive.clone().unwrap_or_default();
                if self.doc.insert_directive(&section, &directive) {
                    Outcome::Inserted {
                        cursor: self.doc.selection().end,
                    }
                } else {
                    ignored("no directive chosen")
                }
            }
            Action::SetCursor(at) => Outcome::Cursor(self.doc.set_cursor(at)),
            Action::Edit(text) => {
                self.doc.set_text(text);
                self.doc.cursor_to_end();
                Outcome::Preview(self.doc.preview().to_string())
            }
            Action::FilenameChanged(name) => {
                self.filename = name.trim().to_string();
                self.detected = detect_unit_type(&self.filename);
                Outcome::Detected(describe(&self.filename))
            }
            Action::Save => Outcome::Saved(save_unit(
                &self.save_dir,
                &self.filename,
                self.doc.text(),
                &self.config.default_filename,
            )?),
            Action::Preview => Outcome::Preview(self.doc.preview().to_string()),
        };
        Ok(outcome)
    }

    fn panel(&self, tab: UnitType) -> TabPanel {
        let info = unit_type_info(tab);
        let section = self.catalog.primary_section(tab);
        TabPanel {
            tab,
            display_name: info.display_name.to_string(),
            description: info.description.to_string(),
            doc_key: info.doc_key.to_string(),
            section: section.map(|s| s.name.to_string()),
            directives: section
                .map(|s| s.directives.iter().map(|d| d.to_string()).collect())
                .unwrap_or_default(),
        }
    }

    fn choose_section(&mut self, section: Option<String>) -> Outcome {
        self.directive = None;
        self.section = section.filter(|s| !s.is_empty());
        self.insert_enabled = self.section.is_some();
        let Some(name) = self.section.clone() else {
            return Outcome::Directives(Vec::new());
        };
        match self.catalog.directives(&name) {
            Some(list) => Outcome::Directives(list.iter().map(|d| d.to_string()).collect()),
            None => {
                tracing::debug!(
                    "unknown section {}, expected one of {:?}",
                    name,
                    self.catalog.section_names()
                );
                self.section = None;
                self.insert_enabled = false;
                ignored("unknown section")
            }
        }
    }

    fn choose_directive(&mut self, directive: Option<String>) -> Outcome {
        let directive = directive.filter(|d| !d.is_empty());
        if let (Some(section), Some(d)) = (&self.section, &directive) {
            if self.config.strict_catalog && !self.catalog.has_directive(section, d) {
                return ignored("directive is not offered for this section");
            }
        }
        self.directive = directive;
        self.insert_enabled = self.section.is_some() && self.directive.is_some();
        match &self.directive {
            Some(d) => {
                let text = self.help_text(d);
                self.help = Some(text.clone());
                Outcome::Help(text)
            }
            None => ignored("no directive chosen"),
        }
    }

    fn help_text(&self, directive: &str) -> String {
        match self.catalog.help(directive) {
            Some(h) => format!("{}: {}", directive, h),
            None => format!("{}: no documentation available", directive),
        }
    }
}

pub type Handler = Box<dyn FnMut(&mut EditorSession<'_>, Action) -> anyhow::Result<Outcome>>;

/// Routes actions to the handler subscribed for their kind.
#[derive(Default)]
pub struct Dispatcher {
    handlers: HashMap<ActionKind, Handler>,
}

impl Dispatcher {
    /// Every action kind applied directly to the session.
    pub fn with_defaults() -> Self {
        let mut d = Self::default();
        for kind in ActionKind::ALL {
            d.subscribe(
                kind,
                Box::new(|s: &mut EditorSession<'_>, a: Action| s.apply(a)),
            );
        }
        d
    }

    /// Registers `handler` for `kind`, replacing any earlier one.
    pub fn subscribe(&mut self, kind: ActionKind, handler: Handler) {
        self.handlers.insert(kind, handler);
    }

    pub fn dispatch(
        &mut self,
        session: &mut EditorSession<'_>,
        action: Action,
    ) -> anyhow::Result<Outcome> {
        match self.handlers.get_mut(&action.kind()) {
            Some(handler) => handler(session, action),
            None => Ok(ignored("no handler registered")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;
    use tempfile::TempDir;

    fn session(dir: &TempDir) -> EditorSession<'static> {
        EditorSession::new(Catalog::builtin(), Config::default(), dir.path().to_path_buf())
    }

    #[test]
    fn selecting_timer_file_shows_timer_label() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("backup.timer");
        std::fs::write(&file, "whatever\n").unwrap();
        let mut s = session(&tmp);
        let mut d = Dispatcher::with_defaults();
        let out = d.dispatch(&mut s, Action::FileSelected(file)).unwrap();
        match out {
            Outcome::Detected(r) => {
                assert_eq!(r.unit_type, UnitType::Timer);
                assert_eq!(r.display_name, "Timer Unit");
            }
            _ => panic!("expected detection"),
        }
        assert_eq!(s.status().filename, "backup.timer");
        assert_eq!(s.document().text(), "whatever\n");
    }

    #[test]
    fn missing_file_is_ignored() {
        let tmp = TempDir::new().unwrap();
        let mut s = session(&tmp);
        let out = s
            .apply(Action::FileSelected(tmp.path().join("gone.service")))
            .unwrap();
        assert!(matches!(out, Outcome::Ignored(_)));
        assert_eq!(s.status().unit_type, UnitType::Unknown);
    }

    #[test]
    fn stale_read_does_not_overwrite_newer_one() {
        let tmp = TempDir::new().unwrap();
        let mut s = session(&tmp);
        let first = s.begin_load();
        let second = s.begin_load();
        let out = s.complete_load(second, "new.socket", "new".into());
        assert!(matches!(out, Outcome::Detected(_)));
        let out = s.complete_load(first, "old.service", "old".into());
        assert!(matches!(out, Outcome::Ignored(_)));
        assert_eq!(s.document().text(), "new");
        assert_eq!(s.status().unit_type, UnitType::Socket);
    }

    #[test]
    fn cursor_beyond_text_reports_clamped_position() {
        let tmp = TempDir::new().unwrap();
        let mut s = session(&tmp);
        s.apply(Action::Edit("abc".into())).unwrap();
        assert!(matches!(s.apply(Action::SetCursor(50)).unwrap(), Outcome::Cursor(3)));
        assert!(matches!(s.apply(Action::SetCursor(1)).unwrap(), Outcome::Cursor(1)));
    }

    #[test]
    fn insert_gating_follows_section_and_directive() {
        let tmp = TempDir::new().unwrap();
        let mut s = session(&tmp);
        assert!(matches!(s.apply(Action::InsertDirective).unwrap(), Outcome::Ignored(_)));

        s.apply(Action::SectionChosen(Some("Service".into()))).unwrap();
        assert!(s.status().insert_enabled);
        // section alone enables the button but inserts nothing
        assert!(matches!(s.apply(Action::InsertDirective).unwrap(), Outcome::Ignored(_)));

        s.apply(Action::DirectiveChosen(Some("ExecStart".into()))).unwrap();
        let out = s.apply(Action::InsertDirective).unwrap();
        assert!(matches!(out, Outcome::Inserted { cursor: 21 }));
        assert_eq!(s.document().text(), "\n[Service]\nExecStart=");

        s.apply(Action::SectionChosen(None)).unwrap();
        assert!(!s.status().insert_enabled);
        assert!(s.status().directive.is_none());
    }

    #[test]
    fn unknown_section_is_rejected_softly() {
        let tmp = TempDir::new().unwrap();
        let mut s = session(&tmp);
        let out = s.apply(Action::SectionChosen(Some("Bogus".into()))).unwrap();
        assert!(matches!(out, Outcome::Ignored(_)));
        assert!(s.status().section.is_none());
    }

    #[test]
    fn tab_click_activates_panel() {
        let tmp = TempDir::new().unwrap();
        let mut s = session(&tmp);
        match s.apply(Action::TabClicked(UnitType::Socket)).unwrap() {
            Outcome::Tab(p) => {
                assert_eq!(p.tab, UnitType::Socket);
                assert_eq!(p.section.as_deref(), Some("Socket"));
                assert!(p.directives.contains(&"ListenStream".to_string()));
            }
            _ => panic!("expected tab panel"),
        }
        assert_eq!(s.status().active_tab, Some(UnitType::Socket));
    }

    #[test]
    fn focusing_directive_updates_help() {
        let tmp = TempDir::new().unwrap();
        let mut s = session(&tmp);
        s.apply(Action::DirectiveFocused("Restart".into())).unwrap();
        let help = s.status().help.unwrap();
        assert!(help.starts_with("Restart:"));
    }

    #[test]
    fn save_uses_default_name_when_blank() {
        let tmp = TempDir::new().unwrap();
        let mut s = session(&tmp);
        s.apply(Action::Edit("[Unit]\n".into())).unwrap();
        match s.apply(Action::Save).unwrap() {
            Outcome::Saved(r) => assert!(r.path.ends_with("unit.service")),
            _ => panic!("expected save"),
        }
        assert!(tmp.path().join("unit.service").exists());
    }

    #[test]
    fn subscribed_handler_replaces_default() {
        let tmp = TempDir::new().unwrap();
        let mut s = session(&tmp);
        let mut d = Dispatcher::with_defaults();
        let hits = Rc::new(Cell::new(0));
        let counter = Rc::clone(&hits);
        d.subscribe(
            ActionKind::Preview,
            Box::new(move |s: &mut EditorSession<'_>, a: Action| -> anyhow::Result<Outcome> {
                counter.set(counter.get() + 1);
                s.apply(a)
            }),
        );
        d.dispatch(&mut s, Action::Preview).unwrap();
        d.dispatch(&mut s, Action::Preview).unwrap();
        assert_eq!(hits.get(), 2);
    }

    #[test]
    fn unsubscribed_kind_is_ignored() {
        let tmp = TempDir::new().unwrap();
        let mut s = session(&tmp);
        let mut d = Dispatcher::default();
        let out = d.dispatch(&mut s, Action::Save).unwrap();
        assert!(matches!(out, Outcome::Ignored(_)));
        assert!(!tmp.path().join("unit.service").exists());
    }
}
