//! Session capture and restore.
//!
//! One session file round-trips the whole workspace. A typical file:
//!
//! ```text
//! indentLevel=2
//! fontSize=12
//! fontName='Courier'
//! 00=#000000
//! 01=#008000
//! 02=#800080
//! 03=#0000c0
//! 04=#b06000
//! 05=#008080
//! 06=#808000
//! 07=#606060
//! 08=#ffffff
//! path='1;0;0;0;42;/tmp/fib.bas'
//! path='0;0;0;0;0;/tmp/util.bas'
//! windowPos=50;50;800;600
//! ```
//!
//! [`SessionState`] owns both passes. The restore pass reads the file (or
//! tolerates its absence), applies every recognized key to the state, the
//! injected [`StyleTable`], and the [`Workspace`], and finally marks the
//! state restored. The persist pass is gated on that mark: a run that never
//! restored cannot overwrite a richer file on disk with its own defaults.
//! Both passes degrade silently on bad input; nothing in here aborts the
//! host over a malformed line.
//!
//! Per-tab state travels as a [`DocumentRecord`], a packed value of five
//! integers and a trailing path. Records are transient: decoded from the
//! store to drive document creation during restore, captured fresh from live
//! documents during persist, and never kept between runs.

use std::fs;

use session_core_properties::Properties;
use tracing::{debug, warn};

use crate::color::Color;
use crate::scan::FieldScanner;
use crate::style::{BACKGROUND_SLOT, DEFAULT_BACKGROUND, StyleClass, StyleTable};
use crate::workspace::{Document, ScreenBounds, WindowRect, Workspace};

const INDENT_LEVEL_KEY: &str = "indentLevel";
const FONT_SIZE_KEY: &str = "fontSize";
const FONT_NAME_KEY: &str = "fontName";
const PATH_KEY: &str = "path";
const WINDOW_POS_KEY: &str = "windowPos";

/// Two-digit zero-padded key for a style slot, `"00"` through `"08"`.
fn slot_key(index: usize) -> String {
    format!("{index:02}")
}

/// Whether `value` survives the line format unmangled.
///
/// The format has no escaping, so a value containing a quote, a field
/// separator, or a line break would corrupt the next restore. Such values
/// are skipped at persist time.
fn representable(value: &str) -> bool {
    !value.contains(['\'', ';', '\n', '\r'])
}

/// Per-tab state packed into one `path` line:
/// `<logPrint>;<scrollLock>;<ideHidden>;<breakOnGotoLine>;<cursor>;<path>`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentRecord {
    /// Echo program output to the log pane.
    pub log_print: bool,
    /// Keep the output view pinned instead of following new output.
    pub scroll_lock: bool,
    /// Hide the surrounding chrome while a program runs.
    pub ide_hidden: bool,
    /// Jump back to the stored line when a running program breaks.
    pub break_on_goto_line: bool,
    /// Cursor insert position as a character offset.
    pub cursor_insert: usize,
    /// Backing file path, everything after the fifth separator, verbatim.
    pub file_path: String,
}

impl DocumentRecord {
    /// Decodes a packed record value.
    ///
    /// Never fails: a missing or non-numeric field reads as `0` and a
    /// missing path reads as empty, per the fixed-field-count contract of
    /// [`FieldScanner`].
    pub fn decode(value: &str) -> Self {
        let mut scanner = FieldScanner::new(value);
        let log_print = scanner.next_integer() != 0;
        let scroll_lock = scanner.next_integer() != 0;
        let ide_hidden = scanner.next_integer() != 0;
        let break_on_goto_line = scanner.next_integer() != 0;
        let cursor_insert = scanner.next_integer();
        let file_path = scanner.rest().to_string();
        Self {
            log_print,
            scroll_lock,
            ide_hidden,
            break_on_goto_line,
            cursor_insert,
            file_path,
        }
    }

    /// Encodes the record back into its packed form.
    pub fn encode(&self) -> String {
        format!(
            "{};{};{};{};{};{}",
            usize::from(self.log_print),
            usize::from(self.scroll_lock),
            usize::from(self.ide_hidden),
            usize::from(self.break_on_goto_line),
            self.cursor_insert,
            self.file_path
        )
    }

    /// Captures the record for a live document.
    pub fn capture(document: &Document) -> Self {
        Self {
            log_print: document.log_print,
            scroll_lock: document.scroll_lock,
            ide_hidden: document.ide_hidden,
            break_on_goto_line: document.break_on_goto_line,
            cursor_insert: document.cursor_insert,
            file_path: document.path.clone(),
        }
    }

    /// Applies the flag and cursor fields to a live document.
    ///
    /// The path is deliberately not applied here; the restore pass loads the
    /// file itself so the load/flags/cursor ordering stays in one place.
    pub fn apply_to(&self, document: &mut Document) {
        document.log_print = self.log_print;
        document.scroll_lock = self.scroll_lock;
        document.ide_hidden = self.ide_hidden;
        document.break_on_goto_line = self.break_on_goto_line;
        document.cursor_insert = self.cursor_insert;
    }
}

/// The per-run session state and the restore/persist passes over it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    /// Editor indent width.
    pub indent_level: usize,
    /// Global font face name.
    pub font_face: String,
    /// Global font size in points.
    pub font_size: usize,
    /// Editor background override; `None` means no color was ever chosen.
    pub background: Option<Color>,
    restored: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            indent_level: 2,
            font_face: "Courier".to_string(),
            font_size: 12,
            background: None,
            restored: false,
        }
    }
}

impl SessionState {
    /// Creates the state with its defaults: indent 2, `Courier` at 12
    /// points, no background override, not yet restored.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a restore pass has run this session.
    ///
    /// Set by every restore entry point, including the first-run case where
    /// no file exists, and never cleared. [`Self::persist`] refuses to write
    /// until it is set.
    pub fn has_been_restored(&self) -> bool {
        self.restored
    }

    /// Applies the session defaults to a document: indent level, font, and,
    /// only when one is set, the background color.
    pub fn apply_to_document(&self, document: &mut Document) {
        document.indent_level = self.indent_level;
        document.font_face = self.font_face.clone();
        document.font_size = self.font_size;
        if let Some(color) = self.background {
            document.background = Some(color);
        }
    }

    /// Runs the restore pass against the workspace's session file.
    ///
    /// An unreadable file is the first-run case, not an error: every field
    /// keeps its default and the state is still marked restored so a later
    /// [`Self::persist`] may write a fresh file.
    pub fn restore(
        &mut self,
        workspace: &mut Workspace,
        styles: &mut StyleTable,
        screen: ScreenBounds,
    ) {
        let path = workspace.config_path();
        match fs::read_to_string(&path) {
            Ok(text) => self.restore_from_str(&text, workspace, styles, screen),
            Err(err) => {
                debug!(path = %path.display(), error = %err, "no session file, keeping defaults");
                self.restored = true;
            }
        }
    }

    /// Restores from session-file text already in memory.
    pub fn restore_from_str(
        &mut self,
        text: &str,
        workspace: &mut Workspace,
        styles: &mut StyleTable,
        screen: ScreenBounds,
    ) {
        let store = Properties::parse(text);
        self.restore_from_store(&store, workspace, styles, screen);
    }

    /// Restores from an already parsed store and marks the state restored.
    ///
    /// Every key is optional. A missing or malformed value leaves the
    /// matching field at its previous value, and the remaining keys still
    /// apply.
    pub fn restore_from_store(
        &mut self,
        store: &Properties,
        workspace: &mut Workspace,
        styles: &mut StyleTable,
        screen: ScreenBounds,
    ) {
        if let Some(level) = store.get(INDENT_LEVEL_KEY).and_then(|v| v.parse().ok()) {
            self.indent_level = level;
        }
        self.restore_styles(store, styles);
        self.restore_documents(store, workspace);
        Self::restore_window(store, workspace, screen);
        self.restored = true;
    }

    /// Applies the font keys and the style-slot colors.
    ///
    /// Font values land in both the state and the injected table; the
    /// background slot lands in the state alone. An empty font name models a
    /// face the host could not resolve, so the previous one is kept.
    fn restore_styles(&mut self, store: &Properties, styles: &mut StyleTable) {
        if let Some(size) = store.get(FONT_SIZE_KEY).and_then(|v| v.parse().ok()) {
            self.font_size = size;
            styles.set_font_size(size);
        }
        if let Some(face) = store.get(FONT_NAME_KEY).filter(|face| !face.is_empty()) {
            self.font_face = face.to_string();
            styles.set_font_face(face);
        }
        for class in StyleClass::ALL {
            if let Some(color) = Self::stored_color(store, class.index()) {
                styles.set_color(class, color);
            }
        }
        if let Some(color) = Self::stored_color(store, BACKGROUND_SLOT) {
            self.background = Some(color);
        }
    }

    /// Color stored for a style slot, when present and well formed.
    fn stored_color(store: &Properties, index: usize) -> Option<Color> {
        let value = store.get(&slot_key(index))?;
        match value.parse() {
            Ok(color) => Some(color),
            Err(err) => {
                debug!(slot = index, error = %err, "ignoring unparseable style color");
                None
            }
        }
    }

    /// Reopens one document tab per stored `path` line, in stored order.
    ///
    /// The first record reuses the workspace's seed tab; later records each
    /// get a fresh tab. Per document: session defaults, then the file load,
    /// then the record's flags and cursor.
    fn restore_documents(&self, store: &Properties, workspace: &mut Workspace) {
        let mut reuse_initial = true;
        for value in store.get_all(PATH_KEY) {
            let record = DocumentRecord::decode(value);
            let document = if std::mem::take(&mut reuse_initial) {
                workspace.first_document_mut()
            } else {
                workspace.create_document()
            };
            self.apply_to_document(document);
            if let Err(err) = document.load_file(&record.file_path) {
                debug!(path = %record.file_path, error = %err, "stored document is unreadable");
            }
            record.apply_to(document);
        }
    }

    /// Applies the stored window placement when it is plausible on the
    /// current screen.
    ///
    /// A degenerate rectangle or an origin beyond the screen is discarded: a
    /// stale multi-monitor layout, or a malformed field that scanned as `0`,
    /// fails the same check.
    fn restore_window(store: &Properties, workspace: &mut Workspace, screen: ScreenBounds) {
        let Some(value) = store.get(WINDOW_POS_KEY) else {
            return;
        };
        let mut scanner = FieldScanner::new(value);
        let x = scanner.next_integer();
        let y = scanner.next_integer();
        let width = scanner.next_integer();
        let height = scanner.next_integer();
        let plausible = x > 0 && y > 0 && width > 100 && height > 100;
        if plausible && x < screen.width && y < screen.height {
            workspace.set_window(WindowRect::new(x, y, width, height));
        } else {
            debug!(%value, "discarding implausible window placement");
        }
    }

    /// Runs the persist pass: captures the live workspace and writes the
    /// session file.
    ///
    /// Does nothing until a restore pass has run. A write failure is logged
    /// and absorbed; the session file is simply stale for the next run.
    pub fn persist(&self, workspace: &Workspace, styles: &StyleTable) {
        if !self.restored {
            debug!("skipping persist, no restore pass has run");
            return;
        }
        let path = workspace.config_path();
        if let Err(err) = fs::write(&path, self.render(workspace, styles)) {
            warn!(path = %path.display(), error = %err, "could not write session file");
        }
    }

    /// Renders the session-file text for the current live workspace.
    ///
    /// Pure and unguarded; [`Self::persist`] adds the restore gate and the
    /// file write. Line order is fixed: indent level, font size, font name,
    /// one color per style slot with the background slot last, one `path`
    /// line per document tab in strip order, window placement.
    pub fn render(&self, workspace: &Workspace, styles: &StyleTable) -> String {
        let mut store = Properties::new();
        store.push_int(INDENT_LEVEL_KEY, self.indent_level);
        self.render_styles(&mut store, styles);
        Self::render_documents(&mut store, workspace);
        let window = workspace.window();
        store.push_raw(
            WINDOW_POS_KEY,
            format!(
                "{};{};{};{}",
                window.x, window.y, window.width, window.height
            ),
        );
        store.to_string()
    }

    /// Pushes the font lines and the nine style-slot lines.
    ///
    /// Font size and colors come from the live table, not the state, so
    /// style changes made after restore are the ones written back. An unset
    /// background writes [`DEFAULT_BACKGROUND`].
    fn render_styles(&self, store: &mut Properties, styles: &StyleTable) {
        store.push_int(FONT_SIZE_KEY, styles.font_size());
        if representable(styles.font_face()) {
            store.push_str(FONT_NAME_KEY, styles.font_face());
        } else {
            warn!(
                face = styles.font_face(),
                "font face does not fit the session format, dropping it"
            );
        }
        for class in StyleClass::ALL {
            store.push_raw(slot_key(class.index()), styles.color(class).to_string());
        }
        let background = self.background.unwrap_or(DEFAULT_BACKGROUND);
        store.push_raw(slot_key(BACKGROUND_SLOT), background.to_string());
    }

    /// Pushes one `path` line per document tab, tool panes skipped.
    fn render_documents(store: &mut Properties, workspace: &Workspace) {
        for document in workspace.documents() {
            let record = DocumentRecord::capture(document);
            if representable(&record.file_path) {
                store.push_str(PATH_KEY, record.encode());
            } else {
                warn!(
                    path = %record.file_path,
                    "document path does not fit the session format, skipping the tab"
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_keys_are_zero_padded() {
        assert_eq!(slot_key(0), "00");
        assert_eq!(slot_key(7), "07");
        assert_eq!(slot_key(BACKGROUND_SLOT), "08");
    }

    #[test]
    fn test_representable_rejects_quotes_separators_and_line_breaks() {
        assert!(representable("Courier New"));
        assert!(representable(""));
        assert!(!representable("it's"));
        assert!(!representable("a;b"));
        assert!(!representable("a\nb"));
        assert!(!representable("a\rb"));
    }

    #[test]
    fn test_decode_reads_flags_cursor_and_path() {
        let record = DocumentRecord::decode("1;0;1;0;42;/tmp/x.bas");
        assert!(record.log_print);
        assert!(!record.scroll_lock);
        assert!(record.ide_hidden);
        assert!(!record.break_on_goto_line);
        assert_eq!(record.cursor_insert, 42);
        assert_eq!(record.file_path, "/tmp/x.bas");
    }

    #[test]
    fn test_decode_tolerates_missing_fields() {
        let record = DocumentRecord::decode("1;1");
        assert!(record.log_print);
        assert!(record.scroll_lock);
        assert!(!record.ide_hidden);
        assert_eq!(record.cursor_insert, 0);
        assert_eq!(record.file_path, "");
    }

    #[test]
    fn test_encode_decodes_back() {
        let record = DocumentRecord {
            log_print: true,
            scroll_lock: false,
            ide_hidden: false,
            break_on_goto_line: true,
            cursor_insert: 120,
            file_path: "/home/someone/prog.bas".to_string(),
        };
        assert_eq!(record.encode(), "1;0;0;1;120;/home/someone/prog.bas");
        assert_eq!(DocumentRecord::decode(&record.encode()), record);
    }

    #[test]
    fn test_capture_and_apply_are_symmetric() {
        let mut source = Document::untitled();
        source.path = "x.bas".to_string();
        source.cursor_insert = 9;
        source.scroll_lock = true;
        source.break_on_goto_line = true;

        let record = DocumentRecord::capture(&source);
        let mut target = Document::untitled();
        record.apply_to(&mut target);

        assert_eq!(target.cursor_insert, 9);
        assert!(target.scroll_lock);
        assert!(target.break_on_goto_line);
        // The path travels through the load step, not apply_to.
        assert_eq!(target.path, "");
    }

    #[test]
    fn test_apply_to_document_keeps_background_when_unset() {
        let session = SessionState::new();
        let mut document = Document::untitled();
        document.background = Some(Color::rgb(1, 2, 3));
        session.apply_to_document(&mut document);
        assert_eq!(document.background, Some(Color::rgb(1, 2, 3)));

        let mut session = SessionState::new();
        session.background = Some(Color::rgb(9, 9, 9));
        session.apply_to_document(&mut document);
        assert_eq!(document.background, Some(Color::rgb(9, 9, 9)));
    }

    #[test]
    fn test_new_state_is_not_restored() {
        let session = SessionState::new();
        assert!(!session.has_been_restored());
        assert_eq!(session.indent_level, 2);
        assert_eq!(session.font_face, "Courier");
        assert_eq!(session.font_size, 12);
        assert_eq!(session.background, None);
    }
}
