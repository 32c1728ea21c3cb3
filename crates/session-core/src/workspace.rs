//! The live workspace model the session passes read and mutate.
//!
//! A [`Workspace`] is an ordered strip of [`Tab`]s plus the top-level window
//! placement and the location of the session file. Tabs are either
//! [`Document`]s, whose state is captured and restored, or [`ToolPane`]s
//! (output log, help browser), which the persister skips. The model is
//! headless: a host front end renders it and calls back into it, and the
//! session passes treat it as the single source of truth for what is open.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::color::Color;

/// Name of the session file inside the configuration directory.
const CONFIG_FILE: &str = "config.txt";

/// Top-level window placement in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowRect {
    /// Left edge.
    pub x: usize,
    /// Top edge.
    pub y: usize,
    /// Outer width.
    pub width: usize,
    /// Outer height.
    pub height: usize,
}

impl WindowRect {
    /// Creates a placement rectangle.
    pub const fn new(x: usize, y: usize, width: usize, height: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

impl Default for WindowRect {
    /// Conservative placement used until a session is restored.
    fn default() -> Self {
        Self::new(0, 0, 800, 600)
    }
}

/// Usable screen area reported by the host's monitor query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenBounds {
    /// Usable width.
    pub width: usize,
    /// Usable height.
    pub height: usize,
}

impl ScreenBounds {
    /// Creates screen bounds.
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }
}

/// One open document and the editing state that travels with it.
///
/// Fields are public: the model is a plain record the host front end binds
/// widgets to, and the session passes read and write it directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Backing file path, empty for an untitled document.
    pub path: String,
    /// Loaded text contents.
    pub text: String,
    /// Cursor insert position as a character offset. Stored verbatim; views
    /// clamp it against the loaded text themselves.
    pub cursor_insert: usize,
    /// Indent width for this document.
    pub indent_level: usize,
    /// Font face name. Opaque to the model; the host resolves it against the
    /// fonts actually installed.
    pub font_face: String,
    /// Font size in points.
    pub font_size: usize,
    /// Background color override, when one has been chosen.
    pub background: Option<Color>,
    /// Echo program output to the log pane.
    pub log_print: bool,
    /// Keep the output view pinned instead of following new output.
    pub scroll_lock: bool,
    /// Hide the surrounding chrome while a program runs.
    pub ide_hidden: bool,
    /// Jump back to the stored line when a running program breaks.
    pub break_on_goto_line: bool,
}

impl Default for Document {
    fn default() -> Self {
        Self {
            path: String::new(),
            text: String::new(),
            cursor_insert: 0,
            indent_level: 2,
            font_face: "Courier".to_string(),
            font_size: 12,
            background: None,
            log_print: false,
            scroll_lock: false,
            ide_hidden: false,
            break_on_goto_line: false,
        }
    }
}

impl Document {
    /// Creates an untitled document with the workspace defaults.
    pub fn untitled() -> Self {
        Self::default()
    }

    /// Points the document at `path` and reads its contents.
    ///
    /// The path is recorded even when the read fails, so state for a file
    /// that has moved or is temporarily unreadable still survives the next
    /// persist. On failure the contents are cleared and the error is
    /// returned for the caller to report.
    pub fn load_file(&mut self, path: &str) -> io::Result<()> {
        self.path = path.to_string();
        match fs::read_to_string(path) {
            Ok(text) => {
                self.text = text;
                Ok(())
            }
            Err(err) => {
                self.text.clear();
                Err(err)
            }
        }
    }
}

/// An auxiliary pane hosted in the tab strip but never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolPane {
    /// Title shown on the tab.
    pub title: String,
}

impl ToolPane {
    /// Creates a pane with the given tab title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

/// One tab in the workspace strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tab {
    /// An editable document captured by the session.
    Document(Document),
    /// An auxiliary pane the persister skips.
    Tool(ToolPane),
}

impl Tab {
    /// The document behind this tab, if it is a document tab.
    pub fn as_document(&self) -> Option<&Document> {
        match self {
            Tab::Document(document) => Some(document),
            Tab::Tool(_) => None,
        }
    }

    /// Mutable access to the document behind this tab.
    pub fn as_document_mut(&mut self) -> Option<&mut Document> {
        match self {
            Tab::Document(document) => Some(document),
            Tab::Tool(_) => None,
        }
    }
}

/// The live workspace: ordered tabs, window placement, and the session file
/// location.
#[derive(Debug, Clone)]
pub struct Workspace {
    tabs: Vec<Tab>,
    window: WindowRect,
    config_dir: PathBuf,
}

impl Workspace {
    /// Creates a workspace rooted at `config_dir`, seeded with one untitled
    /// document tab. That seed tab is the one a restored session reuses for
    /// its first document instead of opening another.
    pub fn new(config_dir: impl Into<PathBuf>) -> Self {
        Self {
            tabs: vec![Tab::Document(Document::untitled())],
            window: WindowRect::default(),
            config_dir: config_dir.into(),
        }
    }

    /// Per-user configuration directory for an application name: a
    /// dot-directory under the home directory, or a relative dot-directory
    /// when no home is known.
    pub fn default_config_dir(app: &str) -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(format!(".{app}"))
    }

    /// Directory the session file lives in.
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Full path of the session file.
    pub fn config_path(&self) -> PathBuf {
        self.config_dir.join(CONFIG_FILE)
    }

    /// All tabs, in strip order.
    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    /// Document tabs in strip order, tool panes filtered out.
    pub fn documents(&self) -> impl Iterator<Item = &Document> {
        self.tabs.iter().filter_map(Tab::as_document)
    }

    /// Number of document tabs.
    pub fn document_count(&self) -> usize {
        self.documents().count()
    }

    /// Mutable access to the first document tab.
    ///
    /// The workspace is seeded with an untitled document; if the host has
    /// since closed every document tab, a fresh one is inserted at the front
    /// so a restore pass always has a target.
    pub fn first_document_mut(&mut self) -> &mut Document {
        let index = self
            .tabs
            .iter()
            .position(|tab| matches!(tab, Tab::Document(_)));
        let index = match index {
            Some(index) => index,
            None => {
                self.tabs.insert(0, Tab::Document(Document::untitled()));
                0
            }
        };
        match &mut self.tabs[index] {
            Tab::Document(document) => document,
            Tab::Tool(_) => unreachable!("index points at a document tab"),
        }
    }

    /// Appends a new untitled document tab and returns it.
    pub fn create_document(&mut self) -> &mut Document {
        self.tabs.push(Tab::Document(Document::untitled()));
        match self.tabs.last_mut() {
            Some(Tab::Document(document)) => document,
            _ => unreachable!("a document tab was just pushed"),
        }
    }

    /// Appends an auxiliary pane tab.
    pub fn add_tool(&mut self, title: impl Into<String>) {
        self.tabs.push(Tab::Tool(ToolPane::new(title)));
    }

    /// Current window placement.
    pub fn window(&self) -> WindowRect {
        self.window
    }

    /// Moves or resizes the window.
    pub fn set_window(&mut self, rect: WindowRect) {
        self.window = rect;
    }
}
