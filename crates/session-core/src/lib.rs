#![warn(missing_docs)]

//! Session Core - Headless Workspace Session Persistence
//!
//! # Overview
//!
//! `session-core` captures and restores the working state of a
//! multi-document editing workspace: which files were open and in what
//! order, where the cursor sat in each, the per-document run flags, the
//! window placement, and a small set of display-style preferences. State
//! round-trips through a compact, human-editable, line-oriented session
//! file. The crate is UI-agnostic: it owns the data model and the wire
//! format, and mutates a headless [`Workspace`] that a host front end
//! renders however it likes.
//!
//! # Core pieces
//!
//! - [`Properties`]: the ordered key/value store behind the line format,
//!   with repeated-key collection (one `path` line per open document).
//! - [`FieldScanner`]: the decoder for packed `;`-separated integer records.
//! - [`SessionState`]: the per-run state owning the restore and persist
//!   passes, plus the [`DocumentRecord`] per-tab codec.
//! - [`Workspace`], [`Document`], [`Tab`]: the live model a session is read
//!   from and applied to.
//! - [`StyleTable`], [`StyleClass`], [`Color`]: the host-injected style
//!   slots the session file round-trips.
//!
//! # Quick start
//!
//! ```rust
//! use session_core::{ScreenBounds, SessionState, StyleTable, Workspace};
//!
//! let mut workspace = Workspace::new("/tmp/session-core-doc/none");
//! let mut styles = StyleTable::new();
//! let mut session = SessionState::new();
//!
//! // First run: no file on disk, so the defaults stay, and the state is
//! // still marked restored so a later persist may write a fresh file.
//! session.restore(&mut workspace, &mut styles, ScreenBounds::new(1920, 1080));
//! assert!(session.has_been_restored());
//! assert_eq!(session.indent_level, 2);
//! ```
//!
//! Restoring from text skips the file system entirely:
//!
//! ```rust
//! use session_core::{ScreenBounds, SessionState, StyleTable, Workspace};
//!
//! let mut workspace = Workspace::new(".");
//! let mut styles = StyleTable::new();
//! let mut session = SessionState::new();
//! session.restore_from_str(
//!     "indentLevel=4\nwindowPos=50;50;800;600\n",
//!     &mut workspace,
//!     &mut styles,
//!     ScreenBounds::new(1920, 1080),
//! );
//! assert_eq!(session.indent_level, 4);
//! assert_eq!(workspace.window().width, 800);
//! ```

pub mod color;
pub mod scan;
pub mod session;
pub mod style;
pub mod workspace;

pub use color::{Color, ColorParseError};
pub use scan::FieldScanner;
pub use session::{DocumentRecord, SessionState};
pub use style::{BACKGROUND_SLOT, DEFAULT_BACKGROUND, SLOT_COUNT, StyleClass, StyleTable};
pub use workspace::{Document, ScreenBounds, Tab, ToolPane, WindowRect, Workspace};

pub use session_core_properties::{Properties, Property};
