//! Editing layer of the equation editor.
//!
//! An [`EditorSession`] owns one [`Expression`] and one [`Cursor`] and
//! applies [`EditEvent`]s to them. Hosts translate their raw input with
//! [`keys`] and resolve toolbar button names through a [`Palette`].

/// Cursor state machine over an expression tree.
pub mod cursor;
/// Edit events accepted by a session.
pub mod event;
/// Key-to-event mapping.
pub mod keys;
/// Button-name lookup table with TOML overrides.
pub mod palette;
/// Editing session: tree, cursor and history.
pub mod session;

pub use cursor::{Cursor, CursorError};
pub use eqn_document::{Expression, NodeKind};
pub use eqn_primitives::{Address, EditOutcome, Site};
pub use event::EditEvent;
pub use keys::{Key, KeyAction, KeyResult};
pub use palette::{Family, Palette, PaletteError};
pub use session::EditorSession;
