//! Extension list rows.
//!
//! [`ExtensionRow`] projects an [`ExtensionItem`] into the text and button
//! state a list row shows, and forwards button clicks to a listener by row
//! position. It never changes extension state itself.

mod lang;
mod model;
mod row;

pub use lang::source_display_name;
pub use model::{Extension, ExtensionInfo, ExtensionItem, InstallStep};
pub use row::{
    button_state, warning_for, ButtonClickListener, ButtonLabel, ButtonState, ExtensionRow, Icon,
    RowView, Warning,
};
