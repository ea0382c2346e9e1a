//! Sync state indicator classes and copy.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use super::style_enum;
use crate::cn;

style_enum! {
    /// Persistence state of the document being edited. `classes()` is the indicator fill.
    #[derive(Serialize, Deserialize)]
    #[serde(rename_all = "lowercase")]
    pub enum SyncState as "sync state" {
        /// Everything is persisted.
        Synced => ("synced", "bg-green-500"),
        /// A save is in flight.
        Syncing => ("syncing", "bg-yellow-500"),
        /// The last save failed.
        Error => ("error", "bg-red-500"),
        /// No connection; changes are held locally.
        Offline => ("offline", "bg-gray-400"),
    }
    default = Synced;
}

impl SyncState {
    /// Indicator fill color.
    pub fn indicator_color(self) -> &'static str {
        self.classes()
    }

    /// Default status copy.
    pub fn label(self) -> &'static str {
        match self {
            Self::Synced => "All changes saved",
            Self::Syncing => "Saving...",
            Self::Error => "Error saving",
            Self::Offline => "Offline",
        }
    }

    /// Whether the indicator pulses.
    pub fn animates(self) -> bool {
        matches!(self, Self::Syncing)
    }
}

/// Row holding the indicator and its text.
pub const SYNC_STATUS_CLASS: &str = "flex items-center gap-2";
/// Status copy.
pub const SYNC_STATUS_TEXT_CLASS: &str = "text-xs text-gray-500";
/// Auto-save row.
pub const AUTO_SAVE_CLASS: &str = "flex items-center gap-1 text-xs text-gray-500";
/// Auto-save label while enabled.
pub const AUTO_SAVE_ON_CLASS: &str = "text-green-600";
/// Auto-save label while disabled, and the last-saved suffix.
pub const AUTO_SAVE_MUTED_CLASS: &str = "text-gray-400";

/// Class string for the status dot.
pub fn sync_status_indicator_styles(state: SyncState, class: Option<&str>) -> String {
    cn!(
        "w-2 h-2 rounded-full",
        state.indicator_color(),
        ("animate-pulse", state.animates()),
        class,
    )
}

/// Default status copy for `state`.
pub fn sync_status_text_for_state(state: SyncState) -> &'static str {
    state.label()
}

/// Relative description of when a document was last saved.
///
/// Under a minute reads `just now`, under an hour `{m}m ago`, anything older falls back to the
/// local clock time. Timestamps in the future count as `just now`.
pub fn format_last_saved(now: DateTime<Local>, saved: DateTime<Local>) -> String {
    let seconds = (now - saved).num_seconds();
    if seconds < 60 {
        "just now".to_string()
    } else if seconds < 3600 {
        format!("{}m ago", seconds / 60)
    } else {
        saved.format("%H:%M").to_string()
    }
}
