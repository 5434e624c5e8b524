mod controller;
mod panel;

pub use controller::{ExplorerController, ExplorerView, PLAY_LABEL, PLAYING_LABEL};
pub use panel::{Insight, LogStyle, SelectorEntry, insights_for, selector_entries};
