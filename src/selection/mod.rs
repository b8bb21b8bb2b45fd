//! Settings menu
//!
//! Phase 1 picks a category by quadrant, Phase 2 picks one of twelve clock
//! positions for it. A choice is made by holding the stick on it until the
//! confirm time passes; the pointer flashes during the last stretch.

mod category;
mod menu;
mod session;
mod settings;

pub use category::{Category, SlotMap, SlotSpread, ValueRange};
pub use menu::{MenuEvent, MenuStyle, SettingsMenu};
pub use session::{HoldState, Phase, SelectionSession, SelectionTimings};
pub use settings::{Settings, SettingsConfig};
