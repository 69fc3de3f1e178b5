//! Sprig Screens - layered screens and menus
//!
//! - `ScreenManager` — pushdown stack of [`Screen`]s; the top screen gets input
//! - `ScreenContext` — queue screens use to push/exit screens or ask the host
//!   to quit or toggle fullscreen
//! - `MenuItem` — a labelled, drawable entry that raises one selection event
//! - `MenuScreen` — a vertical list of menu items with keyboard navigation

mod context;
mod manager;
mod menu_item;
mod menu_screen;
mod screen;

pub use context::{HostRequest, ScreenContext};
pub use manager::ScreenManager;
pub use menu_item::{MenuItem, SelectCallback};
pub use menu_screen::MenuScreen;
pub use screen::Screen;
