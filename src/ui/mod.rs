//! UI-Komponenten: Menü, Control-Panel, Status-Bar und Input-Handling.
//!
//! Jede Komponente sammelt `AppIntent`s statt den Zustand direkt zu
//! mutieren; die Verarbeitung läuft zentral über den Controller.

pub mod control_panel;
pub mod input;
mod keyboard;
pub mod menu;
pub mod status;

pub use control_panel::render_control_panel;
pub use input::InputState;
pub use menu::render_menu;
pub use status::render_status_bar;
