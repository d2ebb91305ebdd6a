//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod render_scene;
/// Application State
///
/// Eingaben, Optionen und die aktive Host-Kurve zwischen zwei Frames.
pub mod state;
pub mod use_cases;

pub use controller::OverlayController;
pub use events::{OverlayCommand, OverlayIntent, OverlayLayer};
pub use render_scene::build as build_overlay_scene;
pub use state::AppState;
pub use use_cases::frame::OverlayFrame;
