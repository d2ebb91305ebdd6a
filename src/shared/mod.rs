//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Konfiguration und die Overlay-Szene, die zwischen `app` und
//! `render` geteilt werden, um direkte Abhängigkeiten zu vermeiden.

pub mod options;
mod render_scene;

pub use options::{CurveSettings, OverlayOptions};
pub use render_scene::{DrawCommand, LineTopology, OverlayScene};
