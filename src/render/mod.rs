//! Übergabe fertiger Overlay-Szenen an einen Zeichen-Backend.
//!
//! Der eigentliche Viewport (Host-Draw-Handler, GPU) liegt außerhalb der
//! Crate; er implementiert [`OverlaySink`] und bekommt pro Frame eine
//! vollständige [`OverlayScene`].

mod json_sink;

pub use crate::shared::{DrawCommand, LineTopology, OverlayScene};
pub use json_sink::JsonSink;

/// Ziel für fertige Overlay-Szenen.
///
/// Ein `Err` gilt als Render-Fehler: der Controller schaltet die Ansicht ab.
pub trait OverlaySink {
    /// Zeichnet bzw. übernimmt eine Szene.
    fn submit(&mut self, scene: &OverlayScene) -> anyhow::Result<()>;
}

/// Sammelt alle übergebenen Szenen (Tests, Headless-Betrieb).
#[derive(Debug, Default)]
pub struct RecordingSink {
    frames: Vec<OverlayScene>,
}

impl RecordingSink {
    /// Erstellt einen leeren Recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Alle bisher übergebenen Szenen.
    pub fn frames(&self) -> &[OverlayScene] {
        &self.frames
    }

    /// Zuletzt übergebene Szene.
    pub fn last(&self) -> Option<&OverlayScene> {
        self.frames.last()
    }
}

impl OverlaySink for RecordingSink {
    fn submit(&mut self, scene: &OverlayScene) -> anyhow::Result<()> {
        self.frames.push(scene.clone());
        Ok(())
    }
}
