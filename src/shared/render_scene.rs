//! Overlay-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.
//! Weltkoordinaten sind Szenenpunkte (X/Z-Ebene, y = 0); Pixel-Offsets
//! zählen x nach rechts und y nach oben. Kreise liegen in der X/Z-Ebene.

use glam::DVec3;
use serde::Serialize;

/// Verbindungsart der Punkte einer Polylinie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineTopology {
    /// Fortlaufender Linienzug
    LineStrip,
    /// Unabhängige Punktpaare
    Lines,
}

/// Ein einzelner Zeichenbefehl.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DrawCommand {
    /// Linien in Weltkoordinaten
    Polyline {
        points: Vec<DVec3>,
        topology: LineTopology,
        color: [f32; 4],
    },
    /// Kreis in Weltkoordinaten
    Circle {
        center: DVec3,
        radius: f64,
        segments: u32,
        color: [f32; 4],
    },
    /// Bildschirmfester Kreis um einen Weltpunkt
    Marker {
        anchor: DVec3,
        radius_px: f32,
        color: [f32; 4],
    },
    /// Text an einem Weltpunkt, verschoben um `offset_px`
    Text {
        anchor: DVec3,
        offset_px: [f32; 2],
        text: String,
        color: [f32; 4],
    },
}

/// Alle Zeichenbefehle eines Frames in Zeichenreihenfolge.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OverlayScene {
    pub commands: Vec<DrawCommand>,
}

impl OverlayScene {
    /// Erstellt eine leere Szene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Hängt einen Zeichenbefehl an.
    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    /// Anzahl der Zeichenbefehle.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Gibt `true` zurück, wenn nichts zu zeichnen ist.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Alle Beschriftungen in Zeichenreihenfolge.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Alle Weltkreise als `(Mittelpunkt, Radius, Farbe)`.
    pub fn circles(&self) -> impl Iterator<Item = (DVec3, f64, [f32; 4])> + '_ {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Circle {
                center,
                radius,
                color,
                ..
            } => Some((*center, *radius, *color)),
            _ => None,
        })
    }
}
