//! Application State: zentrale Datenhaltung zwischen zwei Frames.

use crate::core::{BezierSpline, SplineSource};
use crate::shared::{CurveSettings, OverlayOptions};

/// Zustand zwischen zwei Frames.
///
/// Geometrie und Kamm werden jeden Frame neu berechnet; hier liegen nur die
/// Eingaben und die (optionale) Host-Kurve.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Aktuelle Eingaben des Gelenkaufbaus
    pub settings: CurveSettings,
    /// Laufzeit-Optionen (Farben, Auflösung, Start-Eingaben)
    pub options: OverlayOptions,
    /// Aktive Host-Kurve, falls vorhanden
    pub spline: Option<BezierSpline>,
}

impl AppState {
    /// Erstellt einen Zustand mit Standard-Optionen.
    pub fn new() -> Self {
        Self::with_options(OverlayOptions::default())
    }

    /// Übernimmt geladene Optionen; die Eingaben starten mit `options.settings`.
    pub fn with_options(options: OverlayOptions) -> Self {
        Self {
            settings: options.settings,
            options,
            spline: None,
        }
    }

    /// Anzahl der Kontrollpunkte der aktiven Kurve (0 ohne Kurve).
    pub fn spline_point_count(&self) -> usize {
        self.spline
            .as_ref()
            .map_or(0, |spline| spline.control_points().len())
    }
}
