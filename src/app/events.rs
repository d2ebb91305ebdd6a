//! OverlayIntent- und OverlayCommand-Enums für den Intent/Command-Datenfluss.

use crate::core::JointInput;
use crate::shared::CurveSettings;

/// Schaltbare Overlay-Ebenen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayLayer {
    /// Pruett-Kreis am Gelenk B
    Pruett,
    /// Krümmungskamm der Host-Kurve
    Comb,
    /// Kreis am Maximalpunkt des Kamms
    CombCircle,
}

/// Intents sind Eingaben aus Panel/Host ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum OverlayIntent {
    /// Ansicht ein-/ausschalten
    ToggleViewRequested,
    /// Ansicht explizit einschalten
    EnableViewRequested,
    /// Ansicht explizit ausschalten
    DisableViewRequested,
    /// Neue 3-Punkt-Kurve aus den aktuellen Gelenken erzeugen
    CreateCurveRequested,
    /// Ankerhöhe geändert
    CurveHeightChanged { height: f64 },
    /// Winkel/Abstand von B geändert
    JointBChanged { joint: JointInput },
    /// Winkel/Abstand von C geändert
    JointCChanged { joint: JointInput },
    /// Abstand der Pruett-Tangentenpunkte geändert
    PruettDistanceChanged { distance: f64 },
    /// Radius des Winkelbogens geändert
    AngleArcRadiusChanged { radius: f64 },
    /// Kamm-Schritte geändert (Panel-Minimum 1)
    CombStepsChanged { steps: usize },
    /// Kamm-Überhöhung geändert
    CombScaleChanged { scale: f64 },
    /// Bevel-Tiefe der Host-Kurve geändert
    BevelDepthChanged { depth: f64 },
    /// Sichtbarkeit einer Overlay-Ebene umschalten
    LayerToggled { layer: OverlayLayer },
    /// Alle Eingaben auf die Start-Werte der Optionen zurücksetzen
    ResetSettingsRequested,
}

/// Commands sind ausführbare, mutierende Schritte auf dem AppState.
#[derive(Debug, Clone, PartialEq)]
pub enum OverlayCommand {
    /// Ansicht ein- oder ausschalten
    SetViewEnabled { enabled: bool },
    /// Ansicht umschalten
    ToggleView,
    /// 3-Punkt-Kurve mit automatischen Handles erzeugen
    CreateCurve,
    /// Ankerhöhe setzen
    SetCurveHeight { height: f64 },
    /// Gelenk B setzen
    SetJointB { joint: JointInput },
    /// Gelenk C setzen
    SetJointC { joint: JointInput },
    /// Pruett-Abstand setzen
    SetPruettDistance { distance: f64 },
    /// Winkelbogen-Radius setzen
    SetAngleArcRadius { radius: f64 },
    /// Kamm-Schritte setzen
    SetCombSteps { steps: usize },
    /// Kamm-Überhöhung setzen
    SetCombScale { scale: f64 },
    /// Bevel-Tiefe setzen
    SetBevelDepth { depth: f64 },
    /// Sichtbarkeit einer Ebene setzen
    SetLayerVisible { layer: OverlayLayer, visible: bool },
    /// Alle Eingaben ersetzen
    ApplySettings { settings: CurveSettings },
}
