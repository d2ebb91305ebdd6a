//! Handler für die Eingaben des Gelenkaufbaus und die Overlay-Schalter.

use crate::app::{AppState, OverlayLayer};
use crate::core::JointInput;
use crate::shared::CurveSettings;

/// Setzt die Ankerhöhe.
pub fn set_curve_height(state: &mut AppState, height: f64) {
    state.settings.curve_height = height;
}

/// Setzt Gelenk B.
pub fn set_joint_b(state: &mut AppState, joint: JointInput) {
    state.settings.joint_b = joint;
}

/// Setzt Gelenk C.
pub fn set_joint_c(state: &mut AppState, joint: JointInput) {
    state.settings.joint_c = joint;
}

/// Setzt den Abstand der Pruett-Tangentenpunkte.
pub fn set_pruett_distance(state: &mut AppState, distance: f64) {
    state.settings.pruett_distance = distance;
}

/// Setzt den Radius des Winkelbogens.
pub fn set_angle_arc_radius(state: &mut AppState, radius: f64) {
    state.settings.angle_arc_radius = radius;
}

/// Setzt die Kamm-Schritte.
pub fn set_comb_steps(state: &mut AppState, steps: usize) {
    state.settings.comb_steps = steps;
}

/// Setzt die Kamm-Überhöhung.
pub fn set_comb_scale(state: &mut AppState, scale: f64) {
    state.settings.comb_scale = scale;
}

/// Setzt die Bevel-Tiefe der Host-Kurve.
pub fn set_bevel_depth(state: &mut AppState, depth: f64) {
    state.settings.bevel_depth = depth;
}

/// Blendet eine Overlay-Ebene ein oder aus.
pub fn set_layer_visible(state: &mut AppState, layer: OverlayLayer, visible: bool) {
    let flag = match layer {
        OverlayLayer::Pruett => &mut state.settings.show_pruett,
        OverlayLayer::Comb => &mut state.settings.show_comb,
        OverlayLayer::CombCircle => &mut state.settings.show_comb_circle,
    };
    *flag = visible;
    log::debug!("Ebene {:?} sichtbar: {}", layer, visible);
}

/// Ersetzt alle Eingaben.
pub fn apply_settings(state: &mut AppState, settings: CurveSettings) {
    state.settings = settings;
    log::info!("Kurven-Eingaben zurückgesetzt");
}
