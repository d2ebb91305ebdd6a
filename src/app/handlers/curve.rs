//! Handler für die Host-Kurve.

use crate::app::AppState;
use crate::core::{build_joint_geometry, BezierSpline};
use crate::shared::options::CREATED_CURVE_BEVEL_DEPTH;

/// Erzeugt eine 3-Punkt-Kurve durch A, B und C mit automatischen Handles.
///
/// Eine vorhandene Kurve wird ersetzt.
pub fn create_curve(state: &mut AppState) {
    let geometry = build_joint_geometry(&state.settings.joint_params());
    state.spline = Some(BezierSpline::with_auto_handles(
        &geometry.control_positions(),
    ));
    state.settings.bevel_depth = CREATED_CURVE_BEVEL_DEPTH;

    log::info!(
        "Kurve erzeugt: A={:?}, B={:?}, C={:?}",
        geometry.anchor,
        geometry.joint_b,
        geometry.joint_c
    );
}
