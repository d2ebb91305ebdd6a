//! Berechnung eines Overlay-Frames: Gelenke, Kurve nachführen, Kamm.

use crate::app::AppState;
use crate::core::{analyze_spline, build_joint_geometry, JointGeometry, SplineComb, SplineSource};

/// Anzahl der Kurvenpunkte, die den Gelenken A, B und C folgen.
const JOINT_POINT_COUNT: usize = 3;

/// Ergebnis eines Frames, Eingabe für den Szenen-Builder.
#[derive(Debug, Clone)]
pub struct OverlayFrame {
    /// Gelenk-Geometrie des Frames
    pub geometry: JointGeometry,
    /// Krümmungskamm, wenn eingeschaltet und berechenbar
    pub comb: Option<SplineComb>,
    /// Radien an A, B, C: `bevel_depth · point.radius` (0 ohne Kurvenpunkt)
    pub point_radii: [f64; JOINT_POINT_COUNT],
}

/// Berechnet einen Frame und führt die Host-Kurve auf A/B/C nach.
///
/// Ein Kamm mit weniger als zwei Kurvenpunkten wird mit Warnung übersprungen;
/// ungültige Kamm-Parameter (`comb_steps == 0`) sind ein Fehler.
pub fn compute(state: &mut AppState) -> anyhow::Result<OverlayFrame> {
    let settings = state.settings;
    let geometry = build_joint_geometry(&settings.joint_params());

    let mut comb = None;
    let mut point_radii = [0.0; JOINT_POINT_COUNT];

    if let Some(spline) = state.spline.as_mut() {
        spline.apply_positions(&geometry.control_positions());

        for (radius, point) in point_radii.iter_mut().zip(spline.control_points()) {
            *radius = settings.bevel_depth * point.radius;
        }

        if settings.show_comb {
            let point_count = spline.control_points().len();
            if point_count >= 2 {
                comb = Some(analyze_spline(
                    &*spline,
                    settings.comb_scale,
                    settings.comb_steps,
                )?);
            } else {
                log::warn!(
                    "Krümmungskamm übersprungen: Kurve hat nur {} Punkt(e)",
                    point_count
                );
            }
        }
    } else if settings.show_comb {
        log::warn!("Krümmungskamm übersprungen: keine aktive Kurve");
    }

    log::debug!(
        "Frame: B={:?}, C={:?}, Pruett aktiv={}, Kamm={}",
        geometry.joint_b,
        geometry.joint_c,
        geometry.pruett.active,
        comb.is_some()
    );

    Ok(OverlayFrame {
        geometry,
        comb,
        point_radii,
    })
}
