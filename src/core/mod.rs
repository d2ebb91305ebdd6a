//! Core-Geometrie: Bézier-Auswertung, Krümmungskamm und Gelenkwinkel-Aufbau.

pub mod bezier;
pub mod comb;
/// Gelenkwinkel-Kurvenaufbau
///
/// Punkte A/B/C aus Höhe und zwei Polar-Offsets, dazu Pruett-Kreis,
/// Kantenverlängerung und Winkelbogen.
pub mod joint;
pub mod spline;
pub mod spline_comb;

pub use bezier::{CubicBezier, DEGENERATE_EPSILON};
pub use comb::{sample_segment, CombSample, SegmentComb, SegmentCombResult};
pub use joint::{
    build_joint_geometry, compose_joint, edge_angle, polar_to_vector, pruett_circle, AngleArc,
    JointGeometry, JointInput, JointParams, PruettCircle,
};
pub use spline::{from_plane, to_plane, BezierSpline, ControlPoint, HandleMode, SplineSource};
pub use spline_comb::{analyze_spline, CurveCombSummary, SplineComb, MAX_CURVATURE_SEGMENT};
