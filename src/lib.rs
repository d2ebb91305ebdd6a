//! Curvature Creator Library.
//! Krümmungsanalyse (Bézier, Kamm, Pruett-Radius) als Library exportiert
//! für Host-Anbindung, Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;

pub use app::{AppState, OverlayCommand, OverlayController, OverlayFrame, OverlayIntent, OverlayLayer};
pub use core::{
    analyze_spline, build_joint_geometry, sample_segment, BezierSpline, ControlPoint, CubicBezier,
    CurveCombSummary, JointGeometry, JointInput, JointParams, SegmentComb, SegmentCombResult,
    SplineComb, SplineSource,
};
pub use render::{JsonSink, OverlaySink, RecordingSink};
pub use shared::{CurveSettings, DrawCommand, LineTopology, OverlayOptions, OverlayScene};
