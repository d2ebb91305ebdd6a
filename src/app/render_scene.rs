//! Builder für Overlay-Szenen aus AppState und berechnetem Frame.

use crate::app::use_cases::frame::OverlayFrame;
use crate::app::AppState;
use crate::core::{from_plane, JointGeometry, SegmentComb};
use crate::shared::{DrawCommand, LineTopology, OverlayOptions, OverlayScene};
use glam::DVec3;

/// Versatz der Winkelbeschriftung von der Bogenmitte (Welt).
const ANGLE_LABEL_WORLD_OFFSET: DVec3 = DVec3::new(-0.0005, 0.0, -0.0005);
/// Versatz der Winkelbeschriftung (Pixel).
const ANGLE_LABEL_OFFSET_PX: [f32; 2] = [0.0, 20.0];
/// Versatz der Punktbeschriftungen links vom Marker (Pixel).
const POINT_LABEL_OFFSET_PX: [f32; 2] = [-40.0, 0.0];

/// Baut die Overlay-Szene eines Frames.
///
/// Reihenfolge: Winkelbogen, Pruett-Kreis, Kamm-Kreis, Gelenklinien,
/// Kamm je Segment, danach alle Beschriftungen.
pub fn build(state: &AppState, frame: &OverlayFrame) -> OverlayScene {
    let options = &state.options;
    let settings = &state.settings;
    let geometry = &frame.geometry;
    let mut scene = OverlayScene::new();

    scene.push(DrawCommand::Polyline {
        points: geometry.angle_arc.points(options.arc_segments as usize),
        topology: LineTopology::LineStrip,
        color: options.joint_line_color,
    });

    if settings.show_pruett && geometry.pruett.active {
        scene.push(DrawCommand::Circle {
            center: geometry.pruett.center,
            radius: geometry.pruett.radius.abs(),
            segments: options.circle_segments,
            color: options.pruett_color,
        });
    }

    if settings.show_comb_circle {
        if let Some(comb) = &frame.comb {
            let radius = comb.summary.max_curvature_radius.abs();
            if radius > 0.0 {
                scene.push(DrawCommand::Circle {
                    center: from_plane(comb.summary.max_curvature_point),
                    radius,
                    segments: options.circle_segments,
                    color: options.comb_circle_color,
                });
            }
        }
    }

    scene.push(DrawCommand::Polyline {
        points: vec![
            geometry.anchor,
            geometry.joint_b,
            geometry.joint_b,
            geometry.joint_c,
            geometry.joint_b,
            geometry.edge_extension,
        ],
        topology: LineTopology::Lines,
        color: options.joint_line_color,
    });

    if let Some(comb) = &frame.comb {
        for segment in &comb.segments {
            push_segment_comb(&mut scene, segment, options);
        }
    }

    push_labels(&mut scene, state, frame);
    scene
}

/// Kurve, Kamm-Hüllkurve und Kamm-Zähne eines Segments.
fn push_segment_comb(scene: &mut OverlayScene, segment: &SegmentComb, options: &OverlayOptions) {
    let curve = segment
        .samples
        .iter()
        .map(|s| from_plane(s.position))
        .collect();
    let envelope = segment
        .samples
        .iter()
        .map(|s| from_plane(s.comb_point))
        .collect();
    let teeth = segment
        .samples
        .iter()
        .flat_map(|s| [from_plane(s.position), from_plane(s.comb_point)])
        .collect();

    scene.push(DrawCommand::Polyline {
        points: curve,
        topology: LineTopology::LineStrip,
        color: options.curve_color,
    });
    scene.push(DrawCommand::Polyline {
        points: envelope,
        topology: LineTopology::LineStrip,
        color: options.comb_color,
    });
    scene.push(DrawCommand::Polyline {
        points: teeth,
        topology: LineTopology::Lines,
        color: options.comb_line_color,
    });
}

fn push_labels(scene: &mut OverlayScene, state: &AppState, frame: &OverlayFrame) {
    let options = &state.options;
    let settings = &state.settings;
    let geometry = &frame.geometry;
    let summary = frame.comb.as_ref().map(|c| c.summary).unwrap_or_default();

    // Kennzahlen rechts neben A, zeilenweise nach unten
    let summary_lines = [
        (
            format!("L = {:.2} mm", options.to_display(summary.total_length)),
            options.text_color,
        ),
        (
            format!(
                "K = {:.2}(A = {:.2})",
                summary.mean_curvature, summary.mean_abs_curvature
            ),
            options.text_color,
        ),
        (
            format!(
                "R = {:.2} mm",
                options.to_display(geometry.pruett.radius.abs())
            ),
            options.pruett_color,
        ),
        (
            format!(
                "R = {:.2} mm",
                options.to_display(summary.max_curvature_radius.abs())
            ),
            options.comb_circle_color,
        ),
    ];
    for (row, (text, color)) in summary_lines.into_iter().enumerate() {
        scene.push(DrawCommand::Text {
            anchor: geometry.anchor,
            offset_px: [
                options.summary_offset_x_px,
                -options.label_line_height_px * row as f32,
            ],
            text,
            color,
        });
    }

    scene.push(DrawCommand::Marker {
        anchor: geometry.joint_c,
        radius_px: options.marker_radius_px,
        color: options.text_color,
    });
    scene.push(DrawCommand::Text {
        anchor: geometry.angle_arc.midpoint() + ANGLE_LABEL_WORLD_OFFSET,
        offset_px: ANGLE_LABEL_OFFSET_PX,
        text: format!("{:.2} °", settings.joint_c.angle.to_degrees()),
        color: options.text_color,
    });

    push_point_labels(scene, geometry, frame.point_radii, options);

    for (start, end, distance) in [
        (geometry.anchor, geometry.joint_b, settings.joint_b.distance),
        (geometry.joint_b, geometry.joint_c, settings.joint_c.distance),
    ] {
        scene.push(DrawCommand::Text {
            anchor: start.lerp(end, 0.5),
            offset_px: [0.0, 0.0],
            text: format!("{}{:.2} mm", " ".repeat(10), options.to_display(distance)),
            color: options.text_color,
        });
    }
}

/// Marker und Radius-Beschriftung für A, B und C.
fn push_point_labels(
    scene: &mut OverlayScene,
    geometry: &JointGeometry,
    radii: [f64; 3],
    options: &OverlayOptions,
) {
    let points = [
        ("A", 10, geometry.anchor, options.point_a_color),
        ("B", 14, geometry.joint_b, options.point_b_color),
        ("C", 10, geometry.joint_c, options.point_c_color),
    ];
    for ((name, gap, anchor, color), radius) in points.into_iter().zip(radii) {
        scene.push(DrawCommand::Marker {
            anchor,
            radius_px: options.marker_radius_px,
            color,
        });
        scene.push(DrawCommand::Text {
            anchor,
            offset_px: POINT_LABEL_OFFSET_PX,
            text: format!(
                "{}{}R = {:.2} mm",
                name,
                " ".repeat(gap),
                options.to_display(radius)
            ),
            color,
        });
    }
}
