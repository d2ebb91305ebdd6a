//! Gelenkwinkel-Kurvenaufbau: Punkte A/B/C aus zwei Polar-Offsets und der Pruett-Kreis.
//!
//! Alle Winkel liegen in der X/Z-Ebene und werden von der +Z-Achse aus
//! gemessen: `polar_to_vector(a, d) = (sin(a)·d, 0, cos(a)·d)`.

use glam::DVec3;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Unterhalb dieses Gelenkwinkels (Grad) wird kein Pruett-Kreis gezeigt.
pub const PRUETT_MIN_ANGLE_DEG: f64 = 1.0;

/// Winkel (Radiant) und Abstand eines Gelenks relativ zum vorherigen Punkt.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct JointInput {
    /// Winkel in Radiant, vorgesehen für [−π/2, π/2]
    pub angle: f64,
    /// Vorzeichenbehafteter Abstand
    pub distance: f64,
}

impl JointInput {
    pub fn new(angle: f64, distance: f64) -> Self {
        Self { angle, distance }
    }
}

/// Eingaben für einen Frame des Gelenkaufbaus.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JointParams {
    /// Höhe des Ankers A über dem Ursprung (Z)
    pub anchor_height: f64,
    /// Gelenk B relativ zu A
    pub joint_b: JointInput,
    /// Gelenk C relativ zur Kante A→B
    pub joint_c: JointInput,
    /// Abstand der Tangentenpunkte des Pruett-Kreises von B
    pub pruett_distance: f64,
    /// Radius des Winkel-Indikators um B
    pub arc_radius: f64,
}

/// Osculating-Kreis am Gelenk B ("Pruett-Radius").
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PruettCircle {
    pub center: DVec3,
    /// Vorzeichenbehaftet: negativ bei negativem Gelenkwinkel
    pub radius: f64,
    /// false bei |Winkel| ≤ 1° (nahezu gerade, numerisch instabil)
    pub active: bool,
}

/// Bogen um B, der den Gelenkwinkel anzeigt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleArc {
    pub center: DVec3,
    /// Startwinkel (Richtung der Kante A→B)
    pub start_angle: f64,
    /// Überstrichener Winkel
    pub sweep: f64,
    pub radius: f64,
}

impl AngleArc {
    /// Punkt auf dem Bogen, `s ∈ [0, 1]`.
    pub fn point_at(&self, s: f64) -> DVec3 {
        self.center + polar_to_vector(self.start_angle + self.sweep * s, self.radius)
    }

    /// Bogen als Polylinie mit `segments + 1` Punkten.
    pub fn points(&self, segments: usize) -> Vec<DVec3> {
        let segments = segments.max(1);
        (0..=segments)
            .map(|i| self.point_at(i as f64 / segments as f64))
            .collect()
    }

    /// Bogenmitte, Anker für die Winkelbeschriftung.
    pub fn midpoint(&self) -> DVec3 {
        self.point_at(0.5)
    }
}

/// Vollständige Gelenk-Geometrie eines Frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JointGeometry {
    /// Anker A = (0, 0, Höhe)
    pub anchor: DVec3,
    pub joint_b: DVec3,
    pub joint_c: DVec3,
    /// Richtung der Kante A→B
    pub edge_angle_ab: f64,
    /// Verlängerung der Kante A→B über B hinaus (Länge = Abstand C)
    pub edge_extension: DVec3,
    pub pruett: PruettCircle,
    pub angle_arc: AngleArc,
}

impl JointGeometry {
    /// Die drei Positionen, die der Host auf seine Kurvenpunkte überträgt.
    pub fn control_positions(&self) -> [DVec3; 3] {
        [self.anchor, self.joint_b, self.joint_c]
    }
}

/// `(sin(angle)·distance, 0, cos(angle)·distance)`
pub fn polar_to_vector(angle: f64, distance: f64) -> DVec3 {
    DVec3::new(angle.sin() * distance, 0.0, angle.cos() * distance)
}

/// Richtung der Kante `start → target` in der X/Z-Ebene.
pub fn edge_angle(start: DVec3, target: DVec3) -> f64 {
    (target.x - start.x).atan2(target.z - start.z)
}

/// Offset des nächsten Gelenks, gemessen relativ zur Kante `start → target`.
///
/// Liegt `target` auf der +X-Seite, wird der Winkel direkt zur Kantenrichtung
/// addiert. Sonst wird der Abstand negiert und der Winkel zu `π − angle`
/// gespiegelt. Die beiden Zweige sind in Gleitkomma nicht äquivalent und
/// bleiben getrennt.
///
/// Liefert den Offset-Vektor und die Kantenrichtung.
pub fn compose_joint(joint: JointInput, start: DVec3, target: DVec3) -> (DVec3, f64) {
    let edge = edge_angle(start, target);
    let mut distance = joint.distance;
    let mut angle = joint.angle;

    if target.x > 0.0 {
        angle += edge;
    } else {
        distance *= -1.0;
        angle = PI - angle;
        angle += edge;
    }

    (polar_to_vector(angle, distance), edge)
}

/// Pruett-Kreis am Gelenk `b` zwischen den Kanten `a → b` und `b → c`.
///
/// Tangentenpunkte liegen `distance` vor bzw. hinter `b`; der Mittelpunkt
/// liegt auf der Winkelhalbierenden. Mit β = π − γ gilt
/// `o = distance / cos(β/2)` und `radius = o · sin(β/2)`.
pub fn pruett_circle(a: DVec3, b: DVec3, c: DVec3, gamma: f64, distance: f64) -> PruettCircle {
    let outgoing = polar_to_vector(edge_angle(b, c), 1.0);
    let incoming = polar_to_vector(edge_angle(a, b), 1.0);

    let tangent_in = b - incoming * distance;
    let tangent_out = b + outgoing * distance;
    let bisector_target = tangent_in.lerp(tangent_out, 0.5);
    let bisector = polar_to_vector(edge_angle(b, bisector_target), 1.0);

    let beta = PI - gamma;
    let o = distance / (beta / 2.0).cos();
    let radius = o * (beta / 2.0).sin();

    let center = if gamma < 0.0 {
        b - bisector * o
    } else {
        b + bisector * o
    };

    PruettCircle {
        center,
        radius,
        active: gamma.to_degrees().abs() > PRUETT_MIN_ANGLE_DEG,
    }
}

/// Baut A, B, C, Kantenverlängerung, Pruett-Kreis und Winkelbogen.
pub fn build_joint_geometry(params: &JointParams) -> JointGeometry {
    let anchor = DVec3::new(0.0, 0.0, params.anchor_height);
    let joint_b = anchor + polar_to_vector(params.joint_b.angle, -params.joint_b.distance);

    let (offset_c, edge_angle_ab) = compose_joint(params.joint_c, anchor, joint_b);
    let joint_c = joint_b + offset_c;
    let edge_extension = joint_b + polar_to_vector(edge_angle_ab, params.joint_c.distance);

    let pruett = pruett_circle(
        anchor,
        joint_b,
        joint_c,
        params.joint_c.angle,
        params.pruett_distance,
    );

    // gleiche Seitenwahl wie in `compose_joint`, damit der Bogen bei C endet
    let sweep = if joint_b.x > 0.0 {
        params.joint_c.angle
    } else {
        -params.joint_c.angle
    };
    let arc_start = joint_b + polar_to_vector(edge_angle_ab, params.arc_radius);
    let angle_arc = AngleArc {
        center: joint_b,
        start_angle: edge_angle_ab,
        sweep,
        radius: (arc_start - joint_b).length(),
    };

    JointGeometry {
        anchor,
        joint_b,
        joint_c,
        edge_angle_ab,
        edge_extension,
        pruett,
        angle_arc,
    }
}

#[cfg(test)]
mod tests;
