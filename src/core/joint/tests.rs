use super::*;
use approx::assert_relative_eq;

fn params(angle_b: f64, angle_c: f64) -> JointParams {
    JointParams {
        anchor_height: 0.03,
        joint_b: JointInput::new(angle_b, 0.01),
        joint_c: JointInput::new(angle_c, 0.01),
        pruett_distance: 0.005,
        arc_radius: 0.01,
    }
}

/// Abstand eines Punkts zur Geraden durch `a` und `b` (X/Z-Ebene).
fn distance_to_line(p: DVec3, a: DVec3, b: DVec3) -> f64 {
    let dir = (b - a).normalize();
    let rel = p - a;
    (rel - dir * rel.dot(dir)).length()
}

// ── Polar-Offsets ──

#[test]
fn test_polar_to_vector_measures_from_z_axis() {
    let v = polar_to_vector(0.0, 2.0);
    assert_relative_eq!(v.x, 0.0);
    assert_relative_eq!(v.z, 2.0);

    let v = polar_to_vector(std::f64::consts::FRAC_PI_2, 2.0);
    assert_relative_eq!(v.x, 2.0);
    assert_relative_eq!(v.z, 0.0, epsilon = 1e-15);
    assert_eq!(v.y, 0.0);
}

#[test]
fn test_edge_angle_roundtrips_polar_vector() {
    let start = DVec3::new(0.2, 0.0, -0.4);
    for angle in [-2.5, -1.0, 0.0, 0.7, 3.0] {
        let target = start + polar_to_vector(angle, 1.5);
        assert_relative_eq!(edge_angle(start, target), angle, epsilon = 1e-12);
    }
}

// ── Gelenk B ──

#[test]
fn test_zero_angle_b_points_straight_down() {
    let h = 0.03;
    let d = 0.01;
    let geometry = build_joint_geometry(&params(0.0, 0.0));
    assert_eq!(geometry.anchor, DVec3::new(0.0, 0.0, h));
    assert_eq!(geometry.joint_b, DVec3::new(0.0, 0.0, h - d));
}

#[test]
fn test_angle_b_keeps_distance_to_anchor() {
    for angle_b in [-1.2, -0.4, 0.3, 1.5] {
        let geometry = build_joint_geometry(&params(angle_b, 0.2));
        assert_relative_eq!(geometry.anchor.distance(geometry.joint_b), 0.01, epsilon = 1e-15);
    }
}

// ── Gelenk C ──

#[test]
fn test_zero_angle_c_continues_edge_ab() {
    for angle_b in [-0.8, 0.0, 0.5] {
        let geometry = build_joint_geometry(&params(angle_b, 0.0));
        let ab = (geometry.joint_b - geometry.anchor).normalize();
        let bc = (geometry.joint_c - geometry.joint_b).normalize();

        assert_relative_eq!(ab.dot(bc), 1.0, epsilon = 1e-12);
        assert_relative_eq!(geometry.joint_c.x, geometry.edge_extension.x, epsilon = 1e-12);
        assert_relative_eq!(geometry.joint_c.z, geometry.edge_extension.z, epsilon = 1e-12);
        assert!(!geometry.pruett.active);
    }
}

#[test]
fn test_angle_c_deflects_by_its_magnitude_on_both_sides() {
    let angle_c = 30f64.to_radians();
    for angle_b in [-0.6, 0.0, 0.6] {
        let geometry = build_joint_geometry(&params(angle_b, angle_c));
        let ab = (geometry.joint_b - geometry.anchor).normalize();
        let bc = (geometry.joint_c - geometry.joint_b).normalize();
        assert_relative_eq!(ab.dot(bc).acos(), angle_c, epsilon = 1e-12);
        assert_relative_eq!(geometry.joint_b.distance(geometry.joint_c), 0.01, epsilon = 1e-15);
    }
}

#[test]
fn test_known_configuration() {
    // B = (0, 0, 0.02); C liegt 30° neben der senkrechten Kante
    let geometry = build_joint_geometry(&params(0.0, 30f64.to_radians()));
    assert_relative_eq!(geometry.joint_c.x, 0.005, epsilon = 1e-12);
    assert_eq!(geometry.joint_c.y, 0.0);
    assert_relative_eq!(geometry.joint_c.z, 0.02 - 0.01 * 30f64.to_radians().cos(), epsilon = 1e-12);
}

#[test]
fn test_compose_joint_branches() {
    let start = DVec3::ZERO;
    let joint = JointInput::new(0.25, 2.0);

    // +X-Seite: Winkel direkt zur Kantenrichtung addiert
    let right = DVec3::new(1.0, 0.0, 1.0);
    let (offset, edge) = compose_joint(joint, start, right);
    assert_relative_eq!(edge, std::f64::consts::FRAC_PI_4);
    let expected = polar_to_vector(0.25 + edge, 2.0);
    assert_relative_eq!(offset.x, expected.x);
    assert_relative_eq!(offset.z, expected.z);

    // sonst: Abstand negiert, Winkel gespiegelt
    let left = DVec3::new(-1.0, 0.0, 1.0);
    let (offset, edge) = compose_joint(joint, start, left);
    let expected = polar_to_vector(PI - 0.25 + edge, -2.0);
    assert_relative_eq!(offset.x, expected.x);
    assert_relative_eq!(offset.z, expected.z);
}

#[test]
fn test_control_positions_order() {
    let geometry = build_joint_geometry(&params(0.4, -0.3));
    assert_eq!(
        geometry.control_positions(),
        [geometry.anchor, geometry.joint_b, geometry.joint_c]
    );
}

// ── Pruett-Kreis ──

#[test]
fn test_pruett_circle_is_tangent_to_both_edges() {
    for angle_b in [-0.7, 0.0, 0.4] {
        for deg in [-60.0, -25.0, 10.0, 45.0, 80.0] {
            let p = params(angle_b, f64::to_radians(deg));
            let geometry = build_joint_geometry(&p);
            let circle = geometry.pruett;
            let r = circle.radius.abs();

            let to_ab = distance_to_line(circle.center, geometry.anchor, geometry.joint_b);
            let to_bc = distance_to_line(circle.center, geometry.joint_b, geometry.joint_c);
            assert_relative_eq!(to_ab, r, epsilon = 1e-12);
            assert_relative_eq!(to_bc, r, epsilon = 1e-12);

            // Tangentenpunkte liegen `pruett_distance` von B entfernt
            let center_dist = circle.center.distance(geometry.joint_b);
            let tangent_dist = (center_dist * center_dist - r * r).sqrt();
            assert_relative_eq!(tangent_dist, p.pruett_distance, epsilon = 1e-9);
        }
    }
}

#[test]
fn test_pruett_radius_formula() {
    let gamma = 40f64.to_radians();
    let geometry = build_joint_geometry(&params(0.0, gamma));
    let half_beta = (PI - gamma) / 2.0;
    assert_relative_eq!(geometry.pruett.radius, 0.005 * half_beta.tan(), epsilon = 1e-12);

    // negativer Winkel → gleicher Betrag, negatives Vorzeichen
    let mirrored = build_joint_geometry(&params(0.0, -gamma));
    assert_relative_eq!(mirrored.pruett.radius, -geometry.pruett.radius, epsilon = 1e-12);
}

#[test]
fn test_pruett_active_only_above_one_degree() {
    // Raster ohne Werte direkt auf ±1°
    for k in 0..900 {
        let deg = -89.95 + 0.2 * k as f64;
        let geometry = build_joint_geometry(&params(0.3, f64::to_radians(deg)));
        let expected = f64::abs(deg) > 1.0;
        assert_eq!(geometry.pruett.active, expected, "Winkel {deg}°");
    }

    assert!(!build_joint_geometry(&params(0.0, f64::to_radians(0.5))).pruett.active);
    assert!(!build_joint_geometry(&params(0.0, f64::to_radians(-0.9))).pruett.active);
    assert!(build_joint_geometry(&params(0.0, f64::to_radians(1.5))).pruett.active);
    assert!(build_joint_geometry(&params(0.0, f64::to_radians(-1.5))).pruett.active);
}

#[test]
fn test_straight_joint_stays_finite() {
    let geometry = build_joint_geometry(&params(0.2, 0.0));
    assert!(geometry.pruett.radius.is_finite());
    assert!(geometry.pruett.center.is_finite());
}

// ── Winkelbogen ──

#[test]
fn test_angle_arc_runs_from_edge_extension_to_c() {
    for angle_b in [-0.5, 0.0, 0.5] {
        let p = params(angle_b, 35f64.to_radians());
        let geometry = build_joint_geometry(&p);
        let arc = geometry.angle_arc;
        let points = arc.points(16);
        assert_eq!(points.len(), 17);
        assert_relative_eq!(arc.radius, p.arc_radius, epsilon = 1e-15);

        let first = (points[0] - geometry.joint_b).normalize();
        let last = (points[16] - geometry.joint_b).normalize();
        let ab = (geometry.joint_b - geometry.anchor).normalize();
        let bc = (geometry.joint_c - geometry.joint_b).normalize();
        assert_relative_eq!(first.dot(ab), 1.0, epsilon = 1e-12);
        assert_relative_eq!(last.dot(bc), 1.0, epsilon = 1e-12);
        assert_relative_eq!(arc.midpoint().distance(geometry.joint_b), p.arc_radius, epsilon = 1e-15);
    }
}
