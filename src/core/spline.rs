//! Schmale Lese-Schnittstelle auf die Host-Kurve plus In-Memory-Implementierung.
//!
//! Die Analyse arbeitet in der X/Z-Ebene des Hosts: `to_plane` bildet (x, z)
//! auf (x, y) ab, `from_plane` legt 2D-Punkte wieder bei y = 0 in die Szene.

use super::bezier::CubicBezier;
use glam::{DVec2, DVec3};

/// Host-Konstante für automatische Handles (Handle-Länge ≈ Sehnenanteil / 2.5614).
const AUTO_HANDLE_FACTOR: f64 = 2.5614;

/// Abtastungen pro Segment für die Polylinien-Länge.
const LENGTH_SAMPLES_PER_SEGMENT: usize = 128;

/// Projiziert einen Szenenpunkt in die Analyse-Ebene (x, z) → (x, y).
pub fn to_plane(v: DVec3) -> DVec2 {
    DVec2::new(v.x, v.z)
}

/// Legt einen Ebenenpunkt zurück in die Szene: (x, y) → (x, 0, y).
pub fn from_plane(p: DVec2) -> DVec3 {
    DVec3::new(p.x, 0.0, p.y)
}

/// Bézier-Kontrollpunkt der Host-Kurve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlPoint {
    /// Position des Punkts
    pub position: DVec3,
    /// Linker Handle (Richtung vorheriger Punkt)
    pub handle_left: DVec3,
    /// Rechter Handle (Richtung nächster Punkt)
    pub handle_right: DVec3,
    /// Radius-Faktor des Punkts (skaliert die Bevel-Tiefe)
    pub radius: f64,
}

impl ControlPoint {
    /// Punkt ohne Handle-Auslenkung, Radius 1.0.
    pub fn new(position: DVec3) -> Self {
        Self {
            position,
            handle_left: position,
            handle_right: position,
            radius: 1.0,
        }
    }
}

/// Read-only Adapter auf eine Host-Kurve.
///
/// Mehr als geordnete Kontrollpunkte und die Länge braucht die Analyse nicht.
pub trait SplineSource {
    /// Kontrollpunkte in Kurvenreihenfolge.
    fn control_points(&self) -> &[ControlPoint];

    /// Bogenlänge der Kurve, vom Host gemessen.
    fn length(&self) -> f64;

    /// Baut das ebene Bézier-Segment zwischen Punkt `index` und `index + 1`.
    fn segment(&self, index: usize) -> Option<CubicBezier> {
        let points = self.control_points();
        let a = points.get(index)?;
        let b = points.get(index + 1)?;
        Some(CubicBezier::new(
            to_plane(a.position),
            to_plane(a.handle_right),
            to_plane(b.handle_left),
            to_plane(b.position),
        ))
    }

    /// Anzahl der Segmente (Punkte − 1).
    fn segment_count(&self) -> usize {
        self.control_points().len().saturating_sub(1)
    }
}

/// Handle-Modus der In-Memory-Kurve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HandleMode {
    /// Handles werden nach jeder Positionsänderung neu berechnet
    #[default]
    Automatic,
    /// Handles bleiben wie gesetzt und wandern mit dem Punkt mit
    Free,
}

/// Einfache Bézier-Spline, die den Host im Standalone-Betrieb ersetzt.
#[derive(Debug, Clone, Default)]
pub struct BezierSpline {
    points: Vec<ControlPoint>,
    handle_mode: HandleMode,
}

impl BezierSpline {
    /// Erstellt eine Spline durch `positions` mit automatischen Handles.
    pub fn with_auto_handles(positions: &[DVec3]) -> Self {
        let mut spline = Self {
            points: positions.iter().copied().map(ControlPoint::new).collect(),
            handle_mode: HandleMode::Automatic,
        };
        spline.recalculate_handles();
        spline
    }

    /// Übernimmt fertige Kontrollpunkte unverändert (freie Handles).
    pub fn from_points(points: Vec<ControlPoint>) -> Self {
        Self {
            points,
            handle_mode: HandleMode::Free,
        }
    }

    /// Aktueller Handle-Modus.
    pub fn handle_mode(&self) -> HandleMode {
        self.handle_mode
    }

    /// Setzt die Radius-Faktoren aller Punkte (überzählige Werte werden ignoriert).
    pub fn set_radii(&mut self, radii: &[f64]) {
        for (point, radius) in self.points.iter_mut().zip(radii) {
            point.radius = *radius;
        }
    }

    /// Verschiebt die ersten `positions.len()` Punkte auf neue Positionen.
    ///
    /// Bei freien Handles wandern die Handles mit; bei automatischen Handles
    /// wird die gesamte Kurve neu geglättet.
    pub fn apply_positions(&mut self, positions: &[DVec3]) {
        for (point, &position) in self.points.iter_mut().zip(positions) {
            let delta = position - point.position;
            point.position = position;
            point.handle_left += delta;
            point.handle_right += delta;
        }
        if self.handle_mode == HandleMode::Automatic {
            self.recalculate_handles();
        }
    }

    /// Berechnet automatische Handles wie der Host.
    ///
    /// Fehlende Nachbarn an den Enden werden gespiegelt. Die Handle-Richtung
    /// ist die Summe der normierten Sehnen, die Länge proportional zur
    /// jeweiligen Sehne.
    pub fn recalculate_handles(&mut self) {
        let n = self.points.len();
        if n < 2 {
            for point in &mut self.points {
                point.handle_left = point.position;
                point.handle_right = point.position;
            }
            return;
        }

        let positions: Vec<DVec3> = self.points.iter().map(|p| p.position).collect();
        for (i, point) in self.points.iter_mut().enumerate() {
            let current = positions[i];
            let prev = if i > 0 {
                positions[i - 1]
            } else {
                2.0 * current - positions[i + 1]
            };
            let next = if i + 1 < n {
                positions[i + 1]
            } else {
                2.0 * current - positions[i - 1]
            };

            let dvec_a = current - prev;
            let dvec_b = next - current;
            let len_a = non_zero_length(dvec_a);
            let len_b = non_zero_length(dvec_b);

            let tvec = dvec_b / len_b + dvec_a / len_a;
            let len = tvec.length() * AUTO_HANDLE_FACTOR;
            if len < f64::EPSILON {
                point.handle_left = current;
                point.handle_right = current;
                continue;
            }
            point.handle_left = current - tvec * (len_a / len);
            point.handle_right = current + tvec * (len_b / len);
        }
    }
}

impl SplineSource for BezierSpline {
    fn control_points(&self) -> &[ControlPoint] {
        &self.points
    }

    /// Approximierte Bogenlänge über eine dichte Polylinie (3D).
    fn length(&self) -> f64 {
        self.points
            .windows(2)
            .map(|w| {
                segment_length(
                    [w[0].position, w[0].handle_right, w[1].handle_left, w[1].position],
                    LENGTH_SAMPLES_PER_SEGMENT,
                )
            })
            .sum()
    }
}

fn non_zero_length(v: DVec3) -> f64 {
    let len = v.length();
    if len < f64::EPSILON {
        1.0
    } else {
        len
    }
}

fn cubic_point(cp: &[DVec3; 4], t: f64) -> DVec3 {
    let inv = 1.0 - t;
    let inv2 = inv * inv;
    let t2 = t * t;
    inv2 * inv * cp[0] + 3.0 * inv2 * t * cp[1] + 3.0 * inv * t2 * cp[2] + t2 * t * cp[3]
}

fn segment_length(cp: [DVec3; 4], samples: usize) -> f64 {
    let mut length = 0.0;
    let mut prev = cp[0];
    for i in 1..=samples {
        let t = i as f64 / samples as f64;
        let p = cubic_point(&cp, t);
        length += prev.distance(p);
        prev = p;
    }
    length
}
