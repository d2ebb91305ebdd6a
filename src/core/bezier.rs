//! Kubische Bézier-Segmente in der Ebene: Position, Ableitungen, Tangente, Normale, Krümmung.
//!
//! Alle Funktionen sind rein und hängen nur von `(Kurve, t)` ab.

use glam::DVec2;

/// Unterhalb dieser Geschwindigkeit (|B'(t)|) gilt ein Sample als degeneriert.
pub const DEGENERATE_EPSILON: f64 = 1e-12;

/// Kubisches Bézier-Segment mit vier Kontrollpunkten P0..P3.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    /// Startpunkt
    pub p0: DVec2,
    /// Erster Steuerpunkt (rechter Handle des Startpunkts)
    pub p1: DVec2,
    /// Zweiter Steuerpunkt (linker Handle des Endpunkts)
    pub p2: DVec2,
    /// Endpunkt
    pub p3: DVec2,
}

impl CubicBezier {
    /// Erstellt ein Segment aus vier Kontrollpunkten.
    pub fn new(p0: DVec2, p1: DVec2, p2: DVec2, p3: DVec2) -> Self {
        Self { p0, p1, p2, p3 }
    }

    /// B(t) = (1-t)³·P0 + 3(1-t)²t·P1 + 3(1-t)t²·P2 + t³·P3
    pub fn position(&self, t: f64) -> DVec2 {
        // Endpunkte exakt, ohne Rundung durch die Bernstein-Gewichte
        if t == 0.0 {
            return self.p0;
        }
        if t == 1.0 {
            return self.p3;
        }
        let inv = 1.0 - t;
        let inv2 = inv * inv;
        let t2 = t * t;
        inv2 * inv * self.p0 + 3.0 * inv2 * t * self.p1 + 3.0 * inv * t2 * self.p2 + t2 * t * self.p3
    }

    /// B'(t) = 3·[(1-t)²·(P1-P0) + 2(1-t)t·(P2-P1) + t²·(P3-P2)]
    pub fn derivative(&self, t: f64) -> DVec2 {
        let inv = 1.0 - t;
        3.0 * (inv * inv * (self.p1 - self.p0)
            + 2.0 * inv * t * (self.p2 - self.p1)
            + t * t * (self.p3 - self.p2))
    }

    /// B''(t) = 6·[(1-t)·(P2-2P1+P0) + t·(P3-2P2+P1)]
    pub fn second_derivative(&self, t: f64) -> DVec2 {
        6.0 * ((1.0 - t) * (self.p2 - 2.0 * self.p1 + self.p0)
            + t * (self.p3 - 2.0 * self.p2 + self.p1))
    }

    /// Einheits-Tangente. Liefert `DVec2::ZERO` an Spitzen mit |B'(t)| < ε.
    pub fn tangent(&self, t: f64) -> DVec2 {
        let d = self.derivative(t);
        let len = d.length();
        if len < DEGENERATE_EPSILON {
            return DVec2::ZERO;
        }
        d / len
    }

    /// Einheits-Normale: Tangente um +90° (gegen den Uhrzeigersinn) gedreht, `(-ty, tx)`.
    ///
    /// Bei einer gegen den Uhrzeigersinn durchlaufenen konvexen Kurve zeigt die
    /// Normale zum Krümmungsmittelpunkt und die Krümmung ist positiv.
    pub fn normal(&self, t: f64) -> DVec2 {
        self.tangent(t).perp()
    }

    /// Vorzeichenbehaftete Krümmung κ = (x'·y'' − y'·x'') / (x'² + y'²)^1.5.
    ///
    /// Gibt 0.0 zurück, wenn |B'(t)| unter ε fällt (gleiche Schwelle wie [`Self::tangent`]).
    pub fn curvature(&self, t: f64) -> f64 {
        let d1 = self.derivative(t);
        let d2 = self.second_derivative(t);
        let speed = d1.length();
        if speed < DEGENERATE_EPSILON {
            return 0.0;
        }
        d1.perp_dot(d2) / (speed * speed * speed)
    }
}
