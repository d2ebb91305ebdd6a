//! Krümmungskamm eines einzelnen Bézier-Segments.
//!
//! Tastet das Segment in `steps` gleichmäßigen Schritten ab, bildet für jedes
//! Sample den Kamm-Punkt (Position + skalierte Normale) und führt laufende
//! Krümmungssummen sowie das Sample mit maximaler Betragskrümmung mit.

use super::bezier::CubicBezier;
use glam::DVec2;

/// Ein einzelnes Kamm-Sample (nur für den Render-Kollaborateur aufbewahrt).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CombSample {
    /// Kurvenparameter ∈ [0, 1]
    pub t: f64,
    /// Punkt auf der Kurve
    pub position: DVec2,
    /// Vorzeichenbehaftete Krümmung
    pub curvature: f64,
    /// Spitze des Kamm-Zahns
    pub comb_point: DVec2,
}

/// Kennzahlen eines abgetasteten Segments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentCombResult {
    /// Σ κ über alle Samples
    pub curvature_sum: f64,
    /// Σ |κ| über alle Samples
    pub curvature_abs_sum: f64,
    /// Anzahl der Samples (`steps + 1`)
    pub sample_count: usize,
    /// Position gegenüber dem Kamm-Zahn mit maximaler Betragskrümmung
    pub max_curvature_point: DVec2,
    /// Vorzeichenbehaftete Krümmung mit dem größten Betrag
    pub max_curvature_value: f64,
}

impl SegmentCombResult {
    /// Mittlere Krümmung des Segments.
    pub fn mean_curvature(&self) -> f64 {
        self.curvature_sum / self.sample_count as f64
    }
}

/// Ergebnis + geordnete Samples eines Segments.
#[derive(Debug, Clone)]
pub struct SegmentComb {
    pub result: SegmentCombResult,
    pub samples: Vec<CombSample>,
}

/// Tastet `curve` bei `t = i / steps` für `i ∈ 0..=steps` ab.
///
/// `scale` überhöht die Kamm-Zähne optisch. Der Kamm-Punkt liegt bei
/// `position + normal · (κ · −scale)`; als Maximalpunkt wird die Spiegelung
/// `position − offset` festgehalten (die Seite gegenüber dem Zahn).
pub fn sample_segment(curve: &CubicBezier, scale: f64, steps: usize) -> anyhow::Result<SegmentComb> {
    if steps == 0 {
        anyhow::bail!("Kamm-Abtastung benötigt mindestens 1 Schritt");
    }

    let mut samples = Vec::with_capacity(steps + 1);
    let mut curvature_sum = 0.0;
    let mut curvature_abs_sum = 0.0;
    let mut best_abs = 0.0;
    let mut max_curvature_point = DVec2::ZERO;
    let mut max_curvature_value = 0.0;

    for i in 0..=steps {
        let t = i as f64 / steps as f64;
        let position = curve.position(t);
        let curvature = curve.curvature(t);
        let offset = curve.normal(t) * (curvature * -scale);
        let comb_point = position + offset;

        // strikt größer: bei Gleichstand gewinnt das erste Sample
        if curvature.abs() > best_abs {
            best_abs = curvature.abs();
            max_curvature_point = position - offset;
            max_curvature_value = curvature;
        }

        curvature_sum += curvature;
        curvature_abs_sum += curvature.abs();
        samples.push(CombSample {
            t,
            position,
            curvature,
            comb_point,
        });
    }

    Ok(SegmentComb {
        result: SegmentCombResult {
            curvature_sum,
            curvature_abs_sum,
            sample_count: samples.len(),
            max_curvature_point,
            max_curvature_value,
        },
        samples,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn s_curve() -> CubicBezier {
        CubicBezier::new(
            DVec2::new(-1.0, 0.0),
            DVec2::new(-0.5, 1.5),
            DVec2::new(0.5, -1.5),
            DVec2::new(1.0, 0.0),
        )
    }

    #[test]
    fn test_sample_count_is_steps_plus_one() {
        for steps in [1, 2, 7, 50] {
            let comb = sample_segment(&s_curve(), 0.1, steps).expect("steps ≥ 1");
            assert_eq!(comb.samples.len(), steps + 1);
            assert_eq!(comb.result.sample_count, steps + 1);
            assert_eq!(comb.samples.first().map(|s| s.t), Some(0.0));
            assert_eq!(comb.samples.last().map(|s| s.t), Some(1.0));
        }
    }

    #[test]
    fn test_zero_steps_is_rejected() {
        assert!(sample_segment(&s_curve(), 0.1, 0).is_err());
    }

    #[test]
    fn test_mean_matches_direct_summation() {
        let curve = s_curve();
        let steps = 25;
        let comb = sample_segment(&curve, 1.0, steps).expect("steps ≥ 1");

        let direct: Vec<f64> = (0..=steps)
            .map(|i| curve.curvature(i as f64 / steps as f64))
            .collect();
        let mean = direct.iter().sum::<f64>() / direct.len() as f64;
        let abs_sum: f64 = direct.iter().map(|k| k.abs()).sum();

        assert_relative_eq!(comb.result.mean_curvature(), mean, epsilon = 1e-12);
        assert_relative_eq!(comb.result.curvature_abs_sum, abs_sum, epsilon = 1e-12);
    }

    #[test]
    fn test_max_point_is_reflection_of_comb_tooth() {
        // Asymmetrisch, damit das Maximum eindeutig ist
        let curve = CubicBezier::new(
            DVec2::new(0.0, 0.0),
            DVec2::new(1.0, 2.0),
            DVec2::new(3.0, 3.0),
            DVec2::new(6.0, 0.5),
        );
        let scale = 0.2;
        let comb = sample_segment(&curve, scale, 40).expect("steps ≥ 1");

        let best = comb
            .samples
            .iter()
            .max_by(|a, b| a.curvature.abs().total_cmp(&b.curvature.abs()))
            .copied()
            .expect("Samples vorhanden");
        assert_eq!(comb.result.max_curvature_value, best.curvature);

        // position − offset == 2·position − comb_point
        let reflected = 2.0 * best.position - best.comb_point;
        assert_relative_eq!(comb.result.max_curvature_point.x, reflected.x, epsilon = 1e-12);
        assert_relative_eq!(comb.result.max_curvature_point.y, reflected.y, epsilon = 1e-12);
        // Abstand zum Kurvenpunkt entspricht |κ|·scale
        assert_relative_eq!(
            comb.result.max_curvature_point.distance(best.position),
            best.curvature.abs() * scale,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_ties_keep_first_sample() {
        // Symmetrischer Bogen: κ(0) == κ(1), das erste Sample gewinnt
        let curve = CubicBezier::new(
            DVec2::new(0.0, 0.0),
            DVec2::new(0.0, 1.0),
            DVec2::new(2.0, 1.0),
            DVec2::new(2.0, 0.0),
        );
        let comb = sample_segment(&curve, 1.0, 1).expect("steps ≥ 1");
        let first = comb.samples[0];
        assert_relative_eq!(first.curvature.abs(), comb.samples[1].curvature.abs(), epsilon = 1e-12);
        assert_eq!(comb.result.max_curvature_value, first.curvature);
    }

    #[test]
    fn test_straight_segment_keeps_origin_as_max_point() {
        let curve = CubicBezier::new(
            DVec2::new(1.0, 1.0),
            DVec2::new(2.0, 1.0),
            DVec2::new(3.0, 1.0),
            DVec2::new(4.0, 1.0),
        );
        let comb = sample_segment(&curve, 1.0, 10).expect("steps ≥ 1");
        assert_eq!(comb.result.max_curvature_point, DVec2::ZERO);
        assert_eq!(comb.result.max_curvature_value, 0.0);
        for sample in &comb.samples {
            assert_eq!(sample.comb_point, sample.position);
        }
    }

    #[test]
    fn test_comb_tooth_points_away_from_center_on_ccw_arc() {
        let k = 4.0 / 3.0 * (2.0_f64.sqrt() - 1.0);
        let curve = CubicBezier::new(
            DVec2::new(1.0, 0.0),
            DVec2::new(1.0, k),
            DVec2::new(k, 1.0),
            DVec2::new(0.0, 1.0),
        );
        let comb = sample_segment(&curve, 0.5, 8).expect("steps ≥ 1");
        for sample in &comb.samples {
            assert!(sample.comb_point.length() > sample.position.length());
        }
    }
}
