//! Krümmungskamm über eine ganze Spline: Segment-Kämme sammeln und Kennzahlen bilden.

use super::comb::{sample_segment, SegmentComb};
use super::spline::SplineSource;
use glam::DVec2;

/// Segment, dessen Maximalkrümmung in die Zusammenfassung eingeht (Gelenkbereich).
pub const MAX_CURVATURE_SEGMENT: usize = 1;

/// Kennzahlen der gesamten Kurve.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CurveCombSummary {
    /// Vom Host gemessene Bogenlänge
    pub total_length: f64,
    /// Σ curvature_sum / Σ sample_count
    pub mean_curvature: f64,
    /// Σ curvature_abs_sum / Σ sample_count
    pub mean_abs_curvature: f64,
    /// Maximalpunkt aus Segment 1 (Ebenenkoordinaten)
    pub max_curvature_point: DVec2,
    /// Vorzeichenbehaftete Maximalkrümmung aus Segment 1, mit `scale` multipliziert
    pub max_curvature_radius: f64,
}

/// Zusammenfassung plus die Segment-Kämme für das Rendering.
#[derive(Debug, Clone)]
pub struct SplineComb {
    pub summary: CurveCombSummary,
    pub segments: Vec<SegmentComb>,
}

impl SplineComb {
    /// Gesamtzahl der Samples über alle Segmente.
    pub fn sample_count(&self) -> usize {
        self.segments.iter().map(|s| s.result.sample_count).sum()
    }
}

/// Analysiert alle aufeinanderfolgenden Punktpaare von `source`.
///
/// Vorbedingung: mindestens zwei Kontrollpunkte und `steps ≥ 1`. Eine
/// Verletzung liefert einen Fehler statt NaN-Mittelwerten.
///
/// Die Maximalkrümmung stammt ausschließlich aus Segment
/// [`MAX_CURVATURE_SEGMENT`]; hat die Kurve nur ein Segment, bleiben Punkt
/// und Radius bei null.
pub fn analyze_spline<S: SplineSource + ?Sized>(
    source: &S,
    scale: f64,
    steps: usize,
) -> anyhow::Result<SplineComb> {
    let point_count = source.control_points().len();
    if point_count < 2 {
        anyhow::bail!(
            "Krümmungskamm benötigt mindestens 2 Kontrollpunkte (vorhanden: {})",
            point_count
        );
    }

    let mut segments = Vec::with_capacity(source.segment_count());
    let mut curvature_sum = 0.0;
    let mut curvature_abs_sum = 0.0;
    let mut sample_count = 0usize;
    let mut max_curvature_point = DVec2::ZERO;
    let mut max_curvature_radius = 0.0;

    for index in 0..source.segment_count() {
        let Some(curve) = source.segment(index) else {
            break;
        };
        let comb = sample_segment(&curve, scale, steps)?;

        curvature_sum += comb.result.curvature_sum;
        curvature_abs_sum += comb.result.curvature_abs_sum;
        sample_count += comb.result.sample_count;

        if index == MAX_CURVATURE_SEGMENT {
            max_curvature_point = comb.result.max_curvature_point;
            max_curvature_radius = comb.result.max_curvature_value * scale;
        }
        segments.push(comb);
    }

    if sample_count == 0 {
        anyhow::bail!(
            "Krümmungskamm ohne Samples: Quelle lieferte keine Segmente ({} Kontrollpunkte)",
            point_count
        );
    }

    let summary = CurveCombSummary {
        total_length: source.length(),
        mean_curvature: curvature_sum / sample_count as f64,
        mean_abs_curvature: curvature_abs_sum / sample_count as f64,
        max_curvature_point,
        max_curvature_radius,
    };
    log::debug!(
        "Kamm: {} Segmente, {} Samples, K={:.4}, A={:.4}",
        segments.len(),
        sample_count,
        summary.mean_curvature,
        summary.mean_abs_curvature
    );

    Ok(SplineComb { summary, segments })
}
