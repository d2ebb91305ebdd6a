//! Zentrale Konfiguration für den Curvature Creator.
//!
//! `OverlayOptions` enthält alle zur Laufzeit änderbaren Darstellungswerte,
//! `CurveSettings` die Eingaben des Gelenkaufbaus.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::{JointInput, JointParams};
use serde::{Deserialize, Serialize};

// ── Gelenkaufbau ────────────────────────────────────────────────────

/// Standard-Höhe des Ankers A (Szeneneinheiten = Meter).
pub const CURVE_HEIGHT: f64 = 0.03;
/// Standard-Abstand der Gelenke B und C.
pub const JOINT_DISTANCE: f64 = 0.01;
/// Standard-Radius des Winkelbogens um B.
pub const ANGLE_ARC_RADIUS: f64 = 0.01;
/// Standard-Abstand der Pruett-Tangentenpunkte von B.
pub const PRUETT_DISTANCE: f64 = 0.005;
/// Bevel-Tiefe einer neu erzeugten Kurve.
pub const CREATED_CURVE_BEVEL_DEPTH: f64 = 0.001;

// ── Krümmungskamm ───────────────────────────────────────────────────

/// Abtastschritte pro Segment.
pub const COMB_STEPS: usize = 50;
/// Überhöhung der Kamm-Zähne.
pub const COMB_SCALE: f64 = 0.00005;

// ── Darstellung ─────────────────────────────────────────────────────

/// Segmente für Pruett- und Kamm-Kreis.
pub const CIRCLE_SEGMENTS: u32 = 256;
/// Segmente des Winkelbogens.
pub const ARC_SEGMENTS: u32 = 32;
/// Umrechnung Szeneneinheit → Anzeige (Meter → Millimeter).
pub const DISPLAY_FACTOR: f64 = 1000.0;
/// Radius der Punkt-Marker in Screen-Pixeln.
pub const MARKER_RADIUS_PX: f32 = 20.0;
/// Zeilenabstand der Kennzahlen-Beschriftung in Screen-Pixeln.
pub const LABEL_LINE_HEIGHT_PX: f32 = 30.0;
/// Horizontaler Versatz der Kennzahlen-Beschriftung vom Anker A.
pub const SUMMARY_OFFSET_X_PX: f32 = 400.0;

// ── Farben (RGBA) ───────────────────────────────────────────────────

/// Kurven-Polylinie (Orange).
pub const CURVE_COLOR: [f32; 4] = [0.824_218_75, 0.453_125, 0.121_093_75, 1.0];
/// Kamm-Hüllkurve und Gelenklinien (Blau).
pub const COMB_COLOR: [f32; 4] = [0.261_718_75, 0.546_875, 0.828_125, 1.0];
/// Kamm-Zähne (Grau).
pub const COMB_LINE_COLOR: [f32; 4] = [0.7, 0.7, 0.7, 1.0];
/// Pruett-Kreis und Pruett-Radius (Grün).
pub const PRUETT_COLOR: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
/// Kamm-Kreis und Kamm-Radius (Rot).
pub const COMB_CIRCLE_COLOR: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
/// Standard-Textfarbe (Gelb).
pub const TEXT_COLOR: [f32; 4] = [1.0, 1.0, 0.0, 1.0];
/// Punkt A (Rosa).
pub const POINT_A_COLOR: [f32; 4] = [0.996_093_75, 0.531_25, 0.527_343_75, 1.0];
/// Punkt B (Hellblau).
pub const POINT_B_COLOR: [f32; 4] = [0.867_187_5, 0.875, 1.0, 1.0];
/// Punkt C (Grün).
pub const POINT_C_COLOR: [f32; 4] = [0.0, 1.0, 0.0, 1.0];

// ── Kurven-Eingaben (serialisierbar) ───────────────────────────────

/// Eingaben eines Frames: Gelenke, Kamm-Parameter und Overlay-Schalter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurveSettings {
    /// Höhe des Ankers A
    pub curve_height: f64,
    /// Radius des Winkelbogens um B
    pub angle_arc_radius: f64,
    /// Abstand der Pruett-Tangentenpunkte von B
    pub pruett_distance: f64,
    /// Abtastschritte pro Segment (≥ 1)
    pub comb_steps: usize,
    /// Überhöhung der Kamm-Zähne
    pub comb_scale: f64,
    /// Bevel-Tiefe der Host-Kurve (für Radius-Beschriftungen)
    pub bevel_depth: f64,
    /// Pruett-Kreis anzeigen
    pub show_pruett: bool,
    /// Krümmungskamm berechnen und anzeigen
    pub show_comb: bool,
    /// Kamm-Kreis am Maximalpunkt anzeigen
    pub show_comb_circle: bool,
    /// Gelenk B relativ zu A
    pub joint_b: JointInput,
    /// Gelenk C relativ zur Kante A→B
    pub joint_c: JointInput,
}

impl Default for CurveSettings {
    fn default() -> Self {
        Self {
            curve_height: CURVE_HEIGHT,
            angle_arc_radius: ANGLE_ARC_RADIUS,
            pruett_distance: PRUETT_DISTANCE,
            comb_steps: COMB_STEPS,
            comb_scale: COMB_SCALE,
            bevel_depth: 0.0,
            show_pruett: true,
            show_comb: false,
            show_comb_circle: false,
            joint_b: JointInput::new(0.0, JOINT_DISTANCE),
            joint_c: JointInput::new(0.0, JOINT_DISTANCE),
        }
    }
}

impl CurveSettings {
    /// Eingaben für den Gelenkaufbau.
    pub fn joint_params(&self) -> JointParams {
        JointParams {
            anchor_height: self.curve_height,
            joint_b: self.joint_b,
            joint_c: self.joint_c,
            pruett_distance: self.pruett_distance,
            arc_radius: self.angle_arc_radius,
        }
    }
}

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Overlay-Optionen.
/// Wird als `curvature_creator.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlayOptions {
    // ── Farben ──────────────────────────────────────────────────
    /// Kurven-Polylinie
    pub curve_color: [f32; 4],
    /// Kamm-Hüllkurve
    pub comb_color: [f32; 4],
    /// Kamm-Zähne
    pub comb_line_color: [f32; 4],
    /// Gelenklinien A–B, B–C und Kantenverlängerung
    pub joint_line_color: [f32; 4],
    /// Pruett-Kreis und -Beschriftung
    pub pruett_color: [f32; 4],
    /// Kamm-Kreis und -Beschriftung
    pub comb_circle_color: [f32; 4],
    /// Standard-Textfarbe
    pub text_color: [f32; 4],
    /// Marker A
    pub point_a_color: [f32; 4],
    /// Marker B
    pub point_b_color: [f32; 4],
    /// Marker C
    pub point_c_color: [f32; 4],

    // ── Geometrie-Auflösung ─────────────────────────────────────
    /// Segmente für Pruett- und Kamm-Kreis
    pub circle_segments: u32,
    /// Segmente des Winkelbogens
    #[serde(default = "default_arc_segments")]
    pub arc_segments: u32,

    // ── Beschriftung ────────────────────────────────────────────
    /// Umrechnung Szeneneinheit → Anzeige-Einheit
    pub display_factor: f64,
    /// Radius der Punkt-Marker in Pixeln
    pub marker_radius_px: f32,
    /// Zeilenabstand der Kennzahlen in Pixeln
    pub label_line_height_px: f32,
    /// Horizontaler Versatz der Kennzahlen in Pixeln
    pub summary_offset_x_px: f32,

    // ── Start-Eingaben ──────────────────────────────────────────
    /// Eingaben beim Programmstart
    #[serde(default)]
    pub settings: CurveSettings,
}

impl Default for OverlayOptions {
    fn default() -> Self {
        Self {
            curve_color: CURVE_COLOR,
            comb_color: COMB_COLOR,
            comb_line_color: COMB_LINE_COLOR,
            joint_line_color: COMB_COLOR,
            pruett_color: PRUETT_COLOR,
            comb_circle_color: COMB_CIRCLE_COLOR,
            text_color: TEXT_COLOR,
            point_a_color: POINT_A_COLOR,
            point_b_color: POINT_B_COLOR,
            point_c_color: POINT_C_COLOR,

            circle_segments: CIRCLE_SEGMENTS,
            arc_segments: ARC_SEGMENTS,

            display_factor: DISPLAY_FACTOR,
            marker_radius_px: MARKER_RADIUS_PX,
            label_line_height_px: LABEL_LINE_HEIGHT_PX,
            summary_offset_x_px: SUMMARY_OFFSET_X_PX,

            settings: CurveSettings::default(),
        }
    }
}

/// Serde-Default für `arc_segments` (ältere TOML-Dateien).
fn default_arc_segments() -> u32 {
    ARC_SEGMENTS
}

impl OverlayOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("curvature_creator"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("curvature_creator.toml")
    }

    /// Wandelt eine Länge in die Anzeige-Einheit um.
    pub fn to_display(&self, value: f64) -> f64 {
        value * self.display_factor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("curvature_creator_{}_{}", std::process::id(), name))
    }

    #[test]
    fn test_defaults_survive_toml_roundtrip() {
        let mut options = OverlayOptions::default();
        options.settings.joint_c = JointInput::new(0.5, 0.02);
        options.settings.show_comb = true;

        let content = toml::to_string_pretty(&options).expect("serialisierbar");
        let parsed: OverlayOptions = toml::from_str(&content).expect("parsebar");
        assert_eq!(parsed, options);
    }

    #[test]
    fn test_missing_settings_table_uses_defaults() {
        let full = toml::to_string(&OverlayOptions::default()).expect("serialisierbar");
        let mut table: toml::Table = toml::from_str(&full).expect("Tabelle");
        table.remove("settings");
        table.remove("arc_segments");
        let content = toml::to_string(&table).expect("serialisierbar");

        let parsed: OverlayOptions = toml::from_str(&content).expect("parsebar");
        assert_eq!(parsed.settings, CurveSettings::default());
        assert_eq!(parsed.arc_segments, ARC_SEGMENTS);
    }

    #[test]
    fn test_partial_settings_keep_remaining_defaults() {
        let parsed: CurveSettings = toml::from_str("comb_steps = 12\nshow_comb = true\n")
            .expect("parsebar");
        assert_eq!(parsed.comb_steps, 12);
        assert!(parsed.show_comb);
        assert_eq!(parsed.comb_scale, COMB_SCALE);
        assert!(parsed.show_pruett);
    }

    #[test]
    fn test_load_missing_file_falls_back_to_defaults() {
        let path = temp_file("missing.toml");
        let _ = std::fs::remove_file(&path);
        assert_eq!(OverlayOptions::load_from_file(&path), OverlayOptions::default());
    }

    #[test]
    fn test_load_broken_file_falls_back_to_defaults() {
        let path = temp_file("broken.toml");
        std::fs::write(&path, "circle_segments = \"viele\"").expect("schreibbar");
        assert_eq!(OverlayOptions::load_from_file(&path), OverlayOptions::default());
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_save_and_load_file() {
        let path = temp_file("saved.toml");
        let mut options = OverlayOptions::default();
        options.circle_segments = 64;
        options.settings.curve_height = 0.045;

        options.save_to_file(&path).expect("speicherbar");
        assert_eq!(OverlayOptions::load_from_file(&path), options);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_joint_params_mirror_settings() {
        let settings = CurveSettings {
            curve_height: 0.04,
            angle_arc_radius: 0.02,
            pruett_distance: 0.003,
            joint_b: JointInput::new(0.1, 0.015),
            joint_c: JointInput::new(-0.2, 0.012),
            ..CurveSettings::default()
        };
        let params = settings.joint_params();
        assert_eq!(params.anchor_height, 0.04);
        assert_eq!(params.arc_radius, 0.02);
        assert_eq!(params.pruett_distance, 0.003);
        assert_eq!(params.joint_b, settings.joint_b);
        assert_eq!(params.joint_c, settings.joint_c);
    }
}
