//! Curvature Creator (Headless).
//!
//! Lädt die Optionen, erzeugt die 3-Punkt-Kurve aus den Start-Eingaben und
//! berechnet einen Overlay-Frame. Mit `--json` werden die Zeichenbefehle als
//! JSON-Zeile nach stdout geschrieben, sonst nur die Kennzahlen geloggt.
//! `--write-config` legt die Optionsdatei mit den aktuellen Werten an.

use curvature_creator::{AppState, JsonSink, OverlayController, OverlayOptions, RecordingSink};

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Curvature Creator v{} startet...", env!("CARGO_PKG_VERSION"));

    let args: Vec<String> = std::env::args().skip(1).collect();
    let json_output = args.iter().any(|arg| arg == "--json");
    let write_config = args.iter().any(|arg| arg == "--write-config");

    // Optionen aus TOML laden (oder Standardwerte)
    let config_path = OverlayOptions::config_path();
    let options = OverlayOptions::load_from_file(&config_path);
    if write_config {
        options.save_to_file(&config_path)?;
    }

    let mut state = AppState::with_options(options);
    let mut controller = OverlayController::new();
    controller.create_curve(&mut state)?;

    let frame = if json_output {
        let mut sink = JsonSink::new(std::io::stdout().lock());
        controller.draw_frame(&mut state, &mut sink)
    } else {
        let mut sink = RecordingSink::new();
        let frame = controller.draw_frame(&mut state, &mut sink);
        if let Some(scene) = sink.last() {
            log::info!("Szene: {} Zeichenbefehle", scene.len());
        }
        frame
    }
    .ok_or_else(|| anyhow::anyhow!("Overlay-Frame konnte nicht gezeichnet werden"))?;

    let geometry = &frame.geometry;
    log::info!(
        "A={:?} B={:?} C={:?}",
        geometry.anchor,
        geometry.joint_b,
        geometry.joint_c
    );
    if geometry.pruett.active {
        log::info!(
            "Pruett-Radius: {:.2} mm",
            state.options.to_display(geometry.pruett.radius.abs())
        );
    }
    if let Some(comb) = &frame.comb {
        let summary = comb.summary;
        log::info!(
            "L = {:.2} mm, K = {:.2} (A = {:.2}), Kamm-Radius = {:.2} mm",
            state.options.to_display(summary.total_length),
            summary.mean_curvature,
            summary.mean_abs_curvature,
            state.options.to_display(summary.max_curvature_radius.abs())
        );
    }

    Ok(())
}
