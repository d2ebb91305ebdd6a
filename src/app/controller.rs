//! Overlay-Controller: Ansicht-Schaltung, Command-Dispatch und Frame-Ablauf.

use super::use_cases::frame::{self, OverlayFrame};
use super::{render_scene, AppState, OverlayCommand, OverlayIntent};
use crate::render::OverlaySink;
use crate::shared::OverlayScene;

/// Orchestriert Panel-Intents und den Frame-Ablauf auf dem AppState.
///
/// Einziger dauerhafter Zustand ist der Ansicht-Schalter.
#[derive(Debug, Default)]
pub struct OverlayController {
    enabled: bool,
}

impl OverlayController {
    /// Erstellt einen Controller mit ausgeschalteter Ansicht.
    pub fn new() -> Self {
        Self { enabled: false }
    }

    /// Gibt zurück, ob die Ansicht gezeichnet wird.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Schaltet die Ansicht ein (idempotent).
    pub fn enable(&mut self) {
        if self.enabled {
            return;
        }
        self.enabled = true;
        log::info!("Krümmungs-Overlay eingeschaltet");
    }

    /// Schaltet die Ansicht aus (idempotent).
    pub fn disable(&mut self) {
        if !self.enabled {
            return;
        }
        self.enabled = false;
        log::info!("Krümmungs-Overlay ausgeschaltet");
    }

    /// Wechselt zwischen ein und aus.
    pub fn toggle(&mut self) {
        if self.enabled {
            self.disable();
        } else {
            self.enable();
        }
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(
        &mut self,
        state: &mut AppState,
        intent: OverlayIntent,
    ) -> anyhow::Result<()> {
        let commands = super::intent_mapping::map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    /// Führt mutierende Commands auf dem AppState aus.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: OverlayCommand,
    ) -> anyhow::Result<()> {
        use super::handlers;
        log::debug!("Command: {:?}", command);

        match command {
            // === Ansicht ===
            OverlayCommand::SetViewEnabled { enabled: true } => self.enable(),
            OverlayCommand::SetViewEnabled { enabled: false } => self.disable(),
            OverlayCommand::ToggleView => self.toggle(),

            // === Kurve ===
            OverlayCommand::CreateCurve => handlers::curve::create_curve(state),

            // === Eingaben ===
            OverlayCommand::SetCurveHeight { height } => {
                handlers::settings::set_curve_height(state, height)
            }
            OverlayCommand::SetJointB { joint } => handlers::settings::set_joint_b(state, joint),
            OverlayCommand::SetJointC { joint } => handlers::settings::set_joint_c(state, joint),
            OverlayCommand::SetPruettDistance { distance } => {
                handlers::settings::set_pruett_distance(state, distance)
            }
            OverlayCommand::SetAngleArcRadius { radius } => {
                handlers::settings::set_angle_arc_radius(state, radius)
            }
            OverlayCommand::SetCombSteps { steps } => {
                handlers::settings::set_comb_steps(state, steps)
            }
            OverlayCommand::SetCombScale { scale } => {
                handlers::settings::set_comb_scale(state, scale)
            }
            OverlayCommand::SetBevelDepth { depth } => {
                handlers::settings::set_bevel_depth(state, depth)
            }
            OverlayCommand::SetLayerVisible { layer, visible } => {
                handlers::settings::set_layer_visible(state, layer, visible)
            }
            OverlayCommand::ApplySettings { settings } => {
                handlers::settings::apply_settings(state, settings)
            }
        }

        Ok(())
    }

    /// Erzeugt eine neue Kurve aus den aktuellen Gelenken und schaltet die Ansicht ein.
    pub fn create_curve(&mut self, state: &mut AppState) -> anyhow::Result<()> {
        self.handle_intent(state, OverlayIntent::CreateCurveRequested)
    }

    /// Berechnet Geometrie und Kamm des aktuellen Frames.
    pub fn compute_frame(&self, state: &mut AppState) -> anyhow::Result<OverlayFrame> {
        frame::compute(state)
    }

    /// Baut die Overlay-Szene eines berechneten Frames.
    pub fn build_overlay_scene(&self, state: &AppState, frame: &OverlayFrame) -> OverlayScene {
        render_scene::build(state, frame)
    }

    /// Zeichnet einen Frame, falls die Ansicht eingeschaltet ist.
    ///
    /// Jeder Fehler (Berechnung oder Sink) wird geloggt und schaltet die
    /// Ansicht aus. Liefert den gezeichneten Frame.
    pub fn draw_frame(
        &mut self,
        state: &mut AppState,
        sink: &mut dyn OverlaySink,
    ) -> Option<OverlayFrame> {
        if !self.enabled {
            return None;
        }

        match self.try_draw_frame(state, sink) {
            Ok(frame) => Some(frame),
            Err(e) => {
                log::error!("Overlay-Frame fehlgeschlagen: {:#}", e);
                self.disable();
                None
            }
        }
    }

    fn try_draw_frame(
        &self,
        state: &mut AppState,
        sink: &mut dyn OverlaySink,
    ) -> anyhow::Result<OverlayFrame> {
        let frame = self.compute_frame(state)?;
        let scene = self.build_overlay_scene(state, &frame);
        sink.submit(&scene)?;
        Ok(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_switches_between_states() {
        let mut controller = OverlayController::new();
        assert!(!controller.is_enabled());

        controller.toggle();
        assert!(controller.is_enabled());
        controller.enable();
        assert!(controller.is_enabled());

        controller.toggle();
        assert!(!controller.is_enabled());
        controller.disable();
        assert!(!controller.is_enabled());
    }

    #[test]
    fn disabled_view_draws_nothing() {
        let mut controller = OverlayController::new();
        let mut state = AppState::new();
        let mut sink = crate::render::RecordingSink::new();

        assert!(controller.draw_frame(&mut state, &mut sink).is_none());
        assert!(sink.frames().is_empty());
    }
}
