//! Mapping von Panel-Intents auf mutierende Overlay-Commands.

use super::{AppState, OverlayCommand, OverlayIntent, OverlayLayer};

/// Übersetzt einen `OverlayIntent` in eine Sequenz ausführbarer `OverlayCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: OverlayIntent) -> Vec<OverlayCommand> {
    match intent {
        OverlayIntent::ToggleViewRequested => vec![OverlayCommand::ToggleView],
        OverlayIntent::EnableViewRequested => {
            vec![OverlayCommand::SetViewEnabled { enabled: true }]
        }
        OverlayIntent::DisableViewRequested => {
            vec![OverlayCommand::SetViewEnabled { enabled: false }]
        }
        OverlayIntent::CreateCurveRequested => vec![
            OverlayCommand::CreateCurve,
            OverlayCommand::SetViewEnabled { enabled: true },
        ],
        OverlayIntent::CurveHeightChanged { height } => {
            vec![OverlayCommand::SetCurveHeight { height }]
        }
        OverlayIntent::JointBChanged { joint } => vec![OverlayCommand::SetJointB { joint }],
        OverlayIntent::JointCChanged { joint } => vec![OverlayCommand::SetJointC { joint }],
        OverlayIntent::PruettDistanceChanged { distance } => {
            vec![OverlayCommand::SetPruettDistance { distance }]
        }
        OverlayIntent::AngleArcRadiusChanged { radius } => {
            vec![OverlayCommand::SetAngleArcRadius { radius }]
        }
        OverlayIntent::CombStepsChanged { steps } => vec![OverlayCommand::SetCombSteps {
            steps: steps.max(1),
        }],
        OverlayIntent::CombScaleChanged { scale } => {
            vec![OverlayCommand::SetCombScale { scale }]
        }
        OverlayIntent::BevelDepthChanged { depth } => {
            vec![OverlayCommand::SetBevelDepth { depth }]
        }
        OverlayIntent::LayerToggled { layer } => {
            let visible = match layer {
                OverlayLayer::Pruett => state.settings.show_pruett,
                OverlayLayer::Comb => state.settings.show_comb,
                OverlayLayer::CombCircle => state.settings.show_comb_circle,
            };
            vec![OverlayCommand::SetLayerVisible {
                layer,
                visible: !visible,
            }]
        }
        OverlayIntent::ResetSettingsRequested => vec![OverlayCommand::ApplySettings {
            settings: state.options.settings,
        }],
    }
}
