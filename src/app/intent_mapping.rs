//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
///
/// Die Rekursionstiefe wird an dieser Ereignis-Grenze auf den erlaubten
/// Bereich begrenzt, damit kein unbeschränkter Wert die rekursiven
/// Generatoren erreicht.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
        AppIntent::ResetViewRequested => vec![AppCommand::ResetView],
        AppIntent::ZoomInRequested => vec![AppCommand::ApplyScroll {
            delta: state.options.zoom_step_scroll_units,
        }],
        AppIntent::ZoomOutRequested => vec![AppCommand::ApplyScroll {
            delta: -state.options.zoom_step_scroll_units,
        }],
        AppIntent::FractalSelected { kind } => vec![AppCommand::SetFractal { kind }],
        AppIntent::DepthChanged { depth } => vec![AppCommand::SetDepth {
            depth: state.options.clamp_depth(depth),
        }],
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize {
            size: [f64::from(size[0]), f64::from(size[1])],
        }],
        AppIntent::PointerPressed { pos } => vec![AppCommand::BeginDrag { pos }],
        AppIntent::PointerDragged { pos } => vec![AppCommand::DragTo { pos }],
        AppIntent::PointerReleased => vec![AppCommand::EndDrag],
        AppIntent::Scrolled { delta } => vec![AppCommand::ApplyScroll { delta }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depth_intents_are_clamped_to_max_depth() {
        let state = AppState::new();

        let commands =
            map_intent_to_commands(&state, AppIntent::DepthChanged { depth: 42 });
        assert_eq!(commands, vec![AppCommand::SetDepth { depth: 8 }]);

        let commands = map_intent_to_commands(&state, AppIntent::DepthChanged { depth: 5 });
        assert_eq!(commands, vec![AppCommand::SetDepth { depth: 5 }]);
    }

    #[test]
    fn zoom_intents_map_to_scroll_steps() {
        let state = AppState::new();
        let step = state.options.zoom_step_scroll_units;

        let commands = map_intent_to_commands(&state, AppIntent::ZoomInRequested);
        assert_eq!(commands, vec![AppCommand::ApplyScroll { delta: step }]);

        let commands = map_intent_to_commands(&state, AppIntent::ZoomOutRequested);
        assert_eq!(commands, vec![AppCommand::ApplyScroll { delta: -step }]);
    }

    #[test]
    fn viewport_resize_widens_to_f64() {
        let state = AppState::new();
        let commands = map_intent_to_commands(
            &state,
            AppIntent::ViewportResized {
                size: [1280.0, 720.0],
            },
        );
        assert_eq!(
            commands,
            vec![AppCommand::SetViewportSize {
                size: [1280.0, 720.0]
            }]
        );
    }
}
