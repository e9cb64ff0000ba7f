//! Application Controller für zentrale Event-Verarbeitung.

use crate::shared::RenderScene;

use super::{handlers, intent_mapping, render_scene, AppCommand, AppIntent, AppState};

/// Orchestriert UI-Events und Zustands-Mutationen auf dem AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = intent_mapping::map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(command.clone());

        match command {
            // === Anwendungssteuerung ===
            AppCommand::RequestExit => handlers::app::request_exit(state),

            // === Ansicht ===
            AppCommand::ResetView => handlers::view::reset(state),
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size),
            AppCommand::BeginDrag { pos } => handlers::view::begin_drag(state, pos),
            AppCommand::DragTo { pos } => handlers::view::drag_to(state, pos),
            AppCommand::EndDrag => handlers::view::end_drag(state),
            AppCommand::ApplyScroll { delta } => handlers::view::apply_scroll(state, delta),

            // === Fraktal ===
            AppCommand::SetFractal { kind } => handlers::fractal::set_fractal(state, kind),
            AppCommand::SetDepth { depth } => handlers::fractal::set_depth(state, depth),
        }

        Ok(())
    }

    /// Baut die Render-Szene für den aktuellen Frame.
    pub fn build_render_scene(&self, state: &AppState, viewport_size: [f32; 2]) -> RenderScene {
        render_scene::build(state, viewport_size)
    }
}
