//! Fraktal-Viewer.
//!
//! Interaktiver Viewer für rekursive Fraktalkurven (Koch-Schneeflocke,
//! Eis-Dreieck, Eis-Rechteck) mit egui. Rekursionstiefe, Ausschnitt und
//! Variante sind zur Laufzeit änderbar.

use eframe::egui;
use fraktal_viewer::{render, ui, AppController, AppIntent, AppState, ViewerOptions};

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Fraktal-Viewer v{} startet...", env!("CARGO_PKG_VERSION"));

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1500.0, 700.0])
                .with_title("Fraktal-Viewer"),
            ..Default::default()
        };

        eframe::run_native(
            "Fraktal-Viewer",
            options,
            Box::new(|_cc| Ok(Box::new(ViewerApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct ViewerApp {
    state: AppState,
    controller: AppController,
    input: ui::InputState,
}

impl ViewerApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let viewer_options = ViewerOptions::load_from_file(&ViewerOptions::config_path());

        Self {
            state: AppState::with_options(viewer_options),
            controller: AppController::new(),
            input: ui::InputState::new(),
        }
    }

    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        events.extend(ui::render_menu(ctx, &self.state));
        events.extend(ui::render_control_panel(ctx, &self.state));
        ui::render_status_bar(ctx, &self.state);

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

                let viewport_size = [rect.width(), rect.height()];

                events.extend(self.input.collect_viewport_events(
                    ui,
                    &response,
                    viewport_size,
                    self.state.depth,
                ));

                let scene = self.controller.build_render_scene(&self.state, viewport_size);
                render::paint_scene(&ui.painter_at(rect), rect, &scene);
            });

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }

    fn maybe_request_repaint(&self, ctx: &egui::Context, has_meaningful_events: bool) {
        if has_meaningful_events || ctx.input(|i| i.pointer.is_moving()) {
            ctx.request_repaint();
        }
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let events = self.collect_ui_events(ctx);

        let has_meaningful_events = events
            .iter()
            .any(|e| !matches!(e, AppIntent::ViewportResized { .. }));

        self.process_events(events);

        self.maybe_request_repaint(ctx, has_meaningful_events);
    }
}
