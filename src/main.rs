//! Bézier-Skizzenblock.
//!
//! Punkte per Klick setzen; je vier Punkte ergeben ein kubisches Bézier-Segment,
//! das nächste Segment setzt am letzten Punkt an. Alle Punkte bleiben ziehbar.

use bezier_sketch::render::{EguiSurface, Renderer};
use bezier_sketch::{ui, AppController, AppIntent, AppState, SketchOptions};
use eframe::egui;

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

        log::info!("Bézier-Skizzenblock v{} startet...", env!("CARGO_PKG_VERSION"));

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 720.0])
                .with_title("Bézier-Skizzenblock"),
            renderer: eframe::Renderer::Glow,
            multisampling: 4,
            ..Default::default()
        };

        eframe::run_native(
            "Bézier-Skizzenblock",
            options,
            Box::new(|_cc| Ok(Box::new(SketchApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct SketchApp {
    state: AppState,
    controller: AppController,
    renderer: Renderer,
    input: ui::InputState,
}

impl SketchApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = SketchOptions::config_path();
        let sketch_options = SketchOptions::load_from_file(&config_path);

        let mut state = AppState::new();
        state.options = sketch_options;

        Self {
            state,
            controller: AppController::new(),
            renderer: Renderer::new(),
            input: ui::InputState::new(),
        }
    }
}

impl eframe::App for SketchApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        ui::render_status_bar(ctx, &self.state);

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

                let events = self.input.collect_viewport_events(
                    ui,
                    &response,
                    &self.state.sketch,
                    &self.state.options,
                );

                // Erst alle Mutationen, dann Neuzeichnen: der Frame sieht den aktuellen Stand
                self.process_events(events);

                let scene = self.controller.build_render_scene(&self.state);
                let mut surface = EguiSurface::new(ui.painter().clone(), rect);
                self.renderer.draw_all(&scene, &mut surface);
            });

        self.maybe_request_repaint(ctx);
    }
}

impl SketchApp {
    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }

    fn maybe_request_repaint(&mut self, ctx: &egui::Context) {
        if self.state.take_redraw_request()
            || self.state.should_exit
            || self.state.sketch.dragging_point().is_some()
        {
            ctx.request_repaint();
        }
    }
}
