//! Pixel Shape Editor.
//!
//! Raster-Editor für Linien, Kreise, Ellipsen sowie Hermite- und Bézier-Kurven.
//! Shapes werden als Gitter aus gepoolten Pixeln gezeichnet.

use eframe::egui;
use pixel_shape_editor::{ui, AppController, AppIntent, AppState, EditorOptions};
use std::time::{Duration, Instant};

/// Repaint-Intervall, solange Meldungen ausgeblendet werden.
const MESSAGE_REPAINT_INTERVAL: Duration = Duration::from_millis(100);

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

        log::info!("Pixel Shape Editor v{} startet...", env!("CARGO_PKG_VERSION"));

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 800.0])
                .with_title("Pixel Shape Editor"),
            renderer: eframe::Renderer::Glow,
            ..Default::default()
        };

        eframe::run_native(
            "Pixel Shape Editor",
            options,
            Box::new(|_cc| Ok(Box::new(EditorApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct EditorApp {
    state: AppState,
    controller: AppController,
    canvas: ui::CanvasView,
    shape_list: ui::ShapeListPanel,
}

impl EditorApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let editor_options = EditorOptions::load_from_file(&config_path);

        let mut app = Self {
            canvas: ui::CanvasView::new(editor_options.cell_size_px),
            state: AppState::with_options(editor_options),
            controller: AppController::new(),
            shape_list: ui::ShapeListPanel::new(),
        };

        // Gespeicherte Shapes beim Start laden
        app.process_events(vec![AppIntent::LoadRequested]);
        app
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let events = self.collect_ui_events(ctx);
        let has_meaningful_events = !events.is_empty();

        self.process_events(events);

        self.expire_messages();

        self.maybe_request_repaint(ctx, has_meaningful_events);
    }
}

impl EditorApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        self.shape_list.refresh_if_dirty(&mut self.state.registry);

        events.extend(ui::render_menu(ctx, &self.state));
        events.extend(ui::render_toolbar(ctx, &self.state));
        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_command_bar(ctx, &self.state));
        events.extend(
            self.shape_list
                .show(ctx, self.state.registry.selected_handle()),
        );

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                events.extend(self.canvas.show(ui, &self.state));
            });

        ui::render_message_overlay(ctx, &self.state, Instant::now());

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
                self.state.messages.log(format!("Error: {}", e));
            }
        }
    }

    fn expire_messages(&mut self) {
        let lifetime = Duration::from_secs_f32(self.state.options.message_lifetime_secs());
        self.state.messages.prune(Instant::now(), lifetime);
    }

    fn maybe_request_repaint(&self, ctx: &egui::Context, has_meaningful_events: bool) {
        if has_meaningful_events || self.state.editor.mode.is_transform() {
            ctx.request_repaint();
        } else if !self.state.messages.is_empty() {
            ctx.request_repaint_after(MESSAGE_REPAINT_INTERVAL);
        }
    }
}
