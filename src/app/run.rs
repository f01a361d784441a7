use crate::app::core::{init, transition, Effect, Event, State, UploadedImage};
use crate::app::render;
use crate::app::render::Preview;
use crate::image_classifier::interface::ImageClassifier;
use crate::logger::interface::Logger;
use eframe::egui;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;

const WINDOW_TITLE: &str = "Animal Classifier";

pub fn run(
    logger: Arc<dyn Logger>,
    classifier: Arc<dyn ImageClassifier>,
) -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([520.0, 760.0])
            .with_min_inner_size([420.0, 520.0]),
        ..Default::default()
    };

    let app = AnimalClassifierApp::new(logger, classifier);

    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(|cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::light());
            Box::new(app)
        }),
    )
}

pub struct AnimalClassifierApp {
    state: State,
    event_sender: Sender<Event>,
    event_receiver: Receiver<Event>,
    logger: Arc<dyn Logger>,
    classifier: Arc<dyn ImageClassifier>,
    preview: Option<Preview>,
    path_input: String,
}

impl AnimalClassifierApp {
    pub fn new(logger: Arc<dyn Logger>, classifier: Arc<dyn ImageClassifier>) -> Self {
        let (event_sender, event_receiver) = channel();
        let (state, effects) = init();

        let app = Self {
            state,
            event_sender,
            event_receiver,
            logger: logger.with_namespace("app"),
            classifier,
            preview: None,
            path_input: String::new(),
        };
        app.spawn_effects(effects);
        app
    }

    fn dispatch(&mut self, event: Event) {
        let _ = self.logger.info(&format!("event: {}", event.to_display_string()));

        let state = std::mem::replace(&mut self.state, State::WaitingForImage);
        let (next, effects) = transition(state, event);
        self.state = next;

        self.spawn_effects(effects);
    }

    fn spawn_effects(&self, effects: Vec<Effect>) {
        for effect in effects {
            let _ = self
                .logger
                .info(&format!("effect: {}", effect.to_display_string()));

            let sender = self.event_sender.clone();
            let classifier = self.classifier.clone();

            std::thread::spawn(move || match effect {
                Effect::Classify { bytes } => {
                    let result = classifier.classify(&bytes);
                    let _ = sender.send(Event::ClassifyDone(result));
                }
            });
        }
    }

    fn select_image(&mut self, ctx: &egui::Context, name: String, bytes: Vec<u8>) {
        self.preview = load_preview(ctx, &name, &bytes);
        self.dispatch(Event::ImageSelected(UploadedImage { name, bytes }));
    }

    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());

        for file in dropped {
            let name = file
                .path
                .as_ref()
                .and_then(|path| path.file_name())
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| file.name.clone());

            // Web/wasm drops carry bytes, native drops carry a path
            if let Some(bytes) = &file.bytes {
                self.select_image(ctx, name, bytes.to_vec());
            } else if let Some(path) = &file.path {
                match std::fs::read(path) {
                    Ok(bytes) => self.select_image(ctx, name, bytes),
                    Err(error) => self.dispatch(Event::ImageLoadFailed {
                        name,
                        message: error.to_string(),
                    }),
                }
            }
        }
    }

    fn path_row(&mut self, ui: &mut egui::Ui) {
        let mut submitted = false;

        ui.horizontal(|ui| {
            let edit = ui.add(
                egui::TextEdit::singleline(&mut self.path_input)
                    .hint_text("...or type a path to an image")
                    .desired_width(ui.available_width() - 96.0),
            );
            if edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                submitted = true;
            }
            if ui.button("Classify").clicked() {
                submitted = true;
            }
        });

        if !submitted || self.path_input.trim().is_empty() {
            return;
        }

        let path = self.path_input.trim().to_string();
        let ctx = ui.ctx().clone();
        match std::fs::read(&path) {
            Ok(bytes) => self.select_image(&ctx, path, bytes),
            Err(error) => self.dispatch(Event::ImageLoadFailed {
                name: path,
                message: error.to_string(),
            }),
        }
    }
}

impl eframe::App for AnimalClassifierApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        while let Ok(event) = self.event_receiver.try_recv() {
            self.dispatch(event);
        }

        self.handle_dropped_files(ctx);

        egui::CentralPanel::default()
            .frame(
                egui::Frame::default()
                    .fill(render::BACKGROUND)
                    .inner_margin(egui::Margin::same(24.0)),
            )
            .show(ctx, |ui| {
                self.path_row(ui);
                ui.add_space(8.0);
                render::render(ui, &self.state, self.preview.as_ref());
            });

        // Classification finishes on a worker thread; keep polling the
        // channel while one is in flight.
        if matches!(self.state, State::Classifying { .. }) {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}

fn load_preview(ctx: &egui::Context, name: &str, bytes: &[u8]) -> Option<Preview> {
    let decoded = image::load_from_memory(bytes).ok()?;
    let rgb = decoded.to_rgb8();
    let size = [rgb.width() as usize, rgb.height() as usize];
    let color_image = egui::ColorImage::from_rgb(size, rgb.as_raw());
    let texture = ctx.load_texture(name, color_image, egui::TextureOptions::LINEAR);

    Some(Preview {
        name: name.to_string(),
        texture,
    })
}
