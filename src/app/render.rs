use crate::app::core::{State, UploadedImage};
use crate::image_classifier::interface::RankedResult;
use eframe::egui;
use egui::RichText;

pub const BACKGROUND: egui::Color32 = egui::Color32::from_rgb(245, 247, 250);
pub const ACCENT: egui::Color32 = egui::Color32::from_rgb(74, 144, 226);
const TITLE_COLOR: egui::Color32 = egui::Color32::from_rgb(63, 63, 63);
const SUBTITLE_COLOR: egui::Color32 = egui::Color32::from_rgb(90, 90, 90);
const BAR_BACKGROUND: egui::Color32 = egui::Color32::from_rgb(224, 224, 224);
const ERROR_BACKGROUND: egui::Color32 = egui::Color32::from_rgb(253, 236, 234);
const ERROR_TEXT: egui::Color32 = egui::Color32::from_rgb(160, 40, 30);

/// Image preview texture for the currently selected file. Keyed by file name
/// so a stale texture is never shown against a newer image.
pub struct Preview {
    pub name: String,
    pub texture: egui::TextureHandle,
}

pub fn render(ui: &mut egui::Ui, state: &State, preview: Option<&Preview>) {
    ui.vertical_centered(|ui| {
        ui.add_space(8.0);
        ui.label(
            RichText::new("Animal Classifier")
                .size(32.0)
                .strong()
                .color(TITLE_COLOR),
        );
        ui.label(
            RichText::new("Upload an image of an animal and let the model tell you what it is!")
                .size(14.0)
                .color(SUBTITLE_COLOR),
        );
        ui.add_space(12.0);
    });

    match state {
        State::WaitingForImage => {
            ui.vertical_centered(|ui| {
                ui.add_space(24.0);
                ui.label(
                    RichText::new("Drop a .jpg, .png or .webp anywhere in this window")
                        .size(16.0)
                        .color(SUBTITLE_COLOR),
                );
            });
        }
        State::Classifying { image } => {
            preview_image(ui, image, preview);
            ui.vertical_centered(|ui| {
                ui.add_space(12.0);
                ui.spinner();
                ui.label(RichText::new("Classifying...").color(SUBTITLE_COLOR));
            });
        }
        State::Classified { image, result } => {
            preview_image(ui, image, preview);
            result_card(ui, result);
        }
        State::ClassifyFailed { image, message } => {
            if let Some(image) = image {
                preview_image(ui, image, preview);
            }
            error_card(ui, message);
        }
    }
}

fn preview_image(ui: &mut egui::Ui, image: &UploadedImage, preview: Option<&Preview>) {
    let Some(preview) = preview.filter(|p| p.name == image.name) else {
        return;
    };

    ui.vertical_centered(|ui| {
        ui.add(
            egui::Image::new(&preview.texture)
                .max_width(360.0)
                .rounding(8.0),
        );
        ui.label(RichText::new(&image.name).small().color(SUBTITLE_COLOR));
    });
}

fn result_card(ui: &mut egui::Ui, result: &RankedResult) {
    ui.add_space(12.0);
    egui::Frame::none()
        .fill(egui::Color32::WHITE)
        .rounding(12.0)
        .inner_margin(egui::Margin::same(16.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.visuals_mut().extreme_bg_color = BAR_BACKGROUND;

            if let Some(top) = result.top() {
                ui.label(
                    RichText::new(format!("Prediction: {}", top.label))
                        .size(22.0)
                        .strong()
                        .color(TITLE_COLOR),
                );
                ui.label(
                    RichText::new(format!("Confidence: {:.2}%", top.percent()))
                        .color(SUBTITLE_COLOR),
                );
                ui.add_space(8.0);
            }

            for entry in &result.entries {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(&entry.label).strong().color(TITLE_COLOR));
                    ui.label(
                        RichText::new(format!("{:.2}%", entry.percent())).color(SUBTITLE_COLOR),
                    );
                });
                ui.add(
                    egui::ProgressBar::new(entry.confidence)
                        .fill(ACCENT)
                        .desired_width(ui.available_width()),
                );
                ui.add_space(6.0);
            }
        });
}

fn error_card(ui: &mut egui::Ui, message: &str) {
    ui.add_space(12.0);
    egui::Frame::none()
        .fill(ERROR_BACKGROUND)
        .rounding(12.0)
        .inner_margin(egui::Margin::same(16.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(format!("Error: {}", message)).color(ERROR_TEXT));
            ui.label(
                RichText::new("Try another image.")
                    .small()
                    .color(SUBTITLE_COLOR),
            );
        });
}
