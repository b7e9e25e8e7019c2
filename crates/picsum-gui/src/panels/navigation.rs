use picsum_core::display::ImageDisplay;

use crate::app::ViewerApp;

pub fn show(ctx: &egui::Context, app: &mut ViewerApp) {
    egui::TopBottomPanel::bottom("navigation").show(ctx, |ui| {
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            if ui.button("Previous").clicked() {
                let listener = app.display.borrow().backward_listener();
                listener();
            }
            if ui.button("Next").clicked() {
                let listener = app.display.borrow().forward_listener();
                listener();
            }
            ui.separator();
            ui.label(status_text(app));
        });
        ui.add_space(4.0);
    });
}

fn status_text(app: &ViewerApp) -> String {
    if let Some(ref status) = app.status {
        return status.clone();
    }
    let display = app.display.borrow();
    let current = display.current();
    match current.index() {
        Some(i) => format!("Image {} / {}", i + 1, current.len()),
        None => "No images".to_string(),
    }
}
