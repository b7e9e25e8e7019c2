use picsum_core::viewport::ViewPort;

use crate::app::ViewerApp;

pub fn show(ctx: &egui::Context, app: &mut ViewerApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let rect = ui.available_rect_before_wrap();
        paint_background(ui, rect);

        let ppp = ctx.pixels_per_point();
        let mut display = app.display.borrow_mut();
        if let Some(texture) = display.texture() {
            let [w, h] = texture.size();
            let fitted = surface_viewport(rect, ppp).fit(w as i32, h as i32);
            draw_image(ui, texture.id(), to_screen(rect, fitted, ppp));
        }
    });
}

fn paint_background(ui: &egui::Ui, rect: egui::Rect) {
    ui.painter()
        .rect_filled(rect, 0.0, egui::Color32::from_gray(30));
}

/// Panel size in physical pixels, the unit texture sizes are measured in.
fn surface_viewport(panel: egui::Rect, pixels_per_point: f32) -> ViewPort {
    ViewPort::of_size(
        (panel.width() * pixels_per_point) as i32,
        (panel.height() * pixels_per_point) as i32,
    )
}

/// Translate a pixel viewport relative to the panel into screen points.
fn to_screen(panel: egui::Rect, vp: ViewPort, pixels_per_point: f32) -> egui::Rect {
    egui::Rect::from_min_size(
        panel.min + egui::vec2(vp.x as f32, vp.y as f32) / pixels_per_point,
        egui::vec2(vp.width as f32, vp.height as f32) / pixels_per_point,
    )
}

fn draw_image(ui: &egui::Ui, texture_id: egui::TextureId, img_rect: egui::Rect) {
    ui.painter().image(
        texture_id,
        img_rect,
        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
        egui::Color32::WHITE,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_image_keeps_natural_pixels_on_hidpi() {
        let panel = egui::Rect::from_min_size(egui::pos2(10.0, 20.0), egui::vec2(500.0, 400.0));
        let fitted = surface_viewport(panel, 2.0).fit(600, 400);
        assert_eq!(fitted, ViewPort::new(200, 200, 600, 400));

        let screen = to_screen(panel, fitted, 2.0);
        assert_eq!(screen.min, egui::pos2(110.0, 120.0));
        assert_eq!(screen.size(), egui::vec2(300.0, 200.0));
    }

    #[test]
    fn test_unit_scale_maps_directly() {
        let panel = egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(800.0, 600.0));
        let fitted = surface_viewport(panel, 1.0).fit(1600, 400);
        let screen = to_screen(panel, fitted, 1.0);
        assert_eq!(screen, egui::Rect::from_min_size(egui::pos2(0.0, 200.0), egui::vec2(800.0, 200.0)));
    }
}
