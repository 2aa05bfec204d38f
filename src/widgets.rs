use egui::{CursorIcon, Response, Sense, Ui, Vec2, Widget};

pub struct CloseButton;

impl Widget for CloseButton {
    fn ui(self, ui: &mut Ui) -> Response {
        let size = ui.spacing().icon_width;
        let (rect, response) = ui.allocate_exact_size(Vec2::splat(size), Sense::click());
        let response = response
            .on_hover_cursor(CursorIcon::PointingHand)
            .on_hover_text("Close");

        if ui.is_rect_visible(rect) {
            let visuals = ui.style().interact(&response);
            let rect = rect.shrink(size * 0.25).expand(visuals.expansion / 2.0);
            let stroke = visuals.fg_stroke;
            ui.painter() // paints \
                .line_segment([rect.left_top(), rect.right_bottom()], stroke);
            ui.painter() // paints /
                .line_segment([rect.right_top(), rect.left_bottom()], stroke);
        }

        response
    }
}
