use egui::{Align2, Color32, ColorImage, FontId, Painter, Pos2, Rect, pos2, vec2};
use image::RgbImage;
use platesim_core::button::ButtonRect;

pub fn color32(rgb: [u8; 3]) -> Color32 {
    Color32::from_rgb(rgb[0], rgb[1], rgb[2])
}

pub fn to_color_image(img: &RgbImage) -> ColorImage {
    let (w, h) = img.dimensions();
    ColorImage::from_rgb([w as usize, h as usize], img.as_raw())
}

pub fn to_rect(rect: &ButtonRect) -> Rect {
    Rect::from_min_size(pos2(rect.x, rect.y), vec2(rect.width, rect.height))
}

// Filled rectangle with a centered label
pub fn draw_button(painter: &Painter, rect: &ButtonRect, label: &str, fill: Color32) {
    let r = to_rect(rect);
    painter.rect_filled(r, 0.0, fill);
    painter.text(
        r.center(),
        Align2::CENTER_CENTER,
        label,
        FontId::proportional(18.0),
        Color32::WHITE,
    );
}

// Paint a texture stretched over `[0, size]` in screen space
pub fn draw_texture(painter: &Painter, texture: &egui::TextureHandle, size: egui::Vec2) {
    painter.image(
        texture.id(),
        Rect::from_min_size(Pos2::ZERO, size),
        Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0)),
        Color32::WHITE,
    );
}
