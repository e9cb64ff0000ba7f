//! Linien-Renderer auf Basis des egui-Painters.
//!
//! Die Segmentfolge der RenderScene wird als einzelne Linien-Primitive
//! gezeichnet. Die Koordinaten liegen bereits im Pixelraum des Viewports;
//! hier findet nur noch die Verschiebung in das Panel-Rechteck und die
//! Verengung auf f32 statt.

use crate::core::Segment;
use crate::shared::RenderScene;

/// Zeichnet Hintergrund und Kurven-Segmente in das Viewport-Rechteck.
///
/// `painter` sollte auf `rect` geclippt sein, damit beim Verschieben des
/// Zentrums nichts in die Panels hineinragt.
pub fn paint_scene(painter: &egui::Painter, rect: egui::Rect, scene: &RenderScene) {
    painter.rect_filled(rect, 0.0, color32(scene.options.background_color));

    let stroke = egui::Stroke::new(
        scene.options.stroke_width,
        color32(scene.options.stroke_color),
    );

    for segment in &scene.segments {
        let [from, to] = to_screen(rect, segment);
        painter.line_segment([from, to], stroke);
    }
}

/// Verschiebt ein Segment in Bildschirm-Koordinaten des Panel-Rechtecks.
fn to_screen(rect: egui::Rect, segment: &Segment) -> [egui::Pos2; 2] {
    [
        rect.min + egui::vec2(segment.from.x as f32, segment.from.y as f32),
        rect.min + egui::vec2(segment.to.x as f32, segment.to.y as f32),
    ]
}

fn color32([r, g, b, a]: [u8; 4]) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(r, g, b, a)
}
