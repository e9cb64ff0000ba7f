//! Render-Schicht: zeichnet die Segmentfolge einer RenderScene.

pub mod line_renderer;

pub use line_renderer::paint_scene;
