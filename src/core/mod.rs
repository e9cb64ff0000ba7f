//! Domänenkern: Geometrie, Kurvengeneratoren, Formaufbau und View-Zustand.
//!
//! Dieses Modul ist frei von egui-Abhängigkeiten; die UI-Schicht spricht
//! ausschließlich über `AppIntent`s mit ihm.

pub mod curve;
pub mod geometry;
pub mod shape;
pub mod view;

pub use curve::{FractalKind, Segment};
pub use view::FractalView;
