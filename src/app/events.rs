//! App-Intent und App-Command Events.
//!
//! Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
//! Commands sind mutierende Schritte, die zentral ausgeführt werden.

use glam::DVec2;

use crate::core::FractalKind;

/// Eingabe-Ereignisse aus der UI, noch ohne Mutationslogik.
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    /// Anwendung beenden
    ExitRequested,
    /// Aktive Ansicht auf die Anfangs-Platzierung zurücksetzen
    ResetViewRequested,
    /// Stufenweise hineinzoomen (Menü/Shortcut)
    ZoomInRequested,
    /// Stufenweise herauszoomen (Menü/Shortcut)
    ZoomOutRequested,
    /// Fraktal-Variante wechseln
    FractalSelected { kind: FractalKind },
    /// Rekursionstiefe ändern (wird an der Intent-Grenze begrenzt)
    DepthChanged { depth: u32 },
    /// Viewport-Größe hat sich geändert (jeden Frame gemeldet)
    ViewportResized { size: [f32; 2] },
    /// Zeigertaste im Viewport gedrückt
    PointerPressed { pos: DVec2 },
    /// Zeiger bei gedrückter Taste bewegt
    PointerDragged { pos: DVec2 },
    /// Zeigertaste losgelassen
    PointerReleased,
    /// Mausrad gescrollt (positive Werte vergrößern den Radius)
    Scrolled { delta: f64 },
}

/// Mutierende Schritte, die zentral vom Controller ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Anwendung beenden
    RequestExit,
    /// Aktive Ansicht zurücksetzen
    ResetView,
    /// Fraktal-Variante setzen
    SetFractal { kind: FractalKind },
    /// Rekursionstiefe setzen (bereits begrenzt)
    SetDepth { depth: u32 },
    /// Viewport-Größe übernehmen und Zentren proportional nachführen
    SetViewportSize { size: [f64; 2] },
    /// Drag an der Zeigerposition beginnen
    BeginDrag { pos: DVec2 },
    /// Zentrum relativ zur Drag-Baseline verschieben
    DragTo { pos: DVec2 },
    /// Laufenden Drag beenden
    EndDrag,
    /// Scroll-Delta auf den Radius der aktiven Ansicht anwenden
    ApplyScroll { delta: f64 },
}
