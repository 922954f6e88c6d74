//! Application State: Zeichen-Session, Optionen und Host-Signale.

use crate::app::CommandLog;
use crate::core::Sketch;
use crate::shared::SketchOptions;

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Punkte und Segmente der laufenden Session
    pub sketch: Sketch,
    /// Darstellungs-Optionen (beim Start aus TOML geladen)
    pub options: SketchOptions,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Geometrie hat sich geändert, der Host soll neu zeichnen
    pub redraw_requested: bool,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State
    pub fn new() -> Self {
        Self {
            sketch: Sketch::new(),
            options: SketchOptions::default(),
            command_log: CommandLog::new(),
            redraw_requested: false,
            should_exit: false,
        }
    }

    /// Gibt die Anzahl aller Punkte zurück (für UI-Anzeige)
    pub fn point_count(&self) -> usize {
        self.sketch.point_count()
    }

    /// Gibt die Anzahl committeter Segmente zurück (für UI-Anzeige)
    pub fn committed_segment_count(&self) -> usize {
        self.sketch.segments().all().len()
    }

    /// Liest und quittiert eine offene Redraw-Anforderung.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
