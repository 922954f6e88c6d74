//! Zentrale Konfiguration für den Bézier-Skizzenblock.
//!
//! `SketchOptions` enthält alle beim Start ladbaren Darstellungswerte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Kurven ──────────────────────────────────────────────────────────

/// Farbe der Kurven-Linie (RGBA: Blau).
pub const CURVE_COLOR: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
/// Linienstärke der Kurven in Pixeln.
pub const CURVE_WIDTH: f32 = 2.0;
/// Farbe des Kontrollpolygons (RGBA: Schwarz, 30 %).
pub const CONTROL_POLYGON_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 0.3];
/// Linienstärke des Kontrollpolygons in Pixeln.
pub const CONTROL_POLYGON_WIDTH: f32 = 1.0;

// ── Zeichenfläche ───────────────────────────────────────────────────

/// Hintergrundfarbe der Zeichenfläche (RGBA: Weiß).
pub const BACKGROUND_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

// ── Punkt-Handles ───────────────────────────────────────────────────

/// Radius der Punkt-Handles in Pixeln (gleichzeitig Hit-Radius).
pub const HANDLE_RADIUS: f32 = 6.0;
/// Farbe der Punkt-Handles (RGBA: Rot).
pub const HANDLE_COLOR: [f32; 4] = [0.9, 0.1, 0.1, 1.0];
/// Farbe eines gerade gezogenen Handles (RGBA: Orange).
pub const HANDLE_COLOR_DRAGGING: [f32; 4] = [1.0, 0.5, 0.1, 1.0];

// ── Koordinaten-Labels ──────────────────────────────────────────────

/// Textfarbe der Koordinaten-Labels (RGBA: Dunkelgrau).
pub const LABEL_COLOR: [f32; 4] = [0.2, 0.2, 0.2, 1.0];
/// Schriftgröße der Koordinaten-Labels.
pub const LABEL_FONT_SIZE: f32 = 12.0;
/// Versatz des Labels relativ zum Punkt in Pixeln.
pub const LABEL_OFFSET: [f32; 2] = [8.0, -8.0];

/// Alle beim Start ladbaren Darstellungs-Optionen.
/// Wird als `bezier_sketch.toml` neben der Binary gesucht.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SketchOptions {
    // ── Kurven ──────────────────────────────────────────────────
    /// Farbe der Kurven-Linie (RGBA)
    pub curve_color: [f32; 4],
    /// Linienstärke der Kurven
    pub curve_width: f32,
    /// Farbe des Kontrollpolygons (RGBA)
    pub control_polygon_color: [f32; 4],
    /// Linienstärke des Kontrollpolygons
    pub control_polygon_width: f32,

    // ── Zeichenfläche ───────────────────────────────────────────
    /// Hintergrundfarbe (RGBA)
    pub background_color: [f32; 4],

    // ── Handles ─────────────────────────────────────────────────
    /// Handle-Radius in Pixeln (Hit-Test nutzt denselben Wert)
    pub handle_radius: f32,
    /// Handle-Farbe (RGBA)
    pub handle_color: [f32; 4],
    /// Handle-Farbe während eines Drags (RGBA)
    pub handle_color_dragging: [f32; 4],

    // ── Labels ──────────────────────────────────────────────────
    /// Label-Textfarbe (RGBA)
    pub label_color: [f32; 4],
    /// Label-Schriftgröße
    pub label_font_size: f32,
    /// Label-Versatz [x, y] in Pixeln
    pub label_offset: [f32; 2],
}

impl Default for SketchOptions {
    fn default() -> Self {
        Self {
            curve_color: CURVE_COLOR,
            curve_width: CURVE_WIDTH,
            control_polygon_color: CONTROL_POLYGON_COLOR,
            control_polygon_width: CONTROL_POLYGON_WIDTH,

            background_color: BACKGROUND_COLOR,

            handle_radius: HANDLE_RADIUS,
            handle_color: HANDLE_COLOR,
            handle_color_dragging: HANDLE_COLOR_DRAGGING,

            label_color: LABEL_COLOR,
            label_font_size: LABEL_FONT_SIZE,
            label_offset: LABEL_OFFSET,
        }
    }
}

impl SketchOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_toml_or_default(&content, path),
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    fn from_toml_or_default(content: &str, path: &std::path::Path) -> Self {
        match toml::from_str(content) {
            Ok(opts) => {
                log::info!("Optionen geladen aus: {}", path.display());
                opts
            }
            Err(e) => {
                log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                Self::default()
            }
        }
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("bezier-sketch"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("bezier_sketch.toml")
    }
}
