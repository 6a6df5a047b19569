use egui::{Context, FontData, FontDefinitions, FontFamily};
use std::path::Path;
use std::sync::Arc;

const DEVANAGARI_FONT: &str = "devanagari";

/// Las fuentes por defecto de egui no traen glifos devanagari; si hay una
/// fuente configurada se añade como respaldo de ambas familias.
pub fn install_fonts(ctx: &Context, marathi_font: Option<&Path>) {
    let Some(path) = marathi_font else {
        log::info!("no marathi_font configured, Devanagari text may not render");
        return;
    };

    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            log::warn!("cannot read font {}: {e}", path.display());
            return;
        }
    };

    let mut fonts = FontDefinitions::default();
    fonts.font_data.insert(
        DEVANAGARI_FONT.to_owned(),
        Arc::new(FontData::from_owned(bytes)),
    );
    for family in [FontFamily::Proportional, FontFamily::Monospace] {
        fonts
            .families
            .entry(family)
            .or_default()
            .push(DEVANAGARI_FONT.to_owned());
    }
    ctx.set_fonts(fonts);
    log::info!("installed Devanagari font from {}", path.display());
}
