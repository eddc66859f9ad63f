use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use egui::{FontData, FontDefinitions, FontFamily, FontId, TextStyle};
use thiserror::Error;

/// Key of a user-supplied face in [`FontDefinitions::font_data`].
pub const CUSTOM_FONT: &str = "custom";

#[derive(Debug, Error)]
pub enum FontError {
    #[error("failed to read font file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("font file {path} is empty")]
    Empty { path: PathBuf },
}

/// Reads a font file into memory.
pub fn load_font(path: &Path) -> Result<Vec<u8>, FontError> {
    let bytes = std::fs::read(path).map_err(|source| FontError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    if bytes.is_empty() {
        return Err(FontError::Empty { path: path.to_path_buf() });
    }
    log::debug!("loaded font {} ({} bytes)", path.display(), bytes.len());
    Ok(bytes)
}

/// Built-in definitions, with `custom` (if any) as the first face of both
/// the proportional and the monospace family.
pub fn font_definitions(custom: Option<Vec<u8>>) -> FontDefinitions {
    let mut fonts = FontDefinitions::default();
    let Some(bytes) = custom else {
        return fonts;
    };

    fonts
        .font_data
        .insert(CUSTOM_FONT.to_owned(), Arc::new(FontData::from_owned(bytes)));
    for family in [FontFamily::Proportional, FontFamily::Monospace] {
        fonts
            .families
            .entry(family)
            .or_default()
            .insert(0, CUSTOM_FONT.to_owned());
    }
    fonts
}

/// Text style sizes in points derived from the body size.
///
/// Points are multiplied by the UI scale at paint time, so body text ends up
/// `base * scale` pixels tall.
pub fn text_styles(base: f32) -> BTreeMap<TextStyle, FontId> {
    [
        (TextStyle::Small, FontId::proportional(base * 0.75)),
        (TextStyle::Body, FontId::proportional(base)),
        (TextStyle::Button, FontId::proportional(base)),
        (TextStyle::Heading, FontId::proportional(base * 1.5)),
        (TextStyle::Monospace, FontId::monospace(base)),
    ]
    .into()
}
