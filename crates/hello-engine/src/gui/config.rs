use std::path::PathBuf;

/// Size in points of body text before DPI scaling.
pub const BASE_FONT_SIZE: f32 = 13.0;

/// GUI context feature flags, recorded at startup.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct GuiFlags {
    /// Tab / arrow-key focus navigation.
    pub keyboard_nav: bool,
    pub gamepad_nav: bool,
    /// Dockable windows.
    pub docking: bool,
}

impl Default for GuiFlags {
    fn default() -> Self {
        Self {
            keyboard_nav: true,
            gamepad_nav: true,
            docking: true,
        }
    }
}

impl GuiFlags {
    /// Names of requested flags the GUI backend has no support for.
    pub fn unsupported(&self) -> Vec<&'static str> {
        let mut out = Vec::new();
        if self.gamepad_nav {
            out.push("gamepad navigation");
        }
        if self.docking {
            out.push("docking");
        }
        out
    }
}

/// Font source and base size.
#[derive(Debug, Clone, PartialEq)]
pub struct FontConfig {
    /// TTF/OTF file installed as the primary face. `None` keeps the built-in font.
    pub path: Option<PathBuf>,
    pub base_size: f32,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            path: None,
            base_size: BASE_FONT_SIZE,
        }
    }
}

/// GUI layer configuration.
#[derive(Debug, Clone, Default)]
pub struct GuiConfig {
    pub flags: GuiFlags,
    pub font: FontConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_enable_all_flags() {
        let flags = GuiFlags::default();
        assert!(flags.keyboard_nav && flags.gamepad_nav && flags.docking);
        assert_eq!(flags.unsupported(), vec!["gamepad navigation", "docking"]);
    }

    #[test]
    fn keyboard_only_has_nothing_unsupported() {
        let flags = GuiFlags {
            keyboard_nav: true,
            gamepad_nav: false,
            docking: false,
        };
        assert!(flags.unsupported().is_empty());
    }

    #[test]
    fn default_font_is_builtin_at_13() {
        let font = FontConfig::default();
        assert_eq!(font.path, None);
        assert_eq!(font.base_size, 13.0);
    }
}
