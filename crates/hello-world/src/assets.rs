use std::path::{Path, PathBuf};

use hello_engine::window::RuntimeConfig;

/// GUI font, relative to the asset root.
pub const FONT_ASSET: &str = "assets/fonts/DejaVuSansMono.ttf";

/// Directory holding the running executable.
pub fn exe_dir() -> Option<PathBuf> {
    std::env::current_exe().ok()?.parent().map(Path::to_path_buf)
}

/// Resolves `relative` against the executable's directory.
///
/// Builds run from the source tree (`cargo run`) have no installed assets
/// next to the binary; they use this crate's asset directory instead. When
/// neither copy exists the installed location is returned, so the error names
/// the path a deployment is expected to provide.
pub fn asset_path(exe_dir: Option<&Path>, relative: &str) -> PathBuf {
    let source = Path::new(env!("CARGO_MANIFEST_DIR")).join(relative);
    match exe_dir.map(|dir| dir.join(relative)) {
        Some(installed) if installed.is_file() || !source.is_file() => installed,
        _ => source,
    }
}

/// Runtime configuration of the demo: defaults plus the shipped font.
pub fn runtime_config() -> RuntimeConfig {
    let mut config = RuntimeConfig::default();
    config.gui.font.path = Some(asset_path(exe_dir().as_deref(), FONT_ASSET));
    config
}

#[cfg(test)]
mod tests {
    use hello_engine::gui::{load_font, FontError};

    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("hello-world-{}-{name}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn shipped_config_reads_the_bundled_font() {
        let config = runtime_config();
        let path = config.gui.font.path.expect("demo config sets a font path");

        assert!(path.ends_with(FONT_ASSET));
        assert!(!load_font(&path).unwrap().is_empty());
        assert_eq!(config.gui.font.base_size, 13.0);
    }

    #[test]
    fn installed_copy_wins_over_source_tree() {
        let dir = scratch_dir("installed");
        let installed = dir.join(FONT_ASSET);
        std::fs::create_dir_all(installed.parent().unwrap()).unwrap();
        std::fs::write(&installed, b"font").unwrap();

        assert_eq!(asset_path(Some(&dir), FONT_ASSET), installed);
        std::fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn source_tree_copy_is_used_when_not_installed() {
        let dir = scratch_dir("bare");
        let path = asset_path(Some(&dir), FONT_ASSET);

        assert_eq!(path, Path::new(env!("CARGO_MANIFEST_DIR")).join(FONT_ASSET));
        std::fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn missing_asset_resolves_to_installed_path_and_fails_to_load() {
        let dir = scratch_dir("missing");
        let path = asset_path(Some(&dir), "assets/fonts/absent.ttf");

        assert_eq!(path, dir.join("assets/fonts/absent.ttf"));
        assert!(matches!(load_font(&path), Err(FontError::Read { .. })));
        std::fs::remove_dir_all(dir).unwrap();
    }
}
