//! Derivation of C symbol names for an emitted asset.
//!
//! Names are not validated as C identifiers and nothing checks for
//! collisions between assets.

use std::path::Path;

/// C symbols for one emitted image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetNames {
    /// Name of the `lv_img_dsc_t` descriptor
    pub symbol: String,
}

impl AssetNames {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
        }
    }

    /// `ui_img_<theme>_<screen>_png`
    pub fn for_screen(theme: &str, screen: &str) -> Self {
        Self::new(format!("ui_img_{}_{}_png", theme, screen))
    }

    /// Conventional output file name for a themed screen image
    pub fn screen_file_name(screen: &str) -> String {
        format!("ui_img_{}_png.c", screen)
    }

    /// Use the output file's stem, e.g. `out/logo.c` -> `logo`
    pub fn from_output_path(path: &Path) -> Self {
        let stem = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self::new(stem)
    }

    /// Name of the pixel array
    pub fn data_symbol(&self) -> String {
        format!("{}_data", self.symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_names() {
        let names = AssetNames::for_screen("bitaxe", "splashscreen2");
        assert_eq!(names.symbol, "ui_img_bitaxe_splashscreen2_png");
        assert_eq!(names.data_symbol(), "ui_img_bitaxe_splashscreen2_png_data");
        assert_eq!(AssetNames::screen_file_name("splashscreen2"), "ui_img_splashscreen2_png.c");
    }

    #[test]
    fn test_output_path_names() {
        let names = AssetNames::from_output_path(Path::new("build/ui_img_logo_png.c"));
        assert_eq!(names.symbol, "ui_img_logo_png");
        assert_eq!(names.data_symbol(), "ui_img_logo_png_data");
    }

    #[test]
    fn test_names_are_deterministic() {
        assert_eq!(
            AssetNames::for_screen("a", "b"),
            AssetNames::for_screen("a", "b")
        );
    }
}
