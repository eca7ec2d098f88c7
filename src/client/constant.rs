pub const SITE_NAME: &str = "Grimoire";

/// `localStorage` key holding the selected colour theme.
pub const THEME_STORAGE_KEY: &str = "theme";
