// light/dark theme resolution
//
// the flag is read once at startup and only changes when the user clicks the logo.
// where it is actually stored is left to the PreferenceStore, so the same logic
// runs against local storage in the browser and against memory in tests

// every local-storage entry the site writes carries this prefix
pub const STORAGE_PREFIX: &str = "portfolio_";

// storage key for the persisted flag, before prefixing
pub const DARK_MODE_KEY: &str = "dark_mode";

pub fn storage_key(key: &str) -> String {
    format!("{STORAGE_PREFIX}{key}")
}

// class added to the document root while dark mode is on
pub const DARK_CLASS: &str = "dark";

pub const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn from_dark_flag(dark: bool) -> Self {
        if dark { Theme::Dark } else { Theme::Light }
    }

    pub fn is_dark(&self) -> bool {
        *self == Theme::Dark
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    // a stored choice wins, then the os preference, then light
    pub fn resolve(stored: Option<bool>, prefers_dark: Option<bool>) -> Self {
        stored
            .or(prefers_dark)
            .map(Theme::from_dark_flag)
            .unwrap_or_default()
    }
}

pub trait PreferenceStore {
    fn load_dark_mode(&self) -> Option<bool>;

    fn store_dark_mode(&mut self, dark: bool);
}

// resolves the startup theme, persisting it if nothing was stored yet
pub fn initial_theme<S>(store: &mut S, prefers_dark: Option<bool>) -> Theme
where
    S: PreferenceStore + ?Sized,
{
    let stored = store.load_dark_mode();
    let theme = Theme::resolve(stored, prefers_dark);

    if stored.is_none() {
        store.store_dark_mode(theme.is_dark());
    }

    theme
}

pub fn toggle_theme<S>(store: &mut S, current: Theme) -> Theme
where
    S: PreferenceStore + ?Sized,
{
    let next = current.toggled();
    store.store_dark_mode(next.is_dark());
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct MemoryStore {
        dark_mode: Option<bool>,
        writes: usize,
    }

    impl PreferenceStore for MemoryStore {
        fn load_dark_mode(&self) -> Option<bool> {
            self.dark_mode
        }

        fn store_dark_mode(&mut self, dark: bool) {
            self.dark_mode = Some(dark);
            self.writes += 1;
        }
    }

    // the flag is stored as a bare json boolean under portfolio_dark_mode
    #[test]
    fn stored_flag_format() {
        assert_eq!(storage_key(DARK_MODE_KEY), "portfolio_dark_mode");

        assert_eq!(serde_json::to_string(&true).expect("bool"), "true");
        assert_eq!(serde_json::to_string(&false).expect("bool"), "false");
        assert!(!serde_json::from_str::<bool>("false").expect("bool"));
        assert!(serde_json::from_str::<bool>("true").expect("bool"));
    }

    #[test]
    fn resolution_order() {
        assert_eq!(Theme::resolve(Some(false), Some(true)), Theme::Light);
        assert_eq!(Theme::resolve(Some(true), Some(false)), Theme::Dark);
        assert_eq!(Theme::resolve(None, Some(true)), Theme::Dark);
        assert_eq!(Theme::resolve(None, Some(false)), Theme::Light);
        assert_eq!(Theme::resolve(None, None), Theme::Light);
    }

    #[test]
    fn os_preference_is_persisted_on_first_load() {
        let mut store = MemoryStore::default();

        let theme = initial_theme(&mut store, Some(true));

        assert_eq!(theme, Theme::Dark);
        assert_eq!(store.dark_mode, Some(true));
    }

    #[test]
    fn stored_choice_is_not_rewritten() {
        let mut store = MemoryStore {
            dark_mode: Some(false),
            writes: 0,
        };

        let theme = initial_theme(&mut store, Some(true));

        assert_eq!(theme, Theme::Light);
        assert_eq!(store.writes, 0);
    }

    #[test]
    fn double_toggle_restores_the_flag() {
        let mut store = MemoryStore::default();
        let initial = initial_theme(&mut store, None);
        let original = store.dark_mode;

        let once = toggle_theme(&mut store, initial);
        assert_eq!(once, Theme::Dark);
        assert_eq!(store.dark_mode, Some(true));

        let twice = toggle_theme(&mut store, once);
        assert_eq!(twice, initial);
        assert_eq!(store.dark_mode, original);
    }
}
