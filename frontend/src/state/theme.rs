use leptos::*;
use web_sys::{Element, Storage};

use crate::config;
use crate::utils::storage as storage_utils;

pub const DARK_CLASS: &str = "dark-mode";
pub const LIGHT_CLASS: &str = "light-mode";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_class(&self) -> &'static str {
        match self {
            Theme::Dark => DARK_CLASS,
            Theme::Light => LIGHT_CLASS,
        }
    }

    /// Total over arbitrary class strings: anything that is not the light
    /// class collapses to `Dark`, so toggling an unknown value always lands
    /// on `Light`.
    pub fn from_class(class: &str) -> Self {
        if class == LIGHT_CLASS {
            Theme::Light
        } else {
            Theme::Dark
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Label text naming the theme a click would switch to.
    pub fn switch_label(&self) -> &'static str {
        match self {
            Theme::Dark => "Light Theme",
            Theme::Light => "Dark Theme",
        }
    }
}

#[derive(Clone)]
struct DomTargets {
    root: Element,
    label: Option<Element>,
    storage: Storage,
    storage_key: String,
}

impl DomTargets {
    fn sync_label(&self, theme: Theme) {
        if let Some(label) = &self.label {
            label.set_text_content(Some(theme.switch_label()));
        }
    }

    fn persist(&self, class: &str) -> Result<(), String> {
        self.storage
            .set_item(&self.storage_key, class)
            .map_err(|_| format!("Failed to persist theme under `{}`", self.storage_key))
    }
}

/// The page-wide theme: a signal mirroring the root element's class, plus the
/// DOM targets and storage handle it is reconciled against.
#[derive(Clone)]
pub struct ThemeState {
    theme: RwSignal<Theme>,
    targets: Option<DomTargets>,
}

impl ThemeState {
    /// State with no DOM wiring. Used as the context fallback and on the
    /// server side, where only the signal is meaningful.
    pub fn detached() -> Self {
        Self {
            theme: create_rw_signal(Theme::default()),
            targets: None,
        }
    }

    /// Wire the controller to explicit targets. `mount` resolves them from
    /// the configured element ids; tests and embedders can pass their own.
    pub fn with_targets(
        root: Element,
        label: Option<Element>,
        storage: Storage,
        storage_key: impl Into<String>,
    ) -> Self {
        let theme = create_rw_signal(Theme::from_class(&root.class_name()));
        Self {
            theme,
            targets: Some(DomTargets {
                root,
                label,
                storage,
                storage_key: storage_key.into(),
            }),
        }
    }

    /// Resolve the configured root element, the optional status label, and
    /// localStorage. A missing root element is a wiring error in the page,
    /// not a recoverable condition.
    pub fn mount() -> Result<Self, String> {
        let document = storage_utils::document()?;
        let root_id = config::root_id();
        let root = document
            .get_element_by_id(&root_id)
            .ok_or_else(|| format!("No element with id `{}`", root_id))?;
        let label = document.get_element_by_id(&config::label_id());
        let storage = storage_utils::local_storage()?;
        Ok(Self::with_targets(root, label, storage, config::storage_key()))
    }

    /// Reconcile the root element class with the stored preference: an empty
    /// store is seeded from whatever class the markup shipped with, a
    /// non-empty store overwrites the markup class. Never flips the theme.
    pub fn initialize(&self) -> Result<(), String> {
        let targets = match &self.targets {
            Some(targets) => targets,
            None => return Ok(()),
        };

        let stored = targets
            .storage
            .get_item(&targets.storage_key)
            .map_err(|_| format!("Failed to read theme under `{}`", targets.storage_key))?;

        let class = match stored {
            Some(stored) => {
                targets.root.set_class_name(&stored);
                stored
            }
            None => {
                let class = targets.root.class_name();
                targets.persist(&class)?;
                class
            }
        };

        let theme = Theme::from_class(&class);
        targets.sync_label(theme);
        self.theme.set(theme);
        log::debug!("theme initialized from `{}`", class);
        Ok(())
    }

    /// Flip to the opposite theme: update the root element class, the status
    /// label (when one is wired), and the stored preference.
    pub fn toggle(&self) -> Result<(), String> {
        let targets = match &self.targets {
            Some(targets) => targets,
            None => {
                self.theme.update(|theme| *theme = theme.opposite());
                return Ok(());
            }
        };

        let next = Theme::from_class(&targets.root.class_name()).opposite();
        targets.root.set_class_name(next.as_class());
        targets.sync_label(next);
        targets.persist(next.as_class())?;
        self.theme.set(next);
        log::debug!("theme toggled to `{}`", next.as_class());
        Ok(())
    }

    pub fn current(&self) -> ReadSignal<Theme> {
        self.theme.read_only()
    }
}

pub fn use_theme() -> ThemeState {
    use_context::<ThemeState>().unwrap_or_else(ThemeState::detached)
}

#[cfg(target_arch = "wasm32")]
pub fn provide_theme() -> ThemeState {
    let state = ThemeState::mount().expect("theme root element must be present in the page");
    if let Err(err) = state.initialize() {
        log::error!("failed to reconcile stored theme: {}", err);
    }
    provide_context(state.clone());
    state
}

#[cfg(not(target_arch = "wasm32"))]
pub fn provide_theme() -> ThemeState {
    let state = ThemeState::detached();
    provide_context(state.clone());
    state
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn detached_state_toggles_signal() {
        with_runtime(|| {
            let state = ThemeState::detached();
            assert_eq!(state.current().get_untracked(), Theme::Dark);
            state.toggle().unwrap();
            assert_eq!(state.current().get_untracked(), Theme::Light);
            state.toggle().unwrap();
            assert_eq!(state.current().get_untracked(), Theme::Dark);
        });
    }

    #[test]
    fn use_theme_falls_back_to_detached_state() {
        with_runtime(|| {
            let state = use_theme();
            assert_eq!(state.current().get_untracked(), Theme::Dark);
        });
    }

    #[test]
    fn use_theme_returns_provided_state() {
        with_runtime(|| {
            let provided = crate::test_support::helpers::provide_detached_theme();
            provided.toggle().unwrap();
            let state = use_theme();
            assert_eq!(state.current().get_untracked(), Theme::Light);
        });
    }

    #[test]
    fn provide_theme_installs_context() {
        with_runtime(|| {
            let provided = provide_theme();
            provided.toggle().unwrap();
            assert_eq!(use_theme().current().get_untracked(), Theme::Light);
        });
    }
}
