#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::state::theme::ThemeState;
    use leptos::*;

    pub fn provide_detached_theme() -> ThemeState {
        let state = ThemeState::detached();
        provide_context(state.clone());
        state
    }
}
