use crate::state::theme::use_theme;
use leptos::*;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme_state = use_theme();
    let current_theme = theme_state.current();

    let on_click = move |_| {
        if let Err(err) = theme_state.toggle() {
            log::error!("theme toggle failed: {}", err);
        }
    };

    view! {
        <button
            type="button"
            class="inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold transition-colors duration-200 bg-action-primary-bg hover:bg-action-primary-bg-hover text-action-primary-text shadow-sm"
            on:click=on_click
            aria-label="Toggle theme"
        >
            {move || current_theme.get().switch_label()}
        </button>
    }
}

#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    crate::state::theme::provide_theme();
    view! { <>{children()}</> }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn toggle_button_names_the_other_theme() {
        // No provider installed: the fallback state starts dark.
        let html = render_to_string(|| view! { <ThemeToggle/> });
        assert!(html.contains("Light Theme"));
        assert!(html.contains("aria-label=\"Toggle theme\""));
    }

    #[test]
    fn toggle_button_reflects_provided_state() {
        let html = render_to_string(|| {
            let state = crate::test_support::helpers::provide_detached_theme();
            state.toggle().unwrap();
            view! { <ThemeToggle/> }
        });
        assert!(html.contains("Dark Theme"));
    }

    #[test]
    fn provider_renders_children() {
        let html = render_to_string(|| {
            view! {
                <ThemeProvider>
                    <span>"wrapped"</span>
                </ThemeProvider>
            }
        });
        assert!(html.contains("wrapped"));
    }
}
