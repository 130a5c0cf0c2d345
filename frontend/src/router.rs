use leptos::*;
use leptos_meta::provide_meta_context;
use leptos_router::*;

use crate::{components::theme::ThemeProvider, pages::home::HomePage};

pub fn mount_app() {
    mount_to_body(app_root);
}

fn app_root() -> impl IntoView {
    provide_meta_context();
    view! {
        <ThemeProvider>
            <Router>
                <Routes>
                    <Route path="/" view=HomePage/>
                </Routes>
            </Router>
        </ThemeProvider>
    }
}
