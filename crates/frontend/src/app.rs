use leptos::prelude::*;

use crate::routes::{AppRoutes, Router};

#[component]
pub fn App() -> impl IntoView {
    // Provide the router to the whole app via context.
    let router = Router::new();
    provide_context(router);
    router.init_popstate();

    view! {
        <div class="console">
            <header class="console-header">
                <span class="console-header__brand">"Administration"</span>
                <span class="console-header__section">"Settings"</span>
            </header>
            <main class="console-main">
                <AppRoutes/>
            </main>
        </div>
    }
}
