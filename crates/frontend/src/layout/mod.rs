pub mod footer;
pub mod header;

use leptos::prelude::*;

/// Page frame shared by every route.
///
/// ```text
/// +------------------------------------------+
/// |                 Header                   |
/// +------------------------------------------+
/// |              page content                |
/// +------------------------------------------+
/// |                 Footer                   |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <header::Header />
            <main class="main-content">{children()}</main>
            <footer::Footer />
        </div>
    }
}
