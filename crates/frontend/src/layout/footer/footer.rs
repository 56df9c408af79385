use leptos::prelude::*;

const DATA_SOURCES: &str = "Data: PSA 2024 Census, DTI CMCI, BLGF, DPWH Transparency Portal";

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer data-zone="footer" class="status-bar">
            <span class="status-bar__sources">{DATA_SOURCES}</span>
        </footer>
    }
}
