use leptos::prelude::*;

/// Inline label rendered as `<span class="{family} {variant}">`
#[component]
pub fn Badge(
    /// Base class of the badge family, e.g. "dpwh-badge"
    family: &'static str,
    /// Variant class, e.g. "complete" or "flood"
    #[prop(into)]
    variant: String,
    children: Children,
) -> impl IntoView {
    view! {
        <span class=format!("{} {}", family, variant)>
            {children()}
        </span>
    }
}
