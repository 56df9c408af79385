use leptos::prelude::*;

/// Headline figure with a caption
///
/// The value is passed as children so it can be plain text or an animated counter.
#[component]
pub fn StatCard(
    /// Caption under the value
    #[prop(into)]
    label: String,
    /// Card class; defaults to "stat-card"
    #[prop(optional, into)]
    class: Option<String>,
    /// Optional line under the caption
    #[prop(optional, into)]
    subtitle: Option<String>,
    children: Children,
) -> impl IntoView {
    let class = class.unwrap_or_else(|| "stat-card".to_string());
    let subtitle_view = subtitle.map(|s| view! { <span class="stat-card__subtitle">{s}</span> });

    view! {
        <div class=class>
            <span class="stat-card__value">{children()}</span>
            <span class="stat-card__label">{label}</span>
            {subtitle_view}
        </div>
    }
}
