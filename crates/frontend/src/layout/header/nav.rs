use leptos::prelude::*;
use leptos_router::components::A;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub href: &'static str,
    pub title: &'static str,
    pub icon_name: &'static str,
}

pub const NAV_ITEMS: [NavItem; 3] = [
    NavItem {
        href: "/",
        title: "Projects",
        icon_name: "bi-cone-striped",
    },
    NavItem {
        href: "/statistics",
        title: "Statistics",
        icon_name: "bi-bar-chart",
    },
    NavItem {
        href: "/transparency",
        title: "Transparency",
        icon_name: "bi-cash-coin",
    },
];

#[component]
pub fn NavBar() -> impl IntoView {
    view! {
        <nav class="nav-bar">
            {NAV_ITEMS
                .iter()
                .map(|item| {
                    view! {
                        <A href=item.href attr:class="nav-bar__link">
                            <i class=format!("bi {}", item.icon_name)></i>
                            {item.title}
                        </A>
                    }
                })
                .collect_view()}
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_items_are_rooted_and_unique() {
        for item in NAV_ITEMS {
            assert!(item.href.starts_with('/'));
        }
        let mut hrefs: Vec<&str> = NAV_ITEMS.iter().map(|i| i.href).collect();
        hrefs.dedup();
        assert_eq!(hrefs.len(), NAV_ITEMS.len());
    }
}
