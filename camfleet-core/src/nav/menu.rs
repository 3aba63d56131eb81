use super::registry::{Route, RouteRegistry};

/// What a navigation drawer shows for one destination.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuItem<'a> {
    pub name: &'a str,
    pub path: &'a str,
    pub icon: &'a str,
}

/// Every icon-bearing route in registry order.  The landing entry has no icon
/// and is never listed.
pub fn menu_items<V>(registry: &RouteRegistry<V>) -> Vec<MenuItem<'_>> {
    menu_items_where(registry, |_| true)
}

/// Like [`menu_items`], keeping only routes accepted by `keep`.
pub fn menu_items_where<'a, V, F>(
    registry: &'a RouteRegistry<V>,
    mut keep: F,
) -> Vec<MenuItem<'a>>
where
    F: FnMut(&Route<V>) -> bool,
{
    registry
        .iter()
        .filter(|route| keep(route))
        .filter_map(|route| {
            route.icon.as_deref().map(|icon| MenuItem {
                name: &route.name,
                path: &route.path,
                icon,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_is_left_out() {
        let registry = RouteRegistry::builder()
            .home("Home", ())
            .route("Streams", "/streams", (), "mdi-video")
            .route("Settings", "/settings", (), "mdi-cog")
            .route("Fleet Management", "/fleetmanagement", (), "mdi-truck")
            .build()
            .unwrap();

        let items = menu_items(&registry);
        assert_eq!(
            items,
            vec![
                MenuItem {
                    name: "Streams",
                    path: "/streams",
                    icon: "mdi-video"
                },
                MenuItem {
                    name: "Settings",
                    path: "/settings",
                    icon: "mdi-cog"
                },
                MenuItem {
                    name: "Fleet Management",
                    path: "/fleetmanagement",
                    icon: "mdi-truck"
                },
            ]
        );
    }

    #[test]
    fn consumer_side_filtering() {
        let registry = RouteRegistry::builder()
            .home("Home", "operator")
            .route("Streams", "/streams", "operator", "mdi-video")
            .route("Fleet Management", "/fleetmanagement", "admin", "mdi-truck")
            .build()
            .unwrap();

        let operator = menu_items_where(&registry, |route| route.view == "operator");
        assert_eq!(operator.len(), 1);
        assert_eq!(operator[0].path, "/streams");
    }
}
