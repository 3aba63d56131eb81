use std::collections::HashMap;

use super::registry::{Route, RouteRegistry, HOME_PATH};

/// Path dispatch over a registry.
pub struct Router<V> {
    registry: RouteRegistry<V>,
    by_path: HashMap<String, usize>,
}

impl<V> Router<V> {
    pub fn new(registry: RouteRegistry<V>) -> Self {
        let by_path = registry
            .iter()
            .enumerate()
            .map(|(position, route)| (route.path.clone(), position))
            .collect();
        Self { registry, by_path }
    }

    pub fn registry(&self) -> &RouteRegistry<V> {
        &self.registry
    }

    pub fn dispatch(&self, path: &str) -> Option<&Route<V>> {
        let position = *self.by_path.get(normalize(path))?;
        self.registry.get(position)
    }

    pub fn dispatch_or_home(&self, path: &str) -> &Route<V> {
        self.dispatch(path).unwrap_or_else(|| {
            log::warn!("no route for {path:?}, falling back to {HOME_PATH}");
            self.registry.home()
        })
    }
}

/// Strip query, fragment and trailing slashes: `/streams/?tab=2` → `/streams`.
fn normalize(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let path = path[..end].trim_end_matches('/');
    if path.is_empty() {
        HOME_PATH
    } else {
        path
    }
}
