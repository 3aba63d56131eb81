use std::{collections::HashSet, fmt, slice};

pub const HOME_PATH: &str = "/";

/// One navigable destination.  `V` identifies the view that renders it and is
/// never inspected here.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Route<V> {
    pub name: String,
    pub path: String,
    pub view: V,
    pub icon: Option<String>,
}

impl<V> Route<V> {
    pub fn is_home(&self) -> bool {
        self.path == HOME_PATH
    }
}

/// Ordered, immutable list of every destination.  Order is menu order; the
/// landing entry is always first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteRegistry<V> {
    routes: Vec<Route<V>>,
}

impl<V> RouteRegistry<V> {
    pub fn builder() -> RegistryBuilder<V> {
        RegistryBuilder { routes: Vec::new() }
    }

    pub fn home(&self) -> &Route<V> {
        // Guaranteed by `RegistryBuilder::build`.
        &self.routes[0]
    }

    pub fn get(&self, position: usize) -> Option<&Route<V>> {
        self.routes.get(position)
    }

    pub fn find_by_path(&self, path: &str) -> Option<&Route<V>> {
        self.routes.iter().find(|route| route.path == path)
    }

    pub fn iter(&self) -> slice::Iter<'_, Route<V>> {
        self.routes.iter()
    }

    pub fn as_slice(&self) -> &[Route<V>] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Start a new table from this one, e.g. to add a feature view.
    pub fn to_builder(&self) -> RegistryBuilder<V>
    where
        V: Clone,
    {
        RegistryBuilder {
            routes: self.routes.clone(),
        }
    }
}

impl<'a, V> IntoIterator for &'a RouteRegistry<V> {
    type Item = &'a Route<V>;
    type IntoIter = slice::Iter<'a, Route<V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.routes.iter()
    }
}

pub struct RegistryBuilder<V> {
    routes: Vec<Route<V>>,
}

impl<V> RegistryBuilder<V> {
    pub fn home(mut self, name: impl Into<String>, view: V) -> Self {
        self.routes.push(Route {
            name: name.into(),
            path: HOME_PATH.to_string(),
            view,
            icon: None,
        });
        self
    }

    pub fn route(
        mut self,
        name: impl Into<String>,
        path: impl Into<String>,
        view: V,
        icon: impl Into<String>,
    ) -> Self {
        self.routes.push(Route {
            name: name.into(),
            path: path.into(),
            view,
            icon: Some(icon.into()),
        });
        self
    }

    /// Place `route` before the entry at `position`, or append it.
    pub fn insert(mut self, position: usize, route: Route<V>) -> Self {
        let position = position.min(self.routes.len());
        self.routes.insert(position, route);
        self
    }

    pub fn remove(mut self, path: &str) -> Self {
        self.routes.retain(|route| route.path != path);
        self
    }

    pub fn build(self) -> Result<RouteRegistry<V>, RegistryError> {
        let mut paths = HashSet::new();
        let mut names = HashSet::new();
        for (position, route) in self.routes.iter().enumerate() {
            if route.name.trim().is_empty() || route.path.is_empty() {
                return Err(RegistryError::EmptyField);
            }
            if !is_dispatchable(&route.path) {
                return Err(RegistryError::InvalidPath(route.path.clone()));
            }
            if !paths.insert(route.path.as_str()) {
                return Err(RegistryError::DuplicatePath(route.path.clone()));
            }
            if !names.insert(route.name.as_str()) {
                return Err(RegistryError::DuplicateName(route.name.clone()));
            }
            if route.is_home() {
                if position != 0 {
                    return Err(RegistryError::HomeNotFirst);
                }
                if route.icon.is_some() {
                    return Err(RegistryError::HomeWithIcon);
                }
            } else if route.icon.as_deref().map_or(true, |icon| icon.trim().is_empty()) {
                return Err(RegistryError::MissingIcon(route.path.clone()));
            }
        }
        if !paths.contains(HOME_PATH) {
            return Err(RegistryError::MissingHome);
        }
        Ok(RouteRegistry {
            routes: self.routes,
        })
    }
}

/// Paths must be in the form the router normalises requests to, otherwise
/// they could never be dispatched.
fn is_dispatchable(path: &str) -> bool {
    if path == HOME_PATH {
        return true;
    }
    path.starts_with('/') && !path.ends_with('/') && !path.contains(['?', '#'])
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegistryError {
    MissingHome,
    HomeNotFirst,
    HomeWithIcon,
    DuplicatePath(String),
    DuplicateName(String),
    MissingIcon(String),
    InvalidPath(String),
    EmptyField,
}

impl std::error::Error for RegistryError {}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingHome => write!(f, "no route is bound to {HOME_PATH}"),
            Self::HomeNotFirst => write!(f, "the {HOME_PATH} route must come first"),
            Self::HomeWithIcon => write!(f, "the {HOME_PATH} route cannot carry an icon"),
            Self::DuplicatePath(path) => write!(f, "path {path} is bound twice"),
            Self::DuplicateName(name) => write!(f, "route name {name:?} is used twice"),
            Self::MissingIcon(path) => write!(f, "route {path} has no icon"),
            Self::InvalidPath(path) => write!(f, "path {path:?} is not a canonical route path"),
            Self::EmptyField => write!(f, "route name and path cannot be empty"),
        }
    }
}
