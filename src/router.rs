//! Named routes and the navigation back stack
//!
//! Routes travel as path strings, the same way a navigation host would carry
//! them. The result route's `listData` parameter holds an already-encoded
//! transfer string and is inserted verbatim.

/// Path of the entry form
pub const HOME_ROUTE: &str = "home";

/// Base path of the result view
pub const RESULT_ROUTE: &str = "resultContent/";

/// Query parameter carrying the transfer string
pub const LIST_DATA_PARAM: &str = "listData";

/// Errors raised while parsing a route path.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    #[error("Unknown route: {0}")]
    UnknownRoute(String),
}

/// A destination in the app
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Result { list_data: String },
}

impl Route {
    /// Build the path string for this route
    pub fn path(&self) -> String {
        match self {
            Route::Home => HOME_ROUTE.to_string(),
            Route::Result { list_data } => {
                format!("{RESULT_ROUTE}?{LIST_DATA_PARAM}={list_data}")
            }
        }
    }

    /// Parse a path string. A result path without `listData` carries an empty string.
    pub fn parse(path: &str) -> Result<Self, RouteError> {
        let (base, query) = match path.split_once('?') {
            Some((base, query)) => (base, Some(query)),
            None => (path, None),
        };

        if base == HOME_ROUTE {
            return Ok(Route::Home);
        }

        if base.trim_end_matches('/') == RESULT_ROUTE.trim_end_matches('/') {
            let list_data = query
                .into_iter()
                .flat_map(|q| q.split('&'))
                .find_map(|pair| {
                    let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
                    (key == LIST_DATA_PARAM).then(|| value.to_string())
                })
                .unwrap_or_default();
            return Ok(Route::Result { list_data });
        }

        Err(RouteError::UnknownRoute(base.to_string()))
    }
}

/// Something that can move the app to a new route
#[cfg_attr(test, mockall::automock)]
pub trait Navigator {
    fn navigate(&mut self, route: Route);
}

/// Back stack of route paths; the last element is the current route
#[derive(Debug, Clone)]
pub struct NavHost {
    back_stack: Vec<String>,
}

impl Default for NavHost {
    fn default() -> Self {
        Self {
            back_stack: vec![Route::Home.path()],
        }
    }
}

impl NavHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the current path. An unparseable path falls back to home.
    pub fn current_route(&self) -> Route {
        let Some(path) = self.back_stack.last() else {
            return Route::Home;
        };
        Route::parse(path).unwrap_or_else(|err| {
            tracing::warn!("{err}, falling back to {HOME_ROUTE}");
            Route::Home
        })
    }

    pub fn can_go_back(&self) -> bool {
        self.back_stack.len() > 1
    }

    /// Pop the current route. Returns false if already at the start destination.
    pub fn pop_back_stack(&mut self) -> bool {
        if !self.can_go_back() {
            return false;
        }
        self.back_stack.pop();
        true
    }
}

impl Navigator for NavHost {
    fn navigate(&mut self, route: Route) {
        let path = route.path();
        tracing::info!(
            depth = self.back_stack.len() + 1,
            "navigating to {}",
            path_base(&path)
        );
        self.back_stack.push(path);
    }
}

/// Path without its query string, for logging
fn path_base(path: &str) -> &str {
    path.split_once('?').map_or(path, |(base, _)| base)
}
