//! Client-internal navigation surface.

/// Where the client is, or is about to go. The edit id is opaque and
/// passes through unvalidated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Collection,
    New,
    Edit(String),
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Collection => "/".to_string(),
            Route::New => "/new".to_string(),
            Route::Edit(id) => format!("/editar/{}", id),
        }
    }

    pub fn parse(path: &str) -> Option<Self> {
        match path {
            "/" => Some(Route::Collection),
            "/new" => Some(Route::New),
            _ => path
                .strip_prefix("/editar/")
                .filter(|id| !id.is_empty())
                .map(|id| Route::Edit(id.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_round_trip() {
        for route in [
            Route::Collection,
            Route::New,
            Route::Edit("abc-123".to_string()),
        ] {
            assert_eq!(Route::parse(&route.path()), Some(route));
        }
    }

    #[test]
    fn test_unknown_paths_rejected() {
        assert_eq!(Route::parse("/editar/"), None);
        assert_eq!(Route::parse("/settings"), None);
        assert_eq!(Route::parse(""), None);
    }
}
