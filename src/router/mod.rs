// ============================================================================
// ROUTER - Resolución de paths a rutas
// ============================================================================
// Exacto -> Matched. Normalizable (slash final, mayúsculas) -> Normalized,
// se reemplaza la URL por la canónica. Desconocido -> Redirect a Home.
// ============================================================================

use crate::models::Route;

/// Ruta usada para paths desconocidos
pub const FALLBACK_ROUTE: Route = Route::Home;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Path canónico exacto
    Matched(Route),
    /// Coincide después de normalizar
    Normalized(Route),
    /// Path desconocido, se redirige
    Redirect { from: String, to: Route },
}

impl Resolution {
    /// Ruta a renderizar
    pub fn route(&self) -> Route {
        match self {
            Resolution::Matched(route) | Resolution::Normalized(route) => *route,
            Resolution::Redirect { to, .. } => *to,
        }
    }

    /// Si la barra de direcciones debe reemplazarse por el path canónico
    pub fn needs_replace(&self) -> bool {
        !matches!(self, Resolution::Matched(_))
    }
}

/// Resolver un pathname (sin query ni hash) a una ruta
pub fn resolve(path: &str) -> Resolution {
    if let Some(route) = Route::from_path(path) {
        return Resolution::Matched(route);
    }

    let normalized = normalize(path);
    match Route::from_path(&normalized) {
        Some(route) => Resolution::Normalized(route),
        None => Resolution::Redirect {
            from: path.to_string(),
            to: FALLBACK_ROUTE,
        },
    }
}

/// Quitar query/hash y slashes finales, pasar a minúsculas
fn normalize(path: &str) -> String {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let trimmed = path.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return "/".to_string();
    }
    let lowered = trimmed.to_ascii_lowercase();
    if lowered.starts_with('/') {
        lowered
    } else {
        format!("/{}", lowered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_paths_match() {
        for route in Route::ALL {
            assert_eq!(resolve(route.path()), Resolution::Matched(route));
        }
    }

    #[test]
    fn test_trailing_slash_and_case_are_normalized() {
        assert_eq!(resolve("/about/"), Resolution::Normalized(Route::About));
        assert_eq!(resolve("/Reports"), Resolution::Normalized(Route::Reports));
        assert_eq!(resolve("//"), Resolution::Normalized(Route::Home));
        assert_eq!(resolve(""), Resolution::Normalized(Route::Home));
        assert_eq!(resolve("help"), Resolution::Normalized(Route::Help));
        assert_eq!(resolve("/register?ref=x"), Resolution::Normalized(Route::Register));
    }

    #[test]
    fn test_unknown_paths_redirect_home() {
        let resolution = resolve("/dashboard");
        assert_eq!(
            resolution,
            Resolution::Redirect { from: "/dashboard".to_string(), to: Route::Home }
        );
        assert_eq!(resolution.route(), Route::Home);
        assert!(resolution.needs_replace());
        assert_eq!(resolve("/about/team").route(), Route::Home);
    }

    #[test]
    fn test_matched_needs_no_replace() {
        assert!(!resolve("/services").needs_replace());
        assert!(resolve("/services/").needs_replace());
    }
}
