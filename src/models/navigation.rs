// ============================================================================
// NAVIGATION - Entradas de navegación del header, menú móvil y footer
// ============================================================================

use crate::models::route::Route;

/// Enlace de navegación (inmutable)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationEntry {
    pub label: &'static str,
    pub route: Route,
}

impl NavigationEntry {
    const fn of(route: Route, label: &'static str) -> Self {
        Self { label, route }
    }

    pub fn path(&self) -> &'static str {
        self.route.path()
    }
}

/// Navegación principal (desktop y menú móvil)
pub const PRIMARY_NAV: [NavigationEntry; 8] = [
    NavigationEntry::of(Route::Home, "Home"),
    NavigationEntry::of(Route::About, "About"),
    NavigationEntry::of(Route::Services, "Services"),
    NavigationEntry::of(Route::StudentLogin, "Student Login"),
    NavigationEntry::of(Route::FacultyLogin, "Faculty Login"),
    NavigationEntry::of(Route::Reports, "Reports"),
    NavigationEntry::of(Route::Help, "Help"),
    NavigationEntry::of(Route::Register, "Register"),
];

/// Grupo "Links" del footer
pub const FOOTER_LINKS: [NavigationEntry; 4] = [
    NavigationEntry::of(Route::Home, "Home"),
    NavigationEntry::of(Route::About, "About"),
    NavigationEntry::of(Route::Services, "Services"),
    NavigationEntry::of(Route::Reports, "Reports"),
];

/// Grupo "Support" del footer
pub const FOOTER_SUPPORT: [NavigationEntry; 2] = [
    NavigationEntry::of(Route::Help, "Help"),
    NavigationEntry::of(Route::Register, "Register"),
];
