// ============================================================================
// ROUTE - Páginas del sitio (conjunto cerrado de rutas)
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    About,
    Services,
    StudentLogin,
    FacultyLogin,
    Reports,
    Help,
    Register,
}

impl Route {
    /// Todas las rutas, en el orden del menú
    pub const ALL: [Route; 8] = [
        Route::Home,
        Route::About,
        Route::Services,
        Route::StudentLogin,
        Route::FacultyLogin,
        Route::Reports,
        Route::Help,
        Route::Register,
    ];

    /// Path canónico
    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::About => "/about",
            Route::Services => "/services",
            Route::StudentLogin => "/student-login",
            Route::FacultyLogin => "/faculty-login",
            Route::Reports => "/reports",
            Route::Help => "/help",
            Route::Register => "/register",
        }
    }

    /// Búsqueda exacta por path canónico
    pub fn from_path(path: &str) -> Option<Route> {
        Route::ALL.into_iter().find(|route| route.path() == path)
    }

    /// Título del documento
    pub fn title(self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::About => "About the Platform",
            Route::Services => "Services",
            Route::StudentLogin => "Student Login",
            Route::FacultyLogin => "Faculty Login",
            Route::Reports => "Reports",
            Route::Help => "Help & Support",
            Route::Register => "Register",
        }
    }

    /// Identificador de la vista (atributo data-view)
    pub fn view_key(self) -> &'static str {
        match self {
            Route::Home => "home",
            Route::About => "about",
            Route::Services => "services",
            Route::StudentLogin => "student-login",
            Route::FacultyLogin => "faculty-login",
            Route::Reports => "reports",
            Route::Help => "help",
            Route::Register => "register",
        }
    }
}

impl Default for Route {
    fn default() -> Self {
        Route::Home
    }
}
