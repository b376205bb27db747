// ============================================================================
// LOGIN KIND - Variante de la pantalla de login (estudiante / docente)
// ============================================================================

use crate::config::SiteConfig;
use crate::models::route::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginKind {
    Student,
    Faculty,
}

impl LoginKind {
    pub fn heading(self) -> &'static str {
        match self {
            LoginKind::Student => "Student Login",
            LoginKind::Faculty => "Faculty Login",
        }
    }

    pub fn id_label(self) -> &'static str {
        match self {
            LoginKind::Student => "Student ID",
            LoginKind::Faculty => "Faculty ID",
        }
    }

    pub fn id_placeholder(self) -> &'static str {
        match self {
            LoginKind::Student => "S123456",
            LoginKind::Faculty => "F12345",
        }
    }

    pub fn background_url(self, config: &SiteConfig) -> &str {
        match self {
            LoginKind::Student => &config.images.student_login_background_url,
            LoginKind::Faculty => &config.images.faculty_login_background_url,
        }
    }

    pub fn route(self) -> Route {
        match self {
            LoginKind::Student => Route::StudentLogin,
            LoginKind::Faculty => Route::FacultyLogin,
        }
    }
}
