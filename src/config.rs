// ============================================================================
// CONFIG - Configuración del sitio (tiempo de compilación)
// ============================================================================
// build.rs vuelca .env en rustc-env; aquí se leen con option_env!.
// Valores vacíos o inválidos -> valor por defecto.
// ============================================================================

use serde::Serialize;

const DEFAULT_LOGO_URL: &str = "https://static.vecteezy.com/system/resources/previews/007/688/840/non_2x/education-logo-free-vector.jpg";
const DEFAULT_HOME_BG_URL: &str = "https://images.unsplash.com/photo-1546410531-bb4caa6b424d?q=80&w=1171&auto=format&fit=crop&ixlib=rb-4.1.0&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D";
const DEFAULT_STUDENT_LOGIN_BG_URL: &str = "https://images.unsplash.com/photo-1498243691581-b145c3f54a5a?q=80&w=1170&auto=format&fit=crop&ixlib=rb-4.1.0&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D";
const DEFAULT_FACULTY_LOGIN_BG_URL: &str = "https://plus.unsplash.com/premium_photo-1713296255442-e9338f42aad8?q=80&w=722&auto=format&fit=crop&ixlib=rb-4.1.0&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D";

#[derive(Debug, Clone, Serialize)]
pub struct SiteConfig {
    pub brand: String,
    pub tagline: String,
    pub contact_line: String,
    pub support_contact: String,
    pub images: ImageConfig,
    pub enable_logging: bool,
    pub log_level: String,
}

/// URLs de imágenes externas (sin fallback si fallan al cargar)
#[derive(Debug, Clone, Serialize)]
pub struct ImageConfig {
    pub logo_url: String,
    pub home_background_url: String,
    pub student_login_background_url: String,
    pub faculty_login_background_url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            brand: "Empowering Students".to_string(),
            tagline: "Enabling Institutions".to_string(),
            contact_line: "Contact: info@example.com | +91-XXXXXXXXXX".to_string(),
            support_contact: "support@example.com or call +91-XXXX-XXXXX".to_string(),
            images: ImageConfig::default(),
            enable_logging: true,
            log_level: "info".to_string(),
        }
    }
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            logo_url: DEFAULT_LOGO_URL.to_string(),
            home_background_url: DEFAULT_HOME_BG_URL.to_string(),
            student_login_background_url: DEFAULT_STUDENT_LOGIN_BG_URL.to_string(),
            faculty_login_background_url: DEFAULT_FACULTY_LOGIN_BG_URL.to_string(),
        }
    }
}

impl SiteConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            brand: text_or(option_env!("SITE_BRAND"), &defaults.brand),
            tagline: text_or(option_env!("SITE_TAGLINE"), &defaults.tagline),
            contact_line: text_or(option_env!("SITE_CONTACT_LINE"), &defaults.contact_line),
            support_contact: text_or(option_env!("SITE_SUPPORT_CONTACT"), &defaults.support_contact),
            images: ImageConfig {
                logo_url: text_or(option_env!("SITE_LOGO_URL"), &defaults.images.logo_url),
                home_background_url: text_or(
                    option_env!("SITE_HOME_BG_URL"),
                    &defaults.images.home_background_url,
                ),
                student_login_background_url: text_or(
                    option_env!("SITE_STUDENT_LOGIN_BG_URL"),
                    &defaults.images.student_login_background_url,
                ),
                faculty_login_background_url: text_or(
                    option_env!("SITE_FACULTY_LOGIN_BG_URL"),
                    &defaults.images.faculty_login_background_url,
                ),
            },
            enable_logging: flag_or(option_env!("ENABLE_LOGGING"), defaults.enable_logging),
            log_level: level_or(option_env!("LOG_LEVEL"), &defaults.log_level),
        }
    }

    /// Nivel efectivo para wasm_logger (solo errores si el logging está desactivado)
    pub fn effective_log_level(&self) -> log::Level {
        if !self.enable_logging {
            return log::Level::Error;
        }
        self.log_level.parse().unwrap_or(log::Level::Info)
    }

    /// Título del documento para una página
    pub fn document_title(&self, page_title: &str) -> String {
        format!("{} · {}", page_title, self.brand)
    }

    /// Resumen JSON para el log de arranque
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| format!("{{\"error\":\"{}\"}}", e))
    }
}

fn text_or(value: Option<&str>, default: &str) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => default.to_string(),
    }
}

fn flag_or(value: Option<&str>, default: bool) -> bool {
    value
        .and_then(|v| v.trim().to_ascii_lowercase().parse().ok())
        .unwrap_or(default)
}

fn level_or(value: Option<&str>, default: &str) -> String {
    match value.map(|v| v.trim().to_ascii_lowercase()) {
        Some(v) if v.parse::<log::Level>().is_ok() => v,
        _ => default.to_string(),
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: SiteConfig = SiteConfig::from_env();
}
