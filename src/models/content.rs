// ============================================================================
// CONTENT - Tablas de contenido estático (servicios, beneficios, ayuda)
// ============================================================================

/// Servicio de la plataforma (se muestra en Home y en Services)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceDescriptor {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

pub const SERVICES: [ServiceDescriptor; 8] = [
    ServiceDescriptor {
        title: "Student Activity Tracker",
        description: "Track participation, achievements and certifications in one place.",
        icon: "🎯",
    },
    ServiceDescriptor {
        title: "Faculty Validation Portal",
        description: "Approve and validate student records quickly.",
        icon: "🧑‍🏫",
    },
    ServiceDescriptor {
        title: "Analytics Dashboard",
        description: "Visualize performance and participation trends.",
        icon: "📊",
    },
    ServiceDescriptor {
        title: "Document Upload & Verification",
        description: "Secure upload and tamper-evident verification.",
        icon: "📁",
    },
    ServiceDescriptor {
        title: "Event & Deadline Alerts",
        description: "Keep students and staff informed with reminders.",
        icon: "⏰",
    },
    ServiceDescriptor {
        title: "Reports & Analytics",
        description: "Downloadable institutional and departmental reports.",
        icon: "📈",
    },
    ServiceDescriptor {
        title: "Institutional Data Management",
        description: "Manage departments, courses and staff centrally.",
        icon: "🏛️",
    },
    ServiceDescriptor {
        title: "Feedback & Support System",
        description: "Collect feedback and manage tickets.",
        icon: "💬",
    },
];

pub const ABOUT_DESCRIPTION: &str = "This platform provides a centralized, secure and privacy-focused solution for Higher Education Institutions in Jammu & Kashmir to track student activities, validate achievements, and generate actionable analytics. Built with scalability and inclusivity in mind, it enables institutions to adopt data-driven decisions while respecting privacy and accessibility.";

pub const ABOUT_BENEFITS: [&str; 6] = [
    "Centralized tracking",
    "Secure validation",
    "Analytics",
    "Scalability",
    "Data privacy",
    "Inclusivity",
];

/// Tarjeta de la página de ayuda. `action` = texto de un botón inerte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HelpTopic {
    pub title: &'static str,
    pub content: HelpContent,
}

/// Cuerpo de una tarjeta de ayuda
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelpContent {
    Text(&'static str),
    /// Contacto de soporte técnico (sale de CONFIG)
    SupportContact,
    /// Botón sin comportamiento
    ChatButton(&'static str),
}

pub const HELP_TOPICS: [HelpTopic; 4] = [
    HelpTopic {
        title: "Getting Started",
        content: HelpContent::Text("Register your institution and set up departments, courses and staff."),
    },
    HelpTopic {
        title: "FAQs",
        content: HelpContent::Text("Common questions and how to resolve them."),
    },
    HelpTopic {
        title: "Technical Support",
        content: HelpContent::SupportContact,
    },
    HelpTopic {
        title: "Live Chat",
        content: HelpContent::ChatButton("Start Chat (dummy)"),
    },
];

pub const ACCESSIBILITY_NOTE: &str =
    "This site aims to be accessible: clear headings, large tap targets, and high contrast.";

pub const HOME_HEADLINE: &str = "Empowering Students, Enabling Institutions";
pub const HOME_DESCRIPTION: &str = "A unified digital platform to track, validate, and celebrate student achievements across Higher Education Institutions in Jammu & Kashmir.";
pub const FOOTER_CREDIT: &str =
    "Developed under Smart India Hackathon (SIH25093) by the Government of Jammu & Kashmir.";
pub const FLOATING_CHAT_TEXT: &str = "💬 Chat with Us — Support";
