pub mod route;
pub mod navigation;
pub mod content;
pub mod report;
pub mod login;

pub use route::Route;
pub use navigation::{NavigationEntry, PRIMARY_NAV, FOOTER_LINKS, FOOTER_SUPPORT};
pub use content::{ServiceDescriptor, HelpContent, HelpTopic, SERVICES, ABOUT_BENEFITS, HELP_TOPICS};
pub use report::{ChartSeriesPoint, PieSlice, Metric, ChartKind, ChartSlot, PARTICIPATION_DATA, PIE_DATA, REPORT_CHARTS};
pub use login::LoginKind;
