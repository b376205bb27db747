pub mod site_viewmodel;

pub use site_viewmodel::SiteViewModel;
