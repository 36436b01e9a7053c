mod list_editor;

mod home;
pub use home::HomeView;

mod sign_in;
pub use sign_in::{AuthMode, SignInView};

mod not_found;
pub use not_found::NotFoundView;

mod portfolio;
pub use portfolio::PortfolioView;

mod dashboard_layout;
pub use dashboard_layout::DashboardLayoutView;

mod dashboard;
pub use dashboard::DashboardView;

mod profile;
pub use profile::ProfileEditorView;

mod projects;
pub use projects::ProjectsView;

mod project_details;
pub use project_details::ProjectDetailsView;

mod project_editor;
pub use project_editor::ProjectEditorView;

mod templates;
pub use templates::TemplateGalleryView;

mod settings;
pub use settings::SettingsView;
