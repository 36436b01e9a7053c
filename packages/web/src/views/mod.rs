mod site_layout;
pub use site_layout::SiteLayout;

mod dashboard_shell;
pub use dashboard_shell::DashboardShell;

mod public;
pub use public::{Home, NotFound, Portfolio, SignIn, SignUp};

mod dashboard;
pub use dashboard::{Dashboard, Profile, Projects, Templates};

mod project;
pub use project::{EditProject, NewProject, ProjectDetails};

mod settings;
pub use settings::Settings;
