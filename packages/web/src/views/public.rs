use dioxus::prelude::*;

use ui::views::AuthMode;

#[component]
pub fn Home() -> Element {
    rsx! { ui::views::HomeView {} }
}

#[component]
pub fn Portfolio(user_id: String) -> Element {
    rsx! { ui::views::PortfolioView { user_id } }
}

#[component]
pub fn SignIn() -> Element {
    rsx! { ui::views::SignInView { mode: AuthMode::SignIn } }
}

#[component]
pub fn SignUp() -> Element {
    rsx! { ui::views::SignInView { mode: AuthMode::SignUp } }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let _ = segments;
    rsx! { ui::views::NotFoundView {} }
}
