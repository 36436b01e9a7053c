//! Form controls, feedback states and toasts shared by the views.
//!
//! Labels, switches and toasts are styled wrappers over `dioxus-primitives`;
//! their look lives in [`crate::DX_COMPONENTS_CSS`].

mod button;
pub use button::{Button, ButtonVariant};

mod input;
pub use input::{Input, Textarea};

mod label;
pub use label::Label;

mod switch;
pub use switch::Toggle;

mod toast;
pub use toast::{use_toast, ToastOptions, ToastProvider};

mod feedback;
pub use feedback::{EmptyState, ErrorState, LoadingSpinner};
