use dioxus::prelude::*;
use dioxus_primitives::switch::{Switch, SwitchThumb};

use super::Label;

/// Labelled on/off switch.
#[component]
pub fn Toggle(id: String, label: String, checked: bool, onchange: EventHandler<bool>) -> Element {
    rsx! {
        div {
            class: "toggle",
            Switch {
                id: "{id}",
                class: "switch",
                checked: Some(checked),
                on_checked_change: move |value: bool| onchange.call(value),
                SwitchThumb { class: "switch-thumb" }
            }
            Label { html_for: id.clone(), "{label}" }
        }
    }
}
