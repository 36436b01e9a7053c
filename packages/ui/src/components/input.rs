use dioxus::prelude::*;

#[component]
pub fn Input(
    #[props(default)] id: String,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default)] value: String,
    #[props(default)] placeholder: String,
    #[props(default)] class: String,
    oninput: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        input {
            id: "{id}",
            class: "form-input {class}",
            r#type: "{r#type}",
            value: "{value}",
            placeholder: "{placeholder}",
            oninput: move |evt| oninput.call(evt),
        }
    }
}

#[component]
pub fn Textarea(
    #[props(default)] id: String,
    #[props(default)] value: String,
    #[props(default)] placeholder: String,
    #[props(default = 4)] rows: u32,
    oninput: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        textarea {
            id: "{id}",
            class: "form-input form-textarea",
            rows: "{rows}",
            placeholder: "{placeholder}",
            value: "{value}",
            oninput: move |evt| oninput.call(evt),
        }
    }
}
