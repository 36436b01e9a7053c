use dioxus::prelude::*;
use store::ListEdit;

use crate::components::{Button, ButtonVariant, Input};
use crate::icons::{FaPlus, FaTrash};
use crate::Icon;

/// Editable list of short strings (skills, hobbies, technologies, URLs).
///
/// Every change is reported as a [`ListEdit`] so the owner decides how it is
/// applied to its draft.
#[component]
pub fn StringListEditor(
    id: String,
    items: Vec<String>,
    #[props(default)] placeholder: String,
    add_label: String,
    on_edit: EventHandler<ListEdit<String>>,
) -> Element {
    rsx! {
        div {
            class: "list-editor",
            for (index, item) in items.iter().enumerate() {
                div {
                    key: "{id}-{index}",
                    class: "list-editor-row",
                    Input {
                        id: "{id}-{index}",
                        value: item.clone(),
                        placeholder: placeholder.clone(),
                        oninput: move |e: FormEvent| on_edit.call(ListEdit::Set(index, e.value())),
                    }
                    Button {
                        variant: ButtonVariant::Ghost,
                        title: "Remove",
                        onclick: move |_| on_edit.call(ListEdit::Remove(index)),
                        Icon { icon: FaTrash, width: 14, height: 14 }
                    }
                }
            }
            Button {
                variant: ButtonVariant::Outline,
                onclick: move |_| on_edit.call(ListEdit::Push(String::new())),
                Icon { icon: FaPlus, width: 12, height: 12 }
                " {add_label}"
            }
        }
    }
}
