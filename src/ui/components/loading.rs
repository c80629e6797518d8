use dioxus::prelude::*;

#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div {
            class: "loading",
            role: "status",
            div { class: "spinner" }
            span { class: "sr-only", "Carregando..." }
        }
    }
}
