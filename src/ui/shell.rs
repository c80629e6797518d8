use dioxus::prelude::*;
use time::{macros::format_description, OffsetDateTime};

use crate::app::RefreshTrigger;
use crate::domain::ProviderState;
use crate::ui::components::settings_panel::SettingsPanel;
use crate::util::settings::Settings;
use crate::util::version::{version_label, APP_NAME};

#[component]
pub fn Shell(children: Element) -> Element {
    let provider = use_context::<Signal<ProviderState>>();
    let settings = use_context::<Signal<Settings>>();
    let refresh = use_context::<RefreshTrigger>();
    let mut show_settings = use_signal(|| false);

    let (loading, last_updated) = provider.with(|st| (st.loading, st.last_updated));
    let source = source_label(&settings());
    let updated = last_updated
        .map(updated_label)
        .unwrap_or_else(|| "Nunca atualizado".to_string());

    rsx! {
        div { class: "app",
            header { class: "app-header",
                div {
                    h1 { class: "app-title", "{APP_NAME}" }
                    p { class: "product-category", "Fonte: {source} · {updated}" }
                }
                nav { class: "app-nav",
                    NavButton {
                        active: show_settings(),
                        onclick: move |_| show_settings.toggle(),
                        label: "Configurações",
                    }
                    button {
                        class: "btn-primary",
                        disabled: loading,
                        onclick: move |_| refresh.request(),
                        if loading { "Atualizando..." } else { "Atualizar" }
                    }
                }
            }
            main { class: "app-main",
                if show_settings() {
                    SettingsPanel { on_saved: move |_| show_settings.set(false) }
                }
                {children}
            }
            footer { class: "app-footer", "{APP_NAME} {version_label()}" }
        }
    }
}

fn source_label(settings: &Settings) -> String {
    if let Some(url) = settings.api_base_url.as_deref() {
        url.to_string()
    } else if let Some(path) = settings.snapshot_path.as_ref() {
        path.display().to_string()
    } else {
        "dados de demonstração".to_string()
    }
}

fn updated_label(at: OffsetDateTime) -> String {
    let format = format_description!("[day]/[month]/[year] [hour]:[minute]:[second]");
    at.format(&format)
        .map(|stamp| format!("Atualizado em {stamp}"))
        .unwrap_or_else(|_| "Atualizado".to_string())
}

#[component]
fn NavButton(active: bool, onclick: EventHandler<()>, label: &'static str) -> Element {
    let class = if active { "nav-btn nav-btn-active" } else { "nav-btn" };
    rsx! {
        button {
            class: "{class}",
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}
