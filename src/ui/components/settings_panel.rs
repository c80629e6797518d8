use std::path::PathBuf;

use dioxus::prelude::*;
use tracing::{info, warn};

use crate::{
    app::RefreshTrigger,
    ui::{
        components::toast::{push_toast, ToastKind, ToastMessage},
        palette,
    },
    util::settings::{save_settings, Settings},
};

#[component]
pub fn SettingsPanel(on_saved: EventHandler<()>) -> Element {
    let mut settings = use_context::<Signal<Settings>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let refresh = use_context::<RefreshTrigger>();

    let initial = settings();
    let mut api_input = use_signal(|| initial.api_base_url.clone().unwrap_or_default());
    let mut snapshot_input = use_signal(|| {
        initial
            .snapshot_path
            .as_ref()
            .map(|path| path.display().to_string())
            .unwrap_or_default()
    });
    let mut refresh_input = use_signal(|| {
        initial
            .refresh_secs
            .map(|secs| secs.to_string())
            .unwrap_or_default()
    });

    let on_save = move |evt: FormEvent| {
        evt.prevent_default();
        let parsed = parse_form(&api_input(), &snapshot_input(), &refresh_input());
        match parsed {
            Ok(next) => {
                if let Err(err) = save_settings(&next) {
                    warn!(%err, "failed to persist settings");
                    push_toast(
                        toasts,
                        ToastKind::Error,
                        format!("Não foi possível salvar as configurações: {err}"),
                    );
                } else {
                    info!("settings saved");
                    push_toast(toasts, ToastKind::Success, "Configurações salvas.");
                }
                settings.set(next);
                refresh.request();
                on_saved.call(());
            }
            Err(message) => push_toast(toasts, ToastKind::Error, message),
        }
    };

    rsx! {
        section {
            class: "{palette::PANEL} settings",
            h2 { class: "{palette::PANEL_TITLE}", "Fonte de dados" }
            form {
                class: "settings-form",
                onsubmit: on_save,
                label {
                    span { "URL da API do ERP" }
                    input {
                        r#type: "url",
                        placeholder: "http://localhost:3000/api/",
                        value: "{api_input}",
                        oninput: move |evt| api_input.set(evt.value()),
                    }
                }
                label {
                    span { "Arquivo de snapshot (JSON)" }
                    input {
                        r#type: "text",
                        placeholder: "/caminho/para/snapshot.json",
                        value: "{snapshot_input}",
                        oninput: move |evt| snapshot_input.set(evt.value()),
                    }
                }
                label {
                    span { "Atualização automática (segundos)" }
                    input {
                        r#type: "text",
                        placeholder: "vazio = somente manual",
                        value: "{refresh_input}",
                        oninput: move |evt| refresh_input.set(evt.value()),
                    }
                }
                p {
                    class: "product-category",
                    "Sem URL nem arquivo, o painel usa os dados de demonstração."
                }
                button { class: "btn-primary", r#type: "submit", "Salvar" }
            }
        }
    }
}

fn parse_form(api: &str, snapshot: &str, refresh: &str) -> Result<Settings, String> {
    let refresh = refresh.trim();
    let refresh_secs = if refresh.is_empty() {
        None
    } else {
        Some(
            refresh
                .parse::<u64>()
                .map_err(|_| format!("Intervalo inválido: {refresh}"))?,
        )
    };

    let snapshot = snapshot.trim();
    let mut settings = Settings {
        api_base_url: Some(api.to_string()),
        snapshot_path: (!snapshot.is_empty()).then(|| PathBuf::from(snapshot)),
        refresh_secs,
    };
    settings.normalize();
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::settings::MIN_REFRESH_SECS;

    #[test]
    fn blank_form_selects_demo_data() {
        let settings = parse_form("  ", "", "").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn form_values_are_trimmed_and_clamped() {
        let settings = parse_form(" http://erp.local/api ", " /tmp/s.json ", "2").unwrap();
        assert_eq!(settings.api_base_url.as_deref(), Some("http://erp.local/api"));
        assert_eq!(settings.snapshot_path, Some(PathBuf::from("/tmp/s.json")));
        assert_eq!(settings.refresh_secs, Some(MIN_REFRESH_SECS));
    }

    #[test]
    fn non_numeric_refresh_is_rejected() {
        let err = parse_form("", "", "soon").unwrap_err();
        assert!(err.contains("soon"));
    }
}
