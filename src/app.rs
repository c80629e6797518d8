use std::time::Duration;

use dioxus::{prelude::*, signals::Signal};
use time::OffsetDateTime;
use tracing::{debug, error, info};

use crate::{
    domain::ProviderState,
    infra::erp::DataSource,
    ui::{
        components::toast::{push_toast, Toast, ToastKind, ToastMessage},
        pages::DashboardPage,
        shell::Shell,
    },
    util::{assets, settings::Settings},
};

/// How often the auto-refresh loop re-reads the configured period while
/// auto-refresh is disabled.
const IDLE_POLL: Duration = Duration::from_secs(5);

/// Bumping the generation restarts the provider fetch.
#[derive(Clone, Copy, PartialEq)]
pub struct RefreshTrigger(Signal<u64>);

impl RefreshTrigger {
    pub fn request(&self) {
        let mut generation = self.0;
        generation.with_mut(|value| *value += 1);
    }

    fn generation(&self) -> u64 {
        (self.0)()
    }
}

#[component]
pub fn App() -> Element {
    let settings = use_signal(Settings::load);
    use_context_provider(|| settings);

    let provider = use_signal(ProviderState::default);
    use_context_provider(|| provider);

    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts);

    let refresh = RefreshTrigger(use_signal(|| 0_u64));
    use_context_provider(|| refresh);

    let _snapshot = use_resource(move || async move {
        load_dashboard(settings, provider, toasts, refresh).await
    });

    let _auto_refresh = use_future(move || async move {
        loop {
            let period = settings.peek().refresh_secs;
            match period {
                Some(secs) => {
                    tokio::time::sleep(Duration::from_secs(secs)).await;
                    debug!(secs, "auto-refresh tick");
                    refresh.request();
                }
                None => tokio::time::sleep(IDLE_POLL).await,
            }
        }
    });

    rsx! {
        document::Style { "{assets::main_css()}" }
        Shell { DashboardPage {} }
        Toast {}
    }
}

async fn load_dashboard(
    settings: Signal<Settings>,
    mut provider: Signal<ProviderState>,
    toasts: Signal<Vec<ToastMessage>>,
    refresh: RefreshTrigger,
) -> bool {
    // Both reads subscribe the resource, so either one changing refetches.
    let generation = refresh.generation();
    let settings = settings();

    provider.with_mut(|st| st.begin_refresh());

    let source = match DataSource::from_settings(&settings) {
        Ok(source) => source,
        Err(err) => {
            error!(%err, "invalid data source configuration");
            provider.with_mut(|st| st.apply_error(err.to_string()));
            push_toast(
                toasts,
                ToastKind::Error,
                format!("Configuração de dados inválida: {err}"),
            );
            return false;
        }
    };

    info!(generation, source = %source.describe(), "refreshing dashboard");
    match source.load().await {
        Ok(snapshot) => {
            let fetched_at =
                OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
            provider.with_mut(|st| st.apply_snapshot(snapshot, fetched_at));
            true
        }
        Err(err) => {
            error!(%err, source = %source.describe(), "failed to load dashboard data");
            provider.with_mut(|st| st.apply_error(err.to_string()));
            push_toast(
                toasts,
                ToastKind::Error,
                format!("Falha ao carregar dados: {err}"),
            );
            false
        }
    }
}
