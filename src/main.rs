//! Wiring & DI. Entry point: bootstrap adapters, inject into the
//! submission pipeline, run the TUI. No business logic here.

use dotenv::dotenv;
use mail_triage::adapters::api::{HttpClassifierAdapter, MockClassifierAdapter};
use mail_triage::adapters::system::SystemClipboard;
use mail_triage::adapters::ui::{TerminalNotifier, TuiInputPort};
use mail_triage::ports::{ClassifierPort, ClipboardPort, InputPort, NotifierPort};
use mail_triage::shared::config::AppConfig;
use mail_triage::usecases::SubmissionService;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Ok(path) = &env_loaded {
        info!(path = %path.display(), "loaded .env");
    }

    mail_triage::adapters::ui::init_ui();

    let cfg = AppConfig::load().unwrap_or_default();
    let timeout = Duration::from_secs(cfg.request_timeout_secs_or_default());

    let classifier: Arc<dyn ClassifierPort> = match cfg.api_base_url() {
        Some(base_url) => {
            info!(url = %base_url, timeout_secs = timeout.as_secs(), "classification API configured");
            Arc::new(
                HttpClassifierAdapter::new(base_url, timeout)
                    .map_err(|e| anyhow::anyhow!("{}", e))?,
            )
        }
        None => {
            warn!("MAIL_TRIAGE_API_BASE_URL not set, using mock classifier");
            Arc::new(MockClassifierAdapter::new())
        }
    };

    let notifier: Arc<dyn NotifierPort> = Arc::new(TerminalNotifier::new());
    let clipboard: Arc<dyn ClipboardPort> = Arc::new(SystemClipboard::new());

    let service = Arc::new(SubmissionService::new(classifier, notifier, clipboard));
    // Best-effort warmup; never blocks the first user submission.
    service.spawn_health_probe();

    let input_port: Arc<dyn InputPort> = Arc::new(TuiInputPort::new(Arc::clone(&service)));
    input_port.run().await.map_err(|e| anyhow::anyhow!("{}", e))?;

    Ok(())
}
