use barbearia_dashboard::api::{BarbeariaApi, HttpApiClient};
use barbearia_dashboard::components::profile::{is_valid_logo_url, plan_summary};
use barbearia_dashboard::components::{BusinessHoursEditor, DashboardHandle};
use barbearia_dashboard::config::Config;
use barbearia_dashboard::error::Error;
use barbearia_dashboard::utils::i18n::resolve_locale;
use barbearia_dashboard::utils::theme::Theme;
use barbearia_dashboard::utils::time::system_clock;
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Initialize logging with environment-based configuration
pub fn init_logging() -> miette::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,reqwest=warn,hyper=warn")),
        )
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| Error::Other(format!("Failed to set up logging: {}", e)))?;

    Ok(())
}

/// Load the application config, resolving the locale to an available one
pub fn load_config() -> miette::Result<Config> {
    match Config::load() {
        Ok(mut config) => {
            config.locale = resolve_locale(&config.locale);
            info!(
                "Dashboard for shop {} at {} ({}, {})",
                config.barbearia_id, config.api_base_url, config.timezone, config.locale
            );
            Ok(config)
        }
        Err(e) => {
            error!("Failed to load configuration: {:?}", e);
            Err(e.into())
        }
    }
}

/// Load the dashboard once, log its summary and export the filtered appointments
pub async fn run_dashboard(config: Config) -> miette::Result<()> {
    let settings = config.display_settings()?;
    let api: Arc<dyn BarbeariaApi> = Arc::new(HttpApiClient::from_config(&config)?);
    let clock = system_clock();

    let theme = Theme::resolve(config.preferences.theme, false);
    info!("Using {:?} theme", theme);

    let dashboard = DashboardHandle::new(
        Arc::clone(&api),
        config.barbearia_id,
        settings.clone(),
        Arc::clone(&clock),
    );

    if let Err(e) = dashboard.refresh().await {
        let _ = dashboard.shutdown().await;
        return Err(e.into());
    }

    let state = dashboard.snapshot().await?;
    if let Some(shop) = &state.barbershop {
        let (plan, remaining) = plan_summary(shop, clock(), &settings.locale);
        info!(
            "{}: plan {} {}",
            shop.name,
            plan,
            remaining.unwrap_or_default()
        );
        if !is_valid_logo_url(shop.logo_url.as_deref()) {
            warn!("Shop {} has no usable logo URL", shop.id);
        }
    }

    let stats = dashboard.stats().await?;
    info!(
        "Today: {} appointments, {} active barbers, {} services, revenue {}",
        stats.appointments_today,
        stats.active_barbers,
        stats.total_services,
        settings.format_currency(stats.revenue_today)
    );

    for barber in state.barbers.iter().filter(|b| b.active) {
        let count = dashboard.barber_today_count(barber.id).await?;
        info!("{} ({}): {} today", barber.name, barber.specialty, count);
    }

    let hours =
        BusinessHoursEditor::initialize(config.barbearia_id, &settings.locale, None, api.as_ref())
            .await;
    if let Some(message) = hours.error() {
        warn!("{}", message);
    }
    for entry in hours.entries() {
        let label = entry.day_of_week.label(&settings.locale);
        if entry.is_open {
            info!("{}: {} - {}", label, entry.start_time, entry.end_time);
        } else {
            info!("{}: {}", label, entry.state_label(&settings.locale));
        }
    }

    let export = dashboard.export_csv().await?;
    let path = export.write_to(&config.export_dir).await?;
    info!("Wrote {}", path.display());

    dashboard.shutdown().await?;
    Ok(())
}
