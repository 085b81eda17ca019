use menu_client::diagnostics::ConnectivityProbe;
use menu_client::utils::logger::init_logger;
use menu_client::{HttpMenuSource, MenuController, Settings};
use menu_core::views::{category_counts, filter_tabs, flatten_items, format_price};
use menu_core::PresentationState;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load()?;
    init_logger(&settings.logging)?;

    info!("Starting menu client against {}", settings.api.base_url);

    let probe = ConnectivityProbe::new(&settings.api)?;
    let report = probe.check().await;
    if !report.reachable {
        warn!("Backend probe failed, the menu will probably fall back to sample data");
    }

    let source = HttpMenuSource::new(&settings.api)?;
    let controller = MenuController::new(source, settings.api.timeout());
    controller.refetch().await;

    let state = controller.snapshot();
    if let Some(message) = &state.error {
        warn!("{}", message);
    }

    let Some(menu) = state.data else {
        return Ok(());
    };

    let presentation = PresentationState::new(&menu);
    info!(
        "🍽️  {} - {} ({:?}, active category: {:?})",
        menu.restaurant_name,
        menu.description,
        state.status,
        presentation.active_category().map(|id| id.as_str())
    );

    for (category, (_, count)) in menu.categories.iter().zip(category_counts(&menu)) {
        info!("  [{}] {} ({})", category.id, category.name, count);
    }

    for tab in filter_tabs(&menu) {
        info!("  filter {:<12} {}", tab.label, tab.count);
    }

    for item in flatten_items(&menu) {
        info!("  {:<40} {}", item.name, format_price(item.price));
    }

    Ok(())
}
