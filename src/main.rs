use eframe::egui;

use quick_search::gui::SearchApp;
use quick_search::history::{SearchHistory, HISTORY_FILE};
use quick_search::logging;
use quick_search::settings::{Settings, SETTINGS_FILE};
use quick_search::widget::SearchWidget;

fn main() -> anyhow::Result<()> {
    let settings = Settings::load(SETTINGS_FILE);
    logging::init(settings.debug_logging);

    let history = SearchHistory::load(HISTORY_FILE, settings.history_limit);
    let widget = SearchWidget::new(settings, SETTINGS_FILE, history);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([520.0, 240.0])
            .with_min_inner_size([360.0, 180.0])
            .with_always_on_top(),
        ..Default::default()
    };

    eframe::run_native(
        "Quick Search",
        native_options,
        Box::new(move |_cc| Box::new(SearchApp::new(widget))),
    )
    .map_err(|e| anyhow::anyhow!("failed to start the UI: {e}"))
}
