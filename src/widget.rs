use crate::calc::{self, CalcResult};
use crate::engines::{self, EngineDescriptor, ENGINES};
use crate::history::{HistoryEntry, SearchHistory};
use crate::routing;
use crate::settings::Settings;
use crate::url::{self, SearchAction};

pub const EMPTY_QUERY_ERROR: &str = "Please enter a search query.";

/// What a submission asks the caller to do next.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    /// Open this URL in the browser.
    Navigate(String),
    /// Calculate mode: the result was recorded, nothing to open.
    Calculated(CalcResult),
    /// The query was rejected; the error message is set on the widget.
    Rejected,
}

/// All search-bar state for one session: engine selection, query text,
/// action mode, advisory calc result, error message and the suggestion
/// panel flag, plus the persistent history behind it. Selection changes
/// and history appends are written through to disk as they happen.
pub struct SearchWidget {
    settings: Settings,
    settings_path: String,
    history: SearchHistory,
    query: String,
    action: SearchAction,
    calc_result: Option<CalcResult>,
    error: Option<String>,
    panel_open: bool,
}

impl SearchWidget {
    pub fn new(mut settings: Settings, settings_path: impl Into<String>, history: SearchHistory) -> Self {
        settings.selected_engine = engines::clamp_index(settings.selected_engine);
        Self {
            settings,
            settings_path: settings_path.into(),
            history,
            query: String::new(),
            action: SearchAction::Search,
            calc_result: None,
            error: None,
            panel_open: false,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn placeholder(&self) -> &str {
        &self.settings.placeholder
    }

    pub fn selected_index(&self) -> usize {
        self.settings.selected_engine
    }

    pub fn selected_engine(&self) -> &'static EngineDescriptor {
        &ENGINES[self.settings.selected_engine]
    }

    /// Accent color of the selected engine, for the caller's page styling.
    pub fn accent(&self) -> &'static str {
        self.selected_engine().accent
    }

    pub fn action(&self) -> SearchAction {
        self.action
    }

    /// Select `action`, or fall back to a plain search when it is already
    /// active (the toggle buttons work both ways).
    pub fn toggle_action(&mut self, action: SearchAction) {
        self.action = if self.action == action {
            SearchAction::Search
        } else {
            action
        };
    }

    pub fn calc_result(&self) -> Option<&CalcResult> {
        self.calc_result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn panel_open(&self) -> bool {
        self.panel_open
    }

    pub fn open_panel(&mut self) {
        self.panel_open = true;
    }

    pub fn close_panel(&mut self) {
        self.panel_open = false;
    }

    /// Replace the query text and re-run the per-keystroke classifiers:
    /// letter-prefix routing first, then the advisory calculator. Both are
    /// pure, so calling this with unchanged text changes nothing.
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
        if let Some((engine, rest)) = routing::route_on_input(&self.query, self.settings.selected_engine) {
            self.select_index(engine);
            self.query = rest;
        }
        self.calc_result = calc::evaluate(&self.query);
    }

    pub fn cycle_engine(&mut self, delta: isize) {
        self.select_index(engines::cycle(self.settings.selected_engine, delta));
    }

    pub fn select_engine(&mut self, id: &str) {
        if let Some(index) = engines::position_of(id) {
            self.select_index(index);
        }
    }

    fn select_index(&mut self, index: usize) {
        if index == self.settings.selected_engine {
            return;
        }
        self.settings.selected_engine = index;
        if let Err(e) = self.settings.save(&self.settings_path) {
            tracing::error!("failed to save settings to {}: {e}", self.settings_path);
        }
    }

    /// Entries to show in the suggestion panel for the current input.
    pub fn visible_history(&self) -> Vec<&HistoryEntry> {
        self.history.filtered(&self.query)
    }

    pub fn history(&self) -> &SearchHistory {
        &self.history
    }

    /// Take over a suggestion: switch to its engine, put its query back in
    /// the box and close the panel.
    pub fn recall(&mut self, query: String, engine_id: &str) {
        self.select_engine(engine_id);
        self.set_query(query);
        self.panel_open = false;
    }

    /// Run the submission pipeline over the current state.
    ///
    /// An empty query only sets the error message. In calculate mode a
    /// valid expression is recorded in the history and nothing is opened;
    /// an invalid one falls through to a plain search. Searches re-apply
    /// prefix routing, record the routed query and hand the resolved URL
    /// back to the caller. Any accepted submission clears the query, closes
    /// the panel and resets the action mode.
    pub fn submit(&mut self) -> Submission {
        let trimmed = self.query.trim().to_string();
        if trimmed.is_empty() {
            self.error = Some(EMPTY_QUERY_ERROR.to_string());
            return Submission::Rejected;
        }
        self.error = None;

        if self.action == SearchAction::Calculate {
            if let Some(result) = calc::evaluate(&trimmed) {
                self.history
                    .append(HistoryEntry::new(trimmed, self.selected_engine().id));
                self.reset_after_submit();
                return Submission::Calculated(result);
            }
        }

        let (engine_index, query) = routing::route_on_submit(&trimmed, self.settings.selected_engine);
        self.select_index(engine_index);
        self.history
            .append(HistoryEntry::new(query.clone(), ENGINES[engine_index].id));
        let url = url::resolve(&ENGINES[engine_index], self.action, &query);
        self.reset_after_submit();
        Submission::Navigate(url)
    }

    /// The query is gone, so the advisory result goes with it.
    fn reset_after_submit(&mut self) {
        self.query.clear();
        self.calc_result = None;
        self.panel_open = false;
        self.action = SearchAction::Search;
    }
}
