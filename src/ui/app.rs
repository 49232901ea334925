use crate::api::ApiClient;
use crate::catalog::Card;
use crate::config::Config;
use crate::location::LocationCarrier;
use crate::ui::controls::{ControlsIntent, ControlsReducer, ControlsState};
use crate::ui::mvi::Reducer;
use crate::ui::nav::{NavIntent, NavReducer, NavState};
use crate::ui::pass::{run_pass, PassOutcome};

/// What keyboard input is routed to.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    Search,
    Grid,
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Owns all session state and the side-effecting resources around the
/// pure reducers: the API client and the location carrier.
pub struct App {
    should_quit: bool,
    focus: Focus,
    nav: NavState,
    controls: ControlsState,
    /// Grid cursor into the currently visible cards.
    selection: usize,
    outcome: PassOutcome,
    /// A navigation or data-affecting change happened; the next loop
    /// iteration must run a fresh render pass before drawing.
    pass_due: bool,
    api: ApiClient,
    carrier: LocationCarrier,
    listing_limit: u32,
}

impl App {
    pub fn new(api: ApiClient, carrier: LocationCarrier, config: &Config, nav: NavState) -> Self {
        let controls = ControlsState {
            category: config.home.category,
            grid_columns: config.home.grid_columns,
            search: String::new(),
        };
        let focus = match nav {
            NavState::Home => Focus::Search,
            NavState::Details { .. } => Focus::Grid,
        };
        Self {
            should_quit: false,
            focus,
            nav,
            controls,
            selection: 0,
            outcome: PassOutcome::Idle,
            pass_due: true,
            api,
            carrier,
            listing_limit: config.home.limit,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn nav(&self) -> &NavState {
        &self.nav
    }

    pub fn controls(&self) -> &ControlsState {
        &self.controls
    }

    pub fn outcome(&self) -> &PassOutcome {
        &self.outcome
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Search => Focus::Grid,
            Focus::Grid => Focus::Search,
        };
    }

    pub fn selection(&self) -> usize {
        self.selection
    }

    /// Navigation transitions always rewrite the shareable location and
    /// schedule a fresh pass, even when the target equals the current
    /// state. Going "home from home" still resets the location.
    pub fn dispatch_nav(&mut self, intent: NavIntent) {
        dispatch_mvi!(self, nav, NavReducer, intent);
        self.carrier.store(&self.nav.to_location());
        self.selection = 0;
        self.focus = match self.nav {
            NavState::Home => Focus::Search,
            NavState::Details { .. } => Focus::Grid,
        };
        self.pass_due = true;
        tracing::debug!(nav = ?self.nav, "navigated");
    }

    pub fn dispatch_controls(&mut self, intent: ControlsIntent) {
        // Category changes refetch the listing; column and search-box
        // edits are layout/input-only until the search is submitted.
        let refetch = matches!(
            intent,
            ControlsIntent::CategoryNext | ControlsIntent::CategoryPrev
        ) && self.nav == NavState::Home
            && self.controls.search_query().is_empty();

        dispatch_mvi!(self, controls, ControlsReducer, intent);

        if refetch {
            self.selection = 0;
            self.pass_due = true;
        }
    }

    /// Submit the search box: the next pass will query (or, with an empty
    /// box, fall back to the category listing).
    pub fn submit_search(&mut self) {
        self.selection = 0;
        self.focus = Focus::Grid;
        self.pass_due = true;
    }

    /// Runs the pending render pass, if any. Blocking: requests complete
    /// (or fail) before the next frame is drawn.
    pub fn run_due_pass(&mut self) {
        if !self.pass_due {
            return;
        }
        self.pass_due = false;
        self.outcome = run_pass(&mut self.api, &self.nav, &self.controls, self.listing_limit);
        self.clamp_selection();
    }

    /// Cards the grid is currently showing, independent of view.
    pub fn visible_cards(&self) -> &[Card] {
        match &self.outcome {
            PassOutcome::Home {
                cards: Ok(cards), ..
            } => cards,
            PassOutcome::Details {
                recommendations, ..
            } => recommendations,
            _ => &[],
        }
    }

    pub fn open_selected(&mut self) {
        if let Some(card) = self.visible_cards().get(self.selection) {
            let movie_id = card.tmdb_id;
            self.dispatch_nav(NavIntent::OpenDetails { movie_id });
        }
    }

    /// Moves the grid cursor one step left/right or one row up/down.
    pub fn move_selection(&mut self, dx: i64, dy: i64) {
        let count = self.visible_cards().len();
        if count == 0 {
            return;
        }
        let step = dx + dy * i64::from(self.controls.grid_columns);
        let current = self.selection as i64;
        self.selection = (current + step).clamp(0, count as i64 - 1) as usize;
    }

    fn clamp_selection(&mut self) {
        let count = self.visible_cards().len();
        self.selection = self.selection.min(count.saturating_sub(1));
    }
}
