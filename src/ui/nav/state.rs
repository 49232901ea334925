use crate::location::Location;
use crate::ui::mvi::UiState;

/// Current view plus selection.
///
/// A selected movie exists exactly when the view is Details; the enum
/// shape makes the invariant unrepresentable to violate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavState {
    #[default]
    Home,
    Details {
        movie_id: u64,
    },
}

impl UiState for NavState {}

impl NavState {
    /// Resolves the startup state from a shareable location.
    ///
    /// A parseable `id` always wins and forces Details, even against a
    /// conflicting `view=home`: a deep link to a specific item beats the
    /// view field. A non-integer `id` is silently ignored. `view=details`
    /// without a usable id cannot carry a selection and resolves to Home.
    pub fn from_location(location: &Location) -> Self {
        if let Some(movie_id) = location.id.as_deref().and_then(|id| id.parse().ok()) {
            return NavState::Details { movie_id };
        }
        if let Some(id) = &location.id {
            tracing::debug!(id = %id, "ignoring non-integer id in location");
        }
        NavState::Home
    }

    pub fn to_location(&self) -> Location {
        match self {
            NavState::Home => Location::home(),
            NavState::Details { movie_id } => Location::details(*movie_id),
        }
    }

    pub fn selected_id(&self) -> Option<u64> {
        match self {
            NavState::Home => None,
            NavState::Details { movie_id } => Some(*movie_id),
        }
    }
}
