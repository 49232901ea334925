use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIntent {
    /// Return to the home view, clearing the selection.
    GoHome,
    /// Open the details view for a movie.
    OpenDetails { movie_id: u64 },
}

impl Intent for NavIntent {}
