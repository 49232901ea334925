use crate::catalog::Category;
use crate::ui::mvi::UiState;

/// Grid width bounds; values outside render either unreadably narrow or
/// unusably wide cells.
pub const MIN_GRID_COLUMNS: u16 = 4;
pub const MAX_GRID_COLUMNS: u16 = 8;

#[derive(Debug, Clone, PartialEq)]
pub struct ControlsState {
    pub category: Category,
    pub grid_columns: u16,
    pub search: String,
}

impl Default for ControlsState {
    fn default() -> Self {
        Self {
            category: Category::Trending,
            grid_columns: 6,
            search: String::new(),
        }
    }
}

impl UiState for ControlsState {}

impl ControlsState {
    /// Search text the way the renderer decides between search and
    /// listing mode: trimmed, empty meaning "no search active".
    pub fn search_query(&self) -> &str {
        self.search.trim()
    }
}
