use crate::ui::controls::intent::ControlsIntent;
use crate::ui::controls::state::{ControlsState, MAX_GRID_COLUMNS, MIN_GRID_COLUMNS};
use crate::ui::mvi::Reducer;

pub struct ControlsReducer;

impl Reducer for ControlsReducer {
    type State = ControlsState;
    type Intent = ControlsIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ControlsIntent::CategoryNext => state.category = state.category.next(),
            ControlsIntent::CategoryPrev => state.category = state.category.prev(),
            ControlsIntent::ColumnsUp => {
                state.grid_columns = (state.grid_columns + 1).min(MAX_GRID_COLUMNS);
            }
            ControlsIntent::ColumnsDown => {
                state.grid_columns = state.grid_columns.saturating_sub(1).max(MIN_GRID_COLUMNS);
            }
            ControlsIntent::SearchChar(ch) => state.search.push(ch),
            ControlsIntent::SearchBackspace => {
                state.search.pop();
            }
            ControlsIntent::SearchClear => state.search.clear(),
        }
        state
    }
}
