use crate::ui::mvi::Reducer;
use crate::ui::nav::intent::NavIntent;
use crate::ui::nav::state::NavState;

pub struct NavReducer;

impl Reducer for NavReducer {
    type State = NavState;
    type Intent = NavIntent;

    fn reduce(_state: Self::State, intent: Self::Intent) -> Self::State {
        // Both transitions are absolute: the target view does not depend
        // on where the user came from.
        match intent {
            NavIntent::GoHome => NavState::Home,
            NavIntent::OpenDetails { movie_id } => NavState::Details { movie_id },
        }
    }
}
