use moviedeck::ui::mvi::Reducer;
use moviedeck::ui::nav::{NavIntent, NavReducer, NavState};

#[test]
fn go_home_from_details_clears_selection() {
    let state = NavReducer::reduce(NavState::Details { movie_id: 7 }, NavIntent::GoHome);
    assert_eq!(state, NavState::Home);
    assert_eq!(state.selected_id(), None);
}

#[test]
fn go_home_from_home_is_home() {
    let state = NavReducer::reduce(NavState::Home, NavIntent::GoHome);
    assert_eq!(state, NavState::Home);
}

#[test]
fn open_details_selects_the_movie() {
    let state = NavReducer::reduce(NavState::Home, NavIntent::OpenDetails { movie_id: 27205 });
    assert_eq!(state, NavState::Details { movie_id: 27205 });
    assert_eq!(state.selected_id(), Some(27205));
}

#[test]
fn open_details_replaces_an_existing_selection() {
    let state = NavReducer::reduce(
        NavState::Details { movie_id: 1 },
        NavIntent::OpenDetails { movie_id: 2 },
    );
    assert_eq!(state, NavState::Details { movie_id: 2 });
}

#[test]
fn home_location_is_exactly_view_home() {
    assert_eq!(NavState::Home.to_location().encode(), "view=home");
}

#[test]
fn details_location_carries_view_and_id() {
    let state = NavState::Details { movie_id: 42 };
    assert_eq!(state.to_location().encode(), "view=details&id=42");
}
