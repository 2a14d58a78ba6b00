use roadmap_core::{Navigator, TimeSpan, ViewState};

#[test]
fn starts_in_overview() {
    let nav = Navigator::new(TimeSpan::default());

    assert_eq!(nav.state(), ViewState::Overview);
    assert_eq!(nav.selected_year(), None);
}

#[test]
fn select_then_back_restores_the_initial_state() {
    let mut nav = Navigator::new(TimeSpan::default());
    let initial = nav;

    assert!(nav.select_year(2026));
    assert_eq!(nav.state(), ViewState::YearDetail { year: 2026 });
    assert_eq!(nav.selected_year(), Some(2026));

    assert!(nav.back());
    assert_eq!(nav, initial);
}

#[test]
fn lateral_navigation_is_inert_at_span_boundaries() {
    let mut nav = Navigator::new(TimeSpan::default());
    assert!(nav.select_year(2023));
    assert!(!nav.prev_year());
    assert_eq!(nav.state(), ViewState::YearDetail { year: 2023 });

    let mut nav = Navigator::new(TimeSpan::default());
    assert!(nav.select_year(2027));
    assert!(!nav.next_year());
    assert_eq!(nav.state(), ViewState::YearDetail { year: 2027 });
}

#[test]
fn change_year_moves_between_detail_views() {
    let mut nav = Navigator::new(TimeSpan::default());
    assert!(nav.select_year(2024));

    assert!(nav.change_year(2025));
    assert_eq!(nav.selected_year(), Some(2025));

    assert!(!nav.change_year(2031));
    assert_eq!(nav.selected_year(), Some(2025));

    assert!(!nav.change_year(2025));
    assert_eq!(nav.selected_year(), Some(2025));
}

#[test]
fn rejected_transitions_leave_state_untouched() {
    let mut nav = Navigator::new(TimeSpan::default());

    assert!(!nav.back());
    assert!(!nav.change_year(2025));
    assert!(!nav.select_year(2031));
    assert_eq!(nav.state(), ViewState::Overview);

    assert!(nav.select_year(2025));
    assert!(!nav.select_year(2026), "đang ở chi tiết thì select bị từ chối");
    assert_eq!(nav.selected_year(), Some(2025));
}

#[test]
fn can_change_to_drives_navigation_buttons() {
    let mut nav = Navigator::new(TimeSpan::default());
    assert!(!nav.can_change_to(2024), "ở tổng quan mọi nút ngang đều tắt");

    assert!(nav.select_year(2023));
    assert!(!nav.can_change_to(2022));
    assert!(nav.can_change_to(2024));
}
