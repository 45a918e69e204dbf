//! Application state tests
//!
//! Tests for the splash → interactive transition, the submit / fetch /
//! results cycle, and the quit and focus-search keys.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use marquee::search::{SearchError, SearchHit};
use marquee::ui::app::{
    App, AppAction, AppEvent, Phase, STATUS_FETCHING, STATUS_NO_RESULTS, STATUS_PLACEHOLDER,
};
use marquee::ui::theme::Theme;
use std::time::Duration;

/// Helper to create a test app
fn create_test_app() -> App {
    App::new(Theme::default_theme().clone(), "Test")
}

/// Helper to create a test app already past the splash screen
fn interactive_app() -> App {
    let mut app = create_test_app();
    app.handle_event(AppEvent::SplashElapsed);
    assert_eq!(app.phase(), Phase::Interactive);
    app
}

fn key(app: &mut App, code: KeyCode) -> Option<AppAction> {
    app.handle_event(AppEvent::Key(KeyEvent::new(code, KeyModifiers::empty())))
}

fn type_query(app: &mut App, text: &str) {
    for c in text.chars() {
        key(app, KeyCode::Char(c));
    }
}

fn hits(titles: &[&str]) -> Vec<SearchHit> {
    titles
        .iter()
        .map(|t| SearchHit {
            title: (*t).to_string(),
        })
        .collect()
}

/// Submit `query` and deliver `result` as its completion.
fn search_round(app: &mut App, query: &str, result: Result<Vec<SearchHit>, SearchError>) {
    type_query(app, query);
    let action = key(app, KeyCode::Enter);
    let Some(AppAction::BeginSearch { seq, .. }) = action else {
        panic!("submit did not start a search: {action:?}");
    };
    app.handle_event(AppEvent::SearchDone { seq, result });
}

#[test]
fn test_no_key_skips_the_splash() {
    let mut app = create_test_app();
    for code in [KeyCode::Enter, KeyCode::Char(' '), KeyCode::Down, KeyCode::Char('n')] {
        key(&mut app, code);
        assert_eq!(app.phase(), Phase::Splash);
    }
}

#[test]
fn test_splash_timer_enters_the_interactive_phase() {
    let mut app = create_test_app();
    app.handle_event(AppEvent::SplashElapsed);
    assert_eq!(app.phase(), Phase::Interactive);
    assert_eq!(app.status_line().as_deref(), Some(STATUS_PLACEHOLDER));
    // The one-shot timer firing again is harmless.
    app.handle_event(AppEvent::SplashElapsed);
    assert_eq!(app.phase(), Phase::Interactive);
}

#[test]
fn test_quit_keys_work_from_the_splash() {
    for code in [KeyCode::Char('q'), KeyCode::Char('Q'), KeyCode::Esc] {
        let mut app = create_test_app();
        key(&mut app, code);
        assert!(app.should_quit, "{code:?} should quit");
    }
}

#[test]
fn test_typing_q_into_the_search_box_does_not_quit() {
    let mut app = interactive_app();
    key(&mut app, KeyCode::Char('q'));
    assert!(!app.should_quit);
    assert_eq!(app.search_text().as_deref(), Some("q"));
    // Esc is not text: it still quits while the input is focused.
    key(&mut app, KeyCode::Esc);
    assert!(app.should_quit);
}

#[test]
fn test_submit_starts_a_search_and_shows_fetching() {
    let mut app = interactive_app();
    type_query(&mut app, "abc");
    let action = key(&mut app, KeyCode::Enter);
    assert_eq!(
        action,
        Some(AppAction::BeginSearch {
            seq: 1,
            query: "abc".to_string()
        })
    );
    assert_eq!(app.status_line().as_deref(), Some(STATUS_FETCHING));
    assert!(app.result_titles().is_empty());
}

#[test]
fn test_results_are_rebuilt_in_order() {
    let mut app = interactive_app();
    search_round(&mut app, "abc", Ok(hits(&["Alpha", "Abacus"])));

    assert_eq!(app.result_titles(), vec!["Alpha", "Abacus"]);
    assert_eq!(app.status_line().as_deref(), Some(""));
}

#[test]
fn test_each_result_activates_with_its_own_title() {
    let mut app = interactive_app();
    search_round(&mut app, "abc", Ok(hits(&["Alpha", "Abacus"])));

    // Move into the list and activate the first row.
    key(&mut app, KeyCode::Down);
    key(&mut app, KeyCode::Enter);
    assert!(app.footer_line().contains("You chose: Alpha"));

    key(&mut app, KeyCode::Down);
    key(&mut app, KeyCode::Enter);
    assert!(app.footer_line().contains("You chose: Abacus"));
}

#[test]
fn test_empty_query_restores_the_placeholder() {
    let mut app = interactive_app();
    search_round(&mut app, "abc", Ok(hits(&["Alpha", "Abacus"])));
    assert_eq!(app.result_titles().len(), 2);

    // Clear the query (focus is still on the search box) and re-submit.
    key(&mut app, KeyCode::Backspace);
    key(&mut app, KeyCode::Backspace);
    key(&mut app, KeyCode::Backspace);
    assert_eq!(app.search_text().as_deref(), Some(""));
    let action = key(&mut app, KeyCode::Enter);
    assert_eq!(action, None);

    assert!(app.result_titles().is_empty());
    assert_eq!(app.status_line().as_deref(), Some(STATUS_PLACEHOLDER));
}

#[test]
fn test_zero_matches_sets_the_no_results_status() {
    let mut app = interactive_app();
    search_round(&mut app, "zzz", Ok(Vec::new()));
    assert_eq!(app.status_line().as_deref(), Some(STATUS_NO_RESULTS));
    assert!(app.result_titles().is_empty());
}

#[test]
fn test_search_errors_become_a_status_line() {
    let mut app = interactive_app();
    search_round(
        &mut app,
        "abc",
        Err(SearchError::Timeout(Duration::from_secs(10))),
    );
    let status = app.status_line().expect("status line present");
    assert!(status.starts_with("Error:"), "status: {status}");
    assert!(app.result_titles().is_empty());
}

#[test]
fn test_stale_completions_are_dropped() {
    let mut app = interactive_app();

    type_query(&mut app, "abc");
    let Some(AppAction::BeginSearch { seq: stale, .. }) = key(&mut app, KeyCode::Enter) else {
        panic!("submit did not start a search");
    };

    // The user clears the query before the lookup lands.
    for _ in 0..3 {
        key(&mut app, KeyCode::Backspace);
    }
    key(&mut app, KeyCode::Enter);
    assert_eq!(app.status_line().as_deref(), Some(STATUS_PLACEHOLDER));

    // The late completion must not resurrect the dead lookup.
    app.handle_event(AppEvent::SearchDone {
        seq: stale,
        result: Ok(hits(&["Ghost"])),
    });
    assert!(app.result_titles().is_empty());
    assert_eq!(app.status_line().as_deref(), Some(STATUS_PLACEHOLDER));
}

#[test]
fn test_identical_query_refetches() {
    let mut app = interactive_app();
    search_round(&mut app, "abc", Ok(hits(&["Alpha"])));

    // Same text, fresh submit: a new lookup starts (no cache).
    let action = key(&mut app, KeyCode::Enter);
    assert_eq!(
        action,
        Some(AppAction::BeginSearch {
            seq: 2,
            query: "abc".to_string()
        })
    );
    assert_eq!(app.status_line().as_deref(), Some(STATUS_FETCHING));
}

#[test]
fn test_focus_search_key_returns_to_the_search_box() {
    let mut app = interactive_app();
    search_round(&mut app, "abc", Ok(hits(&["Alpha", "Abacus"])));

    key(&mut app, KeyCode::Down);
    assert_eq!(app.top_focus(), Some(1));

    key(&mut app, KeyCode::Char('n'));
    assert_eq!(app.top_focus(), Some(0));
    assert!(!app.should_quit);
}

#[test]
fn test_quit_from_the_result_list() {
    let mut app = interactive_app();
    search_round(&mut app, "abc", Ok(hits(&["Alpha"])));
    key(&mut app, KeyCode::Down);

    // 'q' is not text here: nothing on the focus path wants it.
    key(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit);
}
