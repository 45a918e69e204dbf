//! # Application State Machine
//!
//! Two phases: a splash screen that only a timer can end, then the
//! interactive search screen. The interactive phase carries the result
//! list as data (placeholder / fetching / results / empty / error are all
//! states of the list and status line, not separate phases).
//!
//! The machine consumes typed [`AppEvent`]s delivered by the event loop
//! and owns the widget tree of the current phase outright: entering a
//! phase discards the old tree and builds a new one, and every change to
//! the result list swaps the full child list of the menu container.
//! Side effects the loop must perform (starting a lookup) are returned as
//! [`AppAction`]s rather than executed here, which keeps the machine
//! synchronous and directly testable.

use crossterm::event::{KeyCode, KeyEvent, MouseEvent};
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Position, Rect};

use crate::banner;
use crate::search::{SearchError, SearchHit};
use crate::widget::{
    BorderGlyphs, BorderedFrame, Command, EventResult, FocusableItem, ItemRecord, KeyRule,
    NavigationContainer, NavigationPolicy, StaticText, StyleTag, WidgetNode,
};

use super::theme::Theme;

/// Status line shown before any query has been submitted.
pub const STATUS_PLACEHOLDER: &str = "Results appear here.";
/// Status line shown while a lookup is in flight.
pub const STATUS_FETCHING: &str = "Fetching...";
/// Status line shown when a lookup matched nothing.
pub const STATUS_NO_RESULTS: &str = "No results found.";

const FOOTER_HELP: &str = " q/esc: Quit  ↑/↓: Navigate  n: Focus Search ";

/// Caption drawn inside the search input.
const SEARCH_CAPTION: &str = " ⌕ ";

// Fixed child positions in the interactive tree.
const SEARCH_SLOT: usize = 0;
const RESULTS_SLOT: usize = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Splash,
    Interactive,
}

/// Events delivered by the loop, in the order the loop saw them.
#[derive(Debug)]
pub enum AppEvent {
    /// The one-shot splash timer expired.
    SplashElapsed,
    Key(KeyEvent),
    Mouse(MouseEvent),
    /// A lookup started by [`AppAction::BeginSearch`] finished.
    SearchDone {
        seq: u64,
        result: Result<Vec<SearchHit>, SearchError>,
    },
}

/// Side effects for the loop to carry out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppAction {
    /// Run the lookup off the loop and report back as
    /// [`AppEvent::SearchDone`] with the same `seq`.
    BeginSearch { seq: u64, query: String },
}

pub struct App {
    phase: Phase,
    root: WidgetNode,
    theme: Theme,
    /// Title of the most recently activated result, shown in the footer.
    selection: Option<String>,
    /// Whether a lookup is in flight for `search_seq`.
    fetching: bool,
    /// Identifies the lookup whose completion is still wanted; completions
    /// carrying an older seq are dropped.
    search_seq: u64,
    pub should_quit: bool,
}

impl App {
    pub fn new(theme: Theme, title: impl Into<String>) -> Self {
        let root = splash_root(&theme, &title.into());
        Self {
            phase: Phase::Splash,
            root,
            theme,
            selection: None,
            fetching: false,
            search_seq: 0,
            should_quit: false,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Feed one event through the machine; returns the side effect the
    /// loop must perform, if any.
    pub fn handle_event(&mut self, event: AppEvent) -> Option<AppAction> {
        match event {
            AppEvent::SplashElapsed => {
                if self.phase == Phase::Splash {
                    self.phase = Phase::Interactive;
                    self.root = interactive_root(&self.theme);
                }
                None
            }
            AppEvent::Key(key) => match self.root.handle_key(key) {
                EventResult::Command(command) => self.run_command(command),
                EventResult::Consumed => None,
                EventResult::Ignored => {
                    self.handle_global_key(key);
                    None
                }
            },
            AppEvent::Mouse(mouse) => match self.root.handle_mouse(mouse) {
                EventResult::Command(command) => self.run_command(command),
                _ => None,
            },
            AppEvent::SearchDone { seq, result } => {
                self.finish_search(seq, result);
                None
            }
        }
    }

    /// Paint the current tree into `area` and return the cursor position
    /// derived from the focus path (`None` keeps the terminal cursor
    /// hidden).
    pub fn render_root(&mut self, area: Rect, buf: &mut Buffer) -> Option<Position> {
        self.root.render(area, buf, true)
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// The footer line: last activated title, or the key help.
    pub fn footer_line(&self) -> String {
        match &self.selection {
            Some(title) => format!(" You chose: {title} "),
            None => FOOTER_HELP.to_string(),
        }
    }

    /// Current status line of the results box, if the tree has one.
    pub fn status_line(&self) -> Option<String> {
        match self.menu_container()?.children().first()? {
            WidgetNode::Leaf(text) => Some(text.text()),
            _ => None,
        }
    }

    /// Labels of the current result rows, in render order.
    pub fn result_titles(&self) -> Vec<String> {
        let Some(menu) = self.menu_container() else {
            return Vec::new();
        };
        menu.children()
            .iter()
            .filter_map(|child| match child {
                WidgetNode::Item(item) => Some(item.record().label.clone()),
                _ => None,
            })
            .collect()
    }

    /// Contents of the search input, if the tree has one.
    pub fn search_text(&self) -> Option<String> {
        let top = self.top_container()?;
        match top.children().get(SEARCH_SLOT)? {
            WidgetNode::Frame(frame) => match frame.child() {
                WidgetNode::Item(item) => Some(item.text().to_string()),
                _ => None,
            },
            _ => None,
        }
    }

    /// Focus index of the top-level container (search = 0, results = 1).
    pub fn top_focus(&self) -> Option<usize> {
        self.top_container().map(|c| c.focus())
    }

    fn run_command(&mut self, command: Command) -> Option<AppAction> {
        match command {
            Command::Submit(query) => self.submit(&query),
            Command::Choose(title) => {
                self.selection = Some(title);
                None
            }
        }
    }

    /// Submit from the search box. An empty query clears the list and
    /// restores the placeholder; anything else starts a fresh lookup
    /// (identical queries re-fetch, there is no cache).
    fn submit(&mut self, query: &str) -> Option<AppAction> {
        let query = query.trim();
        self.search_seq += 1;
        if query.is_empty() {
            self.fetching = false;
            self.swap_results(STATUS_PLACEHOLDER, &[]);
            return None;
        }
        self.fetching = true;
        self.swap_results(STATUS_FETCHING, &[]);
        Some(AppAction::BeginSearch {
            seq: self.search_seq,
            query: query.to_string(),
        })
    }

    fn finish_search(&mut self, seq: u64, result: Result<Vec<SearchHit>, SearchError>) {
        if !self.fetching || seq != self.search_seq {
            // A completion for a lookup nobody is waiting on anymore.
            return;
        }
        self.fetching = false;
        match result {
            Ok(hits) if hits.is_empty() => self.swap_results(STATUS_NO_RESULTS, &[]),
            Ok(hits) => self.swap_results("", &hits),
            Err(err) => {
                let status = format!("Error: {err}");
                self.swap_results(&status, &[]);
            }
        }
    }

    fn handle_global_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('n') | KeyCode::Char('N') => {
                if self.phase == Phase::Interactive {
                    if let Some(top) = self.top_container_mut() {
                        top.set_focus(SEARCH_SLOT);
                    }
                }
            }
            _ => {}
        }
    }

    /// Swap the menu container's children for a fresh status + result set.
    fn swap_results(&mut self, status: &str, hits: &[SearchHit]) {
        let children = results_children(&self.theme, status, hits);
        if let Some(menu) = self.menu_container_mut() {
            menu.replace_children(children);
        }
    }

    fn top_container(&self) -> Option<&NavigationContainer> {
        match &self.root {
            WidgetNode::Container(container) => Some(container),
            _ => None,
        }
    }

    fn top_container_mut(&mut self) -> Option<&mut NavigationContainer> {
        match &mut self.root {
            WidgetNode::Container(container) => Some(container),
            _ => None,
        }
    }

    fn menu_container(&self) -> Option<&NavigationContainer> {
        match self.top_container()?.children().get(RESULTS_SLOT)? {
            WidgetNode::Frame(frame) => match frame.child() {
                WidgetNode::Container(container) => Some(container),
                _ => None,
            },
            _ => None,
        }
    }

    fn menu_container_mut(&mut self) -> Option<&mut NavigationContainer> {
        match self.top_container_mut()?.child_mut(RESULTS_SLOT)? {
            WidgetNode::Frame(frame) => match frame.child_mut() {
                WidgetNode::Container(container) => Some(container),
                _ => None,
            },
            _ => None,
        }
    }
}

/// The splash tree: the banner alone, centered both ways.
fn splash_root(theme: &Theme, title: &str) -> WidgetNode {
    WidgetNode::Leaf(
        StaticText::new(banner::render_title(title))
            .style(theme.splash_style())
            .align(Alignment::Center)
            .middle(),
    )
}

/// The interactive tree: a labeled search frame over a heavy-bordered
/// results frame. The shape is fixed; `SEARCH_SLOT` / `RESULTS_SLOT`
/// index into it.
fn interactive_root(theme: &Theme) -> WidgetNode {
    let input = WidgetNode::Item(
        FocusableItem::input(SEARCH_CAPTION).style(theme.style_for(StyleTag::Normal)),
    );
    let search_frame = WidgetNode::Frame(
        BorderedFrame::new(input)
            .label("Search:")
            .border_style(theme.border_style())
            .label_style(theme.label_style()),
    );

    let menu = NavigationContainer::new(
        results_children(theme, STATUS_PLACEHOLDER, &[]),
        NavigationPolicy::vertical(),
    )
    .fill();
    let results_frame = WidgetNode::Frame(
        BorderedFrame::new(WidgetNode::Container(menu))
            .label("Results")
            .glyphs(BorderGlyphs::HEAVY)
            .border_style(theme.border_style())
            .label_style(theme.label_style()),
    );

    let policy = NavigationPolicy::vertical()
        .with(KeyCode::PageUp, KeyRule::Swallow)
        .with(KeyCode::PageDown, KeyRule::Swallow);
    WidgetNode::Container(NavigationContainer::new(
        vec![search_frame, results_frame],
        policy,
    ))
}

/// Children of the menu container: status line first, then one row per
/// hit, each bound to a `Choose` command carrying its own title.
fn results_children(theme: &Theme, status: &str, hits: &[SearchHit]) -> Vec<WidgetNode> {
    let mut children = vec![WidgetNode::Leaf(
        StaticText::new(status)
            .style(theme.style_for(StyleTag::Dim))
            .align(Alignment::Center),
    )];
    for hit in hits {
        let record = ItemRecord::new(hit.title.clone())
            .tag(StyleTag::Normal)
            .action(Command::Choose(hit.title.clone()));
        children.push(WidgetNode::Item(
            FocusableItem::row(record)
                .style(theme.style_for(StyleTag::Normal))
                .focus_style(theme.focus_style()),
        ));
    }
    children
}
