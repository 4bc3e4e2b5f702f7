//! Text rendering of the scoreboard.
//!
//! [`ScoreboardView`] owns its [`MatchStore`]: mounting the view creates the
//! match, dropping it ends the match. The view renders a snapshot as plain
//! text and exposes one control per side.

use crate::core::{Score, Side, Team};
use crate::store::{MatchSnapshot, MatchStore};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use tracing::debug;

/// An activatable control bound to exactly one side.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Control {
    label: String,
    side: Side,
}

impl Control {
    fn for_team(side: Side, team: &Team) -> Self {
        Self {
            label: format!("+1 {}", team.name()),
            side,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn side(&self) -> Side {
        self.side
    }
}

/// Scoreboard mounted on a match store.
///
/// # Example
///
/// ```rust
/// use scoreboard::store::MatchStore;
/// use scoreboard::view::ScoreboardView;
///
/// let mut view = ScoreboardView::mount(MatchStore::new());
/// let finland = view.controls()[1].clone();
/// view.activate(&finland);
///
/// let text = view.render();
/// assert!(text.starts_with("🇫🇷 France 0 – 1 Finland 🇫🇮"));
/// ```
#[derive(Debug)]
pub struct ScoreboardView {
    store: MatchStore,
}

impl ScoreboardView {
    pub fn mount(store: MatchStore) -> Self {
        debug!("scoreboard mounted");
        Self { store }
    }

    /// Detach the store from the view.
    pub fn unmount(self) -> MatchStore {
        debug!("scoreboard unmounted");
        self.store
    }

    pub fn store(&self) -> &MatchStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut MatchStore {
        &mut self.store
    }

    /// Controls in display order, home first.
    pub fn controls(&self) -> [Control; 2] {
        controls_for(self.store.team(Side::Home), self.store.team(Side::Away))
    }

    /// Activate a control: one goal for its bound side, nothing else.
    pub fn activate(&mut self, control: &Control) -> Score {
        self.store.increment(control.side)
    }

    pub fn render(&self) -> String {
        render(
            &self.store.state(),
            self.store.team(Side::Home),
            self.store.team(Side::Away),
        )
    }
}

fn controls_for(home: &Team, away: &Team) -> [Control; 2] {
    [
        Control::for_team(Side::Home, home),
        Control::for_team(Side::Away, away),
    ]
}

/// Render a snapshot as text.
///
/// The home team reads flag, name, score; the away team mirrors it as
/// score, name, flag so the two scores sit either side of the divider.
pub fn render(snapshot: &MatchSnapshot, home: &Team, away: &Team) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} {} {} \u{2013} {} {} {}",
        home.flag(),
        home.name(),
        snapshot.home,
        snapshot.away,
        away.name(),
        away.flag()
    );
    let buttons: Vec<String> = controls_for(home, away)
        .iter()
        .map(|control| format!("[{}]", control.label()))
        .collect();
    let _ = writeln!(out, "{}", buttons.join(" "));
    out.push_str("Events:\n");
    for event in &snapshot.events {
        out.push_str(event);
        out.push('\n');
    }
    out
}
