use std::fmt::Write as _;

use serde::Serialize;
use shared::{
    domain::{RosterItem, RosterKind},
    protocol::{CarouselSnapshot, PlayerPhase, PlayerSnapshot},
    roster::EVENT_TITLE,
};

/// In-page anchors of the single-page site, in display order.
pub const SECTION_ANCHORS: [&str; 5] = ["home", "contestants", "guests", "organizers", "contact"];

/// Everything a frame shows.
#[derive(Debug, Clone, Serialize)]
pub struct ShowcaseView {
    pub title: &'static str,
    pub loading: bool,
    pub organizers: Vec<RosterItem>,
    pub contestants: CarouselSnapshot,
    pub guests: CarouselSnapshot,
    pub player: PlayerSnapshot,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl ShowcaseView {
    pub fn new(
        loading: bool,
        organizers: &[RosterItem],
        contestants: CarouselSnapshot,
        guests: CarouselSnapshot,
        player: PlayerSnapshot,
    ) -> Self {
        Self {
            title: EVENT_TITLE,
            loading,
            organizers: organizers.to_vec(),
            contestants,
            guests,
            player,
            status: None,
        }
    }

    pub fn with_status(mut self, status: Option<String>) -> Self {
        self.status = status;
        self
    }
}

pub fn render_json(view: &ShowcaseView) -> serde_json::Result<String> {
    serde_json::to_string(view)
}

pub fn render_text(view: &ShowcaseView) -> String {
    let mut out = String::new();
    let anchors: Vec<String> = SECTION_ANCHORS.iter().map(|a| format!("#{a}")).collect();
    let _ = writeln!(out, "== {} ==", view.title);
    let _ = writeln!(out, "   {}", anchors.join("  "));

    if view.loading {
        let _ = writeln!(out, "\n   loading...");
        push_status(&mut out, view.status.as_deref());
        return out;
    }

    let _ = writeln!(out, "\n{}", RosterKind::Organizers.title());
    for item in &view.organizers {
        let _ = writeln!(out, "{}", item_line(item));
    }
    push_carousel(&mut out, &view.contestants);
    push_carousel(&mut out, &view.guests);
    let _ = writeln!(out, "\n{}", player_bar(&view.player));
    push_status(&mut out, view.status.as_deref());
    out
}

fn push_carousel(out: &mut String, snapshot: &CarouselSnapshot) {
    let _ = writeln!(
        out,
        "\n{}  page {}/{}  {}",
        snapshot.section.title(),
        snapshot.current_page + 1,
        snapshot.page_count,
        page_dots(snapshot.current_page, snapshot.page_count)
    );
    for item in &snapshot.items {
        let _ = writeln!(out, "{}", item_line(item));
    }
}

fn push_status(out: &mut String, status: Option<&str>) {
    if let Some(status) = status {
        let _ = writeln!(out, "\n> {status}");
    }
}

/// One dot per page, the current one filled.
pub fn page_dots(current: usize, count: usize) -> String {
    (0..count)
        .map(|page| if page == current { '●' } else { '○' })
        .collect()
}

fn item_line(item: &RosterItem) -> String {
    let marker = if item.featured { '★' } else { '-' };
    let mut line = format!("  {marker} {}", item.name);
    if let Some(role) = &item.role {
        let _ = write!(line, " ({role})");
    }
    if !item.links.is_empty() {
        let platforms: Vec<&str> = item.links.iter().map(|(p, _)| p.label()).collect();
        let _ = write!(line, "  [{}]", platforms.join(" "));
    }
    line
}

pub fn player_bar(player: &PlayerSnapshot) -> String {
    match player.phase {
        PlayerPhase::Uninitialized => "player: off".to_string(),
        PlayerPhase::Loading => "player: connecting...".to_string(),
        PlayerPhase::Ready if !player.controls_visible => "player: starting".to_string(),
        PlayerPhase::Ready => format!(
            "player: {} | {} | volume {}",
            if player.is_playing { "playing" } else { "paused" },
            if player.is_muted { "muted" } else { "sound on" },
            player.volume
        ),
    }
}

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod tests;
