use super::*;
use shared::{
    domain::{RosterId, SocialLinks},
    roster,
};

fn snapshot(section: RosterKind, current_page: usize, page_count: usize) -> CarouselSnapshot {
    CarouselSnapshot {
        section,
        current_page,
        page_count,
        items: vec![RosterItem {
            id: RosterId(1),
            name: "Didine Canon 16".into(),
            role: Some("Rapper".into()),
            image_url: "/images/didine.jpg".into(),
            links: SocialLinks::new("https://www.instagram.com/didine/", "", "https://kick.com/didine"),
            featured: false,
        }],
    }
}

fn ready_player() -> PlayerSnapshot {
    PlayerSnapshot {
        phase: PlayerPhase::Ready,
        is_playing: true,
        is_muted: true,
        volume: 50,
        is_loaded: true,
        controls_visible: true,
    }
}

fn view(loading: bool) -> ShowcaseView {
    ShowcaseView::new(
        loading,
        roster::organizers(),
        snapshot(RosterKind::Contestants, 1, 4),
        snapshot(RosterKind::Guests, 0, 3),
        ready_player(),
    )
}

#[test]
fn page_dots_fill_the_current_page() {
    assert_eq!(page_dots(1, 4), "○●○○");
    assert_eq!(page_dots(0, 1), "●");
}

#[test]
fn loading_frame_hides_the_page_body() {
    let text = render_text(&view(true));
    assert!(text.contains(EVENT_TITLE));
    assert!(text.contains("loading..."));
    assert!(!text.contains("Didine Canon 16"));
}

#[test]
fn loaded_frame_shows_every_section() {
    let text = render_text(&view(false).with_status(Some("volume set to 30".into())));
    for anchor in SECTION_ANCHORS {
        assert!(text.contains(&format!("#{anchor}")), "missing #{anchor}");
    }
    for organizer in roster::organizers() {
        assert!(text.contains(&organizer.name));
    }
    assert!(text.contains("page 2/4  ○●○○"));
    assert!(text.contains("page 1/3  ●○○"));
    assert!(text.contains("Didine Canon 16 (Rapper)  [Instagram Kick]"));
    assert!(text.contains("player: playing | muted | volume 50"));
    assert!(text.ends_with("> volume set to 30\n"));
}

#[test]
fn player_bar_follows_the_phase() {
    let mut player = PlayerSnapshot::default();
    assert_eq!(player_bar(&player), "player: off");
    player.phase = PlayerPhase::Loading;
    assert_eq!(player_bar(&player), "player: connecting...");
    player = ready_player();
    player.controls_visible = false;
    assert_eq!(player_bar(&player), "player: starting");
}

#[test]
fn json_frame_omits_an_empty_status() {
    let json = render_json(&view(false)).expect("json");
    let value: serde_json::Value = serde_json::from_str(&json).expect("parse");
    assert_eq!(value["loading"], false);
    assert_eq!(value["contestants"]["current_page"], 1);
    assert_eq!(value["player"]["phase"], "ready");
    assert!(value.get("status").is_none());
}

#[test]
fn featured_entries_are_starred() {
    let mut contestants = snapshot(RosterKind::Contestants, 0, 4);
    contestants.items = roster::contestants()[..4].to_vec();
    let view = ShowcaseView::new(
        false,
        roster::organizers(),
        contestants,
        snapshot(RosterKind::Guests, 0, 3),
        ready_player(),
    );

    let text = render_text(&view);
    assert!(text.contains("  ★ Aessa  [Instagram YouTube]"));
    assert!(text.contains("  ★ Kraken"));
    assert!(text.contains("  - TheTwama"));
    assert!(text.contains("  - Didine Canon 16 (Rapper)"));
}
