use super::*;
use media_integration::{SimulatedMediaProvider, SimulatedOptions};
use showcase_core::DEFAULT_LOADING_DELAY;
use tokio::time::sleep;

fn showcase() -> Showcase {
    let provider = Arc::new(SimulatedMediaProvider::new(SimulatedOptions {
        ready_latency: Duration::from_millis(400),
        fail_with: None,
    }));
    Showcase::new(provider, "MNcDT53Z5Fs", DEFAULT_LOADING_DELAY).expect("showcase")
}

#[tokio::test(start_paused = true)]
async fn loading_screen_lifts_after_the_gate_opens() {
    let showcase = showcase();
    assert!(showcase.view().loading);

    sleep(DEFAULT_LOADING_DELAY + Duration::from_millis(1)).await;
    assert!(!showcase.view().loading);
}

#[tokio::test(start_paused = true)]
async fn carousels_rotate_only_after_loading() {
    let showcase = showcase();

    sleep(Duration::from_millis(7_000)).await;
    assert_eq!(showcase.view().guests.current_page, 0);

    sleep(Duration::from_millis(600)).await;
    let view = showcase.view();
    assert_eq!(view.contestants.current_page, 0);
    assert_eq!(view.guests.current_page, 1);

    sleep(Duration::from_millis(2_000)).await;
    let view = showcase.view();
    assert_eq!(view.contestants.current_page, 1);
    assert_eq!(view.guests.current_page, 1);
}

#[tokio::test(start_paused = true)]
async fn typed_navigation_moves_the_guest_carousel() {
    let showcase = showcase();

    assert_eq!(showcase.apply(ShowcaseCommand::Next), Step::Continue(None));
    assert_eq!(showcase.view().guests.current_page, 1);
    assert_eq!(showcase.apply(ShowcaseCommand::Prev), Step::Continue(None));
    assert_eq!(showcase.apply(ShowcaseCommand::Prev), Step::Continue(None));
    assert_eq!(showcase.view().guests.current_page, 2);

    assert_eq!(showcase.apply(ShowcaseCommand::Page(0)), Step::Continue(None));
    assert_eq!(showcase.view().guests.current_page, 0);
    assert_eq!(
        showcase.apply(ShowcaseCommand::Page(5)),
        Step::Continue(Some("there are only 3 guest pages".into()))
    );
    assert_eq!(showcase.view().guests.current_page, 0);
    assert_eq!(showcase.view().contestants.current_page, 0);
}

#[tokio::test(start_paused = true)]
async fn player_commands_wait_for_the_provider() {
    let mut showcase = showcase();
    assert_eq!(
        showcase.apply(ShowcaseCommand::Play),
        Step::Continue(Some("the player is not ready yet".into()))
    );

    showcase.start_player().await.expect("start");
    sleep(Duration::from_millis(450)).await;
    let player = showcase.view().player;
    assert_eq!(player.phase, PlayerPhase::Ready);
    assert!(player.is_muted);

    assert_eq!(showcase.apply(ShowcaseCommand::Click), Step::Continue(None));
    assert!(!showcase.view().player.is_muted);
    assert_eq!(showcase.apply(ShowcaseCommand::Play), Step::Continue(None));
    assert!(!showcase.view().player.is_playing);
    assert_eq!(
        showcase.apply(ShowcaseCommand::Volume(30)),
        Step::Continue(Some("volume set to 30".into()))
    );
    assert_eq!(showcase.view().player.volume, 30);
}

#[tokio::test(start_paused = true)]
async fn quit_and_help_are_handled() {
    let showcase = showcase();
    assert_eq!(showcase.apply(ShowcaseCommand::Quit), Step::Quit);
    assert_eq!(
        showcase.apply(ShowcaseCommand::Help),
        Step::Continue(Some(HELP.to_string()))
    );
}

#[tokio::test(start_paused = true)]
async fn dispose_freezes_every_controller() {
    let mut showcase = showcase();
    showcase.start_player().await.expect("start");
    sleep(Duration::from_millis(450)).await;

    showcase.dispose();
    sleep(Duration::from_secs(30)).await;

    let view = showcase.view();
    assert!(view.loading);
    assert_eq!(view.contestants.current_page, 0);
    assert_eq!(view.guests.current_page, 0);
    assert_eq!(showcase.apply(ShowcaseCommand::Next), Step::Continue(None));
    assert_eq!(showcase.view().guests.current_page, 0);
}
