//! Stateful core of the tournament showcase: the paginated carousels, the
//! loading gate that arms them, and the background music player.

pub mod carousel;
pub mod error;
pub mod loader;
pub mod pager;
pub mod player;

pub use carousel::{CarouselConfig, CarouselController, CarouselNavigator};
pub use error::CarouselError;
pub use loader::{LoadingGate, ReadySignal, DEFAULT_LOADING_DELAY};
pub use pager::Pager;
pub use player::{MediaPlayerController, CONTROLS_REVEAL_DELAY, DEFAULT_VIDEO_ID};
