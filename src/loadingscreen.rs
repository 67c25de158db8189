//! Splash/loading screen shown while the asset catalog loads.
//!
//! [`LoadingScreen`] owns the six resources the splash sequence needs (a
//! background bitmap, the intro animation bitmap, a small font, the start
//! sound, and the full/empty progress bar bitmaps) for exactly the duration
//! of the load. Acquisition is scoped: whichever exit path is taken —
//! normal [`end`](LoadingScreen::end), an aborted load via
//! [`dismiss`](LoadingScreen::dismiss), or a failure halfway through
//! [`show`](LoadingScreen::show) itself — every handle acquired so far is
//! handed back to the SDK.

use std::time::Duration;

use raylib::prelude::{Color, Rectangle};

use crate::error::SdkError;
use crate::sdk::{FontAlignment, GameSdk, ResourceKind};

/// Number of frames in the intro animation.
const INTRO_FRAME_COUNT: u32 = 11;
/// Per-frame delay of the intro animation.
const INTRO_FRAME_DELAY: Duration = Duration::from_millis(20);
/// Pause after the start sound begins, before the animation runs.
const INTRO_SOUND_LEAD: Duration = Duration::from_millis(200);
/// Hold on the finished intro before loading begins.
const INTRO_HOLD: Duration = Duration::from_millis(1500);
/// Hold on the final frame before the screen is cleared.
const OUTRO_HOLD: Duration = Duration::from_millis(500);

/// Progress message text box.
const TEXT_X: f32 = 310.0;
const TEXT_Y: f32 = 493.0;
const TEXT_W: f32 = 200.0;
const TEXT_H: f32 = 25.0;

/// Progress bar placement and fill geometry.
const BAR_X: f32 = 279.0;
const BAR_Y: f32 = 453.0;
const BAR_FILL_WIDTH: u32 = 260;
const BAR_FILL_HEIGHT: f32 = 66.0;

/// Total number of loading steps the bar is divided into.
pub const LOAD_STEPS: u32 = 5;

/// Splash size of the loading font.
const LOADING_FONT_SIZE: i32 = 12;

/// The splash screen and its scoped resources.
///
/// Handles are stored as `Option` so that [`release`](Self::release) can
/// free whatever subset was actually acquired.
pub struct LoadingScreen<S: GameSdk> {
    background: Option<S::Bitmap>,
    animation: Option<S::Bitmap>,
    loader_full: Option<S::Bitmap>,
    loader_empty: Option<S::Bitmap>,
    loading_font: Option<S::Font>,
    start_sound: Option<S::Sound>,
}

impl<S: GameSdk> LoadingScreen<S> {
    /// Load the splash resources and play the intro animation.
    ///
    /// If any load fails, the handles acquired up to that point are freed
    /// before the error is returned.
    pub fn show(sdk: &mut S) -> Result<Self, SdkError> {
        let mut screen = Self {
            background: None,
            animation: None,
            loader_full: None,
            loader_empty: None,
            loading_font: None,
            start_sound: None,
        };

        if let Err(e) = screen.acquire(sdk) {
            screen.release(sdk);
            return Err(e);
        }

        screen.play_intro(sdk);
        Ok(screen)
    }

    fn acquire(&mut self, sdk: &mut S) -> Result<(), SdkError> {
        let path = sdk.resource_path("SplashBack.png", ResourceKind::Image);
        let background = sdk.load_bitmap(&path)?;
        sdk.draw_bitmap(&background, 0.0, 0.0);
        self.background = Some(background);
        sdk.refresh_screen();
        sdk.process_events();

        let path = sdk.resource_path("SwinGameAni.jpg", ResourceKind::Image);
        self.animation = Some(sdk.load_bitmap(&path)?);

        let path = sdk.resource_path("arial.ttf", ResourceKind::Font);
        self.loading_font = Some(sdk.load_font(&path, LOADING_FONT_SIZE)?);

        let path = sdk.resource_path("SwinGameStart.ogg", ResourceKind::Sound);
        self.start_sound = Some(sdk.load_sound(&path)?);

        let path = sdk.resource_path("loader_full.png", ResourceKind::Image);
        self.loader_full = Some(sdk.load_bitmap(&path)?);

        let path = sdk.resource_path("loader_empty.png", ResourceKind::Image);
        self.loader_empty = Some(sdk.load_bitmap(&path)?);

        Ok(())
    }

    /// Short scripted intro: start sound once, then a fixed-length animation.
    fn play_intro(&self, sdk: &mut S) {
        if let Some(sound) = &self.start_sound {
            sdk.play_sound(sound);
        }
        sdk.delay(INTRO_SOUND_LEAD);

        for _frame in 0..INTRO_FRAME_COUNT {
            if let Some(background) = &self.background {
                sdk.draw_bitmap(background, 0.0, 0.0);
            }
            sdk.delay(INTRO_FRAME_DELAY);
            sdk.refresh_screen();
            sdk.process_events();
        }

        sdk.delay(INTRO_HOLD);
    }

    /// Draw a progress message with the bar filled to `step / LOAD_STEPS`.
    pub fn message(&self, sdk: &mut S, text: &str, step: u32) {
        let fill_width = (BAR_FILL_WIDTH * step / LOAD_STEPS) as f32;

        if let (Some(empty), Some(full), Some(font)) =
            (&self.loader_empty, &self.loader_full, &self.loading_font)
        {
            sdk.draw_bitmap(empty, BAR_X, BAR_Y);
            sdk.draw_bitmap_section(
                full,
                Rectangle {
                    x: 0.0,
                    y: 0.0,
                    width: fill_width,
                    height: BAR_FILL_HEIGHT,
                },
                BAR_X,
                BAR_Y,
            );
            sdk.draw_text_lines(
                text,
                Color::WHITE,
                font,
                FontAlignment::Center,
                Rectangle {
                    x: TEXT_X,
                    y: TEXT_Y,
                    width: TEXT_W,
                    height: TEXT_H,
                },
            );
        }

        sdk.refresh_screen();
        sdk.process_events();
    }

    /// Finish the loading screen: hold briefly, clear the display, free the
    /// splash resources, and restore the screen to the given dimensions.
    pub fn end(mut self, sdk: &mut S, width: i32, height: i32) -> Result<(), SdkError> {
        sdk.process_events();
        sdk.delay(OUTRO_HOLD);
        sdk.clear_screen();
        sdk.refresh_screen();
        self.release(sdk);
        sdk.change_screen_size(width, height)
    }

    /// Free the splash resources without the outro; used when a load phase
    /// fails while the splash is still up.
    pub fn dismiss(mut self, sdk: &mut S) {
        self.release(sdk);
    }

    fn release(&mut self, sdk: &mut S) {
        if let Some(font) = self.loading_font.take() {
            sdk.free_font(font);
        }
        if let Some(background) = self.background.take() {
            sdk.free_bitmap(background);
        }
        if let Some(animation) = self.animation.take() {
            sdk.free_bitmap(animation);
        }
        if let Some(empty) = self.loader_empty.take() {
            sdk.free_bitmap(empty);
        }
        if let Some(full) = self.loader_full.take() {
            sdk.free_bitmap(full);
        }
        if let Some(sound) = self.start_sound.take() {
            sdk.free_sound(sound);
        }
    }
}
