//! The seam to the external game SDK.
//!
//! [`GameSdk`] abstracts the handful of SDK calls the game needs: display
//! control, resource loading and freeing, a few drawing primitives, event
//! pumping, and pacing delays. The production implementation lives in
//! [`raylibsdk`](crate::raylibsdk); integration tests substitute a stub that
//! records every call, so the whole load sequence can run without a window,
//! real asset files, or wall-clock waits.
//!
//! Handles are associated types. The registry and the loading screen never
//! look inside them; they only carry them from a load call to the matching
//! free call.

use std::path::{Path, PathBuf};
use std::time::Duration;

use raylib::prelude::{Color, Rectangle};

use crate::error::SdkError;

/// Kind tag used for path resolution and error reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Font,
    Image,
    Sound,
    Music,
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ResourceKind::Font => "font",
            ResourceKind::Image => "image",
            ResourceKind::Sound => "sound",
            ResourceKind::Music => "music",
        };
        f.write_str(name)
    }
}

/// Horizontal alignment for [`GameSdk::draw_text_lines`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FontAlignment {
    Left,
    #[default]
    Center,
    Right,
}

/// Everything the resource registry and loading screen consume from the SDK.
///
/// Load calls may fail (missing or corrupt file); those errors are propagated
/// untouched and are fatal to the startup sequence. Free calls take the
/// handle by value, so a handle can never be freed twice.
pub trait GameSdk {
    type Font;
    type Bitmap;
    type Sound;
    type Music;

    /// Current display surface size in pixels as (width, height).
    fn screen_size(&self) -> (i32, i32);

    /// Resize the display surface.
    fn change_screen_size(&mut self, width: i32, height: i32) -> Result<(), SdkError>;

    /// Erase the drawing canvas to black.
    fn clear_screen(&mut self);

    /// Present the current canvas contents on screen.
    fn refresh_screen(&mut self);

    /// Pump pending input/window events to keep the host window responsive.
    fn process_events(&mut self);

    /// Whether the host window has been asked to close.
    fn window_should_close(&self) -> bool;

    /// Block for a fixed duration; used only to pace visual feedback.
    fn delay(&mut self, duration: Duration);

    /// Map a logical asset filename plus its kind to a concrete path.
    fn resource_path(&self, filename: &str, kind: ResourceKind) -> PathBuf;

    fn load_font(&mut self, path: &Path, size: i32) -> Result<Self::Font, SdkError>;
    fn load_bitmap(&mut self, path: &Path) -> Result<Self::Bitmap, SdkError>;
    fn load_sound(&mut self, path: &Path) -> Result<Self::Sound, SdkError>;
    fn load_music(&mut self, path: &Path) -> Result<Self::Music, SdkError>;

    fn free_font(&mut self, font: Self::Font);
    fn free_bitmap(&mut self, bitmap: Self::Bitmap);
    fn free_sound(&mut self, sound: Self::Sound);
    fn free_music(&mut self, music: Self::Music);

    /// Start playback of a loaded sound effect.
    fn play_sound(&mut self, sound: &Self::Sound);

    /// Draw a whole bitmap with its top-left corner at (x, y).
    fn draw_bitmap(&mut self, bitmap: &Self::Bitmap, x: f32, y: f32);

    /// Draw a sub-rectangle of a bitmap with its top-left corner at (x, y).
    fn draw_bitmap_section(&mut self, bitmap: &Self::Bitmap, section: Rectangle, x: f32, y: f32);

    /// Draw (possibly multi-line) text aligned within a bounding rectangle.
    fn draw_text_lines(
        &mut self,
        text: &str,
        color: Color,
        font: &Self::Font,
        alignment: FontAlignment,
        bounds: Rectangle,
    );
}
