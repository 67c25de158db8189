//! Raylib-backed implementation of [`GameSdk`].
//!
//! Raylib presents a fresh framebuffer every frame, while the loading screen
//! is written against a persistent canvas (draw, then refresh). To bridge
//! the two, all drawing goes into a `RenderTexture2D` canvas and
//! [`refresh_screen`](GameSdk::refresh_screen) blits the canvas to the
//! window, Y-flipped to compensate for OpenGL's inverted texture
//! coordinates.
//!
//! Sound and music handles borrow the `RaylibAudio` device, so the device is
//! created by the caller and outlives the SDK (and any registry storing its
//! handles).

use std::path::{Path, PathBuf};
use std::time::Duration;

use raylib::core::audio::{Music, RaylibAudio, Sound};
use raylib::ffi;
use raylib::prelude::*;

use crate::error::SdkError;
use crate::sdk::{FontAlignment, GameSdk, ResourceKind};

/// Spacing passed to raylib text drawing and measuring.
const TEXT_SPACING: f32 = 1.0;

pub struct RaylibSdk<'aud> {
    rl: RaylibHandle,
    thread: RaylibThread,
    audio: &'aud RaylibAudio,
    canvas: RenderTexture2D,
    assets_dir: PathBuf,
}

impl<'aud> RaylibSdk<'aud> {
    /// Wrap an initialized raylib window and audio device.
    ///
    /// The canvas is created at the window's current size and recreated on
    /// every [`change_screen_size`](GameSdk::change_screen_size).
    pub fn new(
        mut rl: RaylibHandle,
        thread: RaylibThread,
        audio: &'aud RaylibAudio,
        assets_dir: impl Into<PathBuf>,
    ) -> Result<Self, SdkError> {
        let width = rl.get_screen_width() as u32;
        let height = rl.get_screen_height() as u32;
        let canvas = rl
            .load_render_texture(&thread, width, height)
            .map_err(|e| SdkError::Display(format!("failed to create canvas: {}", e)))?;
        Ok(Self {
            rl,
            thread,
            audio,
            canvas,
            assets_dir: assets_dir.into(),
        })
    }
}

impl<'aud> GameSdk for RaylibSdk<'aud> {
    type Font = Font;
    type Bitmap = Texture2D;
    type Sound = Sound<'aud>;
    type Music = Music<'aud>;

    fn screen_size(&self) -> (i32, i32) {
        (self.rl.get_screen_width(), self.rl.get_screen_height())
    }

    fn change_screen_size(&mut self, width: i32, height: i32) -> Result<(), SdkError> {
        self.rl.set_window_size(width, height);
        self.canvas = self
            .rl
            .load_render_texture(&self.thread, width as u32, height as u32)
            .map_err(|e| SdkError::Display(format!("failed to recreate canvas: {}", e)))?;
        Ok(())
    }

    fn clear_screen(&mut self) {
        let mut d = self.rl.begin_texture_mode(&self.thread, &mut self.canvas);
        d.clear_background(Color::BLACK);
    }

    fn refresh_screen(&mut self) {
        let texture = self.canvas.texture;
        // Negative source height flips Y when blitting a render texture.
        let source = ffi::Rectangle {
            x: 0.0,
            y: 0.0,
            width: texture.width as f32,
            height: -(texture.height as f32),
        };
        let mut d = self.rl.begin_drawing(&self.thread);
        d.clear_background(Color::BLACK);
        unsafe {
            ffi::DrawTextureRec(
                texture,
                source,
                ffi::Vector2 { x: 0.0, y: 0.0 },
                Color::WHITE.into(),
            );
        }
    }

    fn process_events(&mut self) {
        // end_drawing pumps input once per presented frame; this matches the
        // SDK's explicit event-processing call between frames.
        unsafe {
            ffi::PollInputEvents();
        }
    }

    fn window_should_close(&self) -> bool {
        self.rl.window_should_close()
    }

    fn delay(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }

    fn resource_path(&self, filename: &str, kind: ResourceKind) -> PathBuf {
        let subdir = match kind {
            ResourceKind::Font => "fonts",
            ResourceKind::Image => "images",
            // Music tracks live with the sound effects.
            ResourceKind::Sound | ResourceKind::Music => "sounds",
        };
        self.assets_dir.join(subdir).join(filename)
    }

    fn load_font(&mut self, path: &Path, size: i32) -> Result<Font, SdkError> {
        let filename = path.to_string_lossy();
        self.rl
            .load_font_ex(&self.thread, &filename, size, None)
            .map_err(|e| SdkError::load(ResourceKind::Font, path, e.to_string()))
    }

    fn load_bitmap(&mut self, path: &Path) -> Result<Texture2D, SdkError> {
        let filename = path.to_string_lossy();
        self.rl
            .load_texture(&self.thread, &filename)
            .map_err(|e| SdkError::load(ResourceKind::Image, path, e.to_string()))
    }

    fn load_sound(&mut self, path: &Path) -> Result<Sound<'aud>, SdkError> {
        let filename = path.to_string_lossy();
        self.audio
            .new_sound(&filename)
            .map_err(|e| SdkError::load(ResourceKind::Sound, path, e.to_string()))
    }

    fn load_music(&mut self, path: &Path) -> Result<Music<'aud>, SdkError> {
        let filename = path.to_string_lossy();
        self.audio
            .new_music(&filename)
            .map_err(|e| SdkError::load(ResourceKind::Music, path, e.to_string()))
    }

    fn free_font(&mut self, font: Font) {
        drop(font);
    }

    fn free_bitmap(&mut self, bitmap: Texture2D) {
        drop(bitmap);
    }

    fn free_sound(&mut self, sound: Sound<'aud>) {
        drop(sound);
    }

    fn free_music(&mut self, music: Music<'aud>) {
        drop(music);
    }

    fn play_sound(&mut self, sound: &Sound<'aud>) {
        sound.play();
    }

    fn draw_bitmap(&mut self, bitmap: &Texture2D, x: f32, y: f32) {
        let mut d = self.rl.begin_texture_mode(&self.thread, &mut self.canvas);
        d.draw_texture(bitmap, x as i32, y as i32, Color::WHITE);
    }

    fn draw_bitmap_section(&mut self, bitmap: &Texture2D, section: Rectangle, x: f32, y: f32) {
        let mut d = self.rl.begin_texture_mode(&self.thread, &mut self.canvas);
        d.draw_texture_rec(bitmap, section, Vector2 { x, y }, Color::WHITE);
    }

    fn draw_text_lines(
        &mut self,
        text: &str,
        color: Color,
        font: &Font,
        alignment: FontAlignment,
        bounds: Rectangle,
    ) {
        let font_size = font.base_size() as f32;
        let line_count = text.lines().count().max(1) as f32;
        let line_height = bounds.height / line_count;

        let mut d = self.rl.begin_texture_mode(&self.thread, &mut self.canvas);
        for (index, line) in text.lines().enumerate() {
            let measured = font.measure_text(line, font_size, TEXT_SPACING);
            let x = match alignment {
                FontAlignment::Left => bounds.x,
                FontAlignment::Center => bounds.x + (bounds.width - measured.x) * 0.5,
                FontAlignment::Right => bounds.x + bounds.width - measured.x,
            };
            let y = bounds.y + index as f32 * line_height + (line_height - measured.y) * 0.5;
            d.draw_text_ex(font, line, Vector2 { x, y }, font_size, TEXT_SPACING, color);
        }
    }
}
