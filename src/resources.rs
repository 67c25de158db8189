//! Game resource registry.
//!
//! [`GameResources`] owns the four name→handle maps (fonts, images, sounds,
//! music) for the whole run of the game. It is constructed once at startup,
//! populated by [`load_resources`](GameResources::load_resources) from the
//! declarative tables in [`catalog`](crate::catalog), queried by name by
//! every other subsystem, and torn down by
//! [`free_resources`](GameResources::free_resources) at shutdown.
//!
//! The registry is an explicit value passed to whoever needs it, not a
//! global. It is generic over [`GameSdk`], so the load/free traffic can be
//! observed by a stub SDK in tests.

use std::time::Duration;

use log::{debug, info};
use rustc_hash::FxHashMap;

use crate::catalog;
use crate::error::SdkError;
use crate::loadingscreen::LoadingScreen;
use crate::sdk::{GameSdk, ResourceKind};

/// Display surface size used while loading and playing.
const GAME_WIDTH: i32 = 800;
const GAME_HEIGHT: i32 = 600;

/// Pause after each load phase so its progress message stays visible.
const PHASE_DELAY: Duration = Duration::from_millis(100);

/// Name-keyed stores for every loaded asset handle.
pub struct GameResources<S: GameSdk> {
    fonts: FxHashMap<String, S::Font>,
    images: FxHashMap<String, S::Bitmap>,
    sounds: FxHashMap<String, S::Sound>,
    music: FxHashMap<String, S::Music>,
}

impl<S: GameSdk> Default for GameResources<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: GameSdk> GameResources<S> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            fonts: FxHashMap::default(),
            images: FxHashMap::default(),
            sounds: FxHashMap::default(),
            music: FxHashMap::default(),
        }
    }

    /// Run the full startup sequence.
    ///
    /// Resizes the display to the game resolution, shows the loading screen,
    /// loads fonts, images, sounds, and music in that order with a progress
    /// message before each phase, then ends the loading screen and restores
    /// the screen size captured before loading began.
    ///
    /// Any load failure frees the splash resources and propagates; the
    /// registry may then hold a partial catalog and should be discarded.
    pub fn load_resources(&mut self, sdk: &mut S) -> Result<(), SdkError> {
        let (width, height) = sdk.screen_size();
        sdk.change_screen_size(GAME_WIDTH, GAME_HEIGHT)?;

        let splash = LoadingScreen::show(sdk)?;

        let result = self.load_catalog(sdk, &splash);
        if let Err(e) = result {
            splash.dismiss(sdk);
            return Err(e);
        }

        splash.end(sdk, width, height)?;
        info!(
            "Resources loaded: {} fonts, {} images, {} sounds, {} music",
            self.fonts.len(),
            self.images.len(),
            self.sounds.len(),
            self.music.len()
        );
        Ok(())
    }

    /// The four load phases, paced by the loading screen.
    fn load_catalog(&mut self, sdk: &mut S, splash: &LoadingScreen<S>) -> Result<(), SdkError> {
        splash.message(sdk, "Loading fonts...", 0);
        self.load_fonts(sdk)?;
        sdk.delay(PHASE_DELAY);

        splash.message(sdk, "Loading images...", 1);
        self.load_images(sdk)?;
        sdk.delay(PHASE_DELAY);

        splash.message(sdk, "Loading sounds...", 2);
        self.load_sounds(sdk)?;
        sdk.delay(PHASE_DELAY);

        splash.message(sdk, "Loading music...", 3);
        self.load_music(sdk)?;
        sdk.delay(PHASE_DELAY);

        sdk.delay(PHASE_DELAY);
        splash.message(sdk, "Game loaded...", crate::loadingscreen::LOAD_STEPS);
        sdk.delay(PHASE_DELAY);
        Ok(())
    }

    fn load_fonts(&mut self, sdk: &mut S) -> Result<(), SdkError> {
        for spec in &catalog::FONTS {
            self.add_font(sdk, spec.name, spec.filename, spec.size)?;
        }
        debug!("Loaded {} fonts", self.fonts.len());
        Ok(())
    }

    fn load_images(&mut self, sdk: &mut S) -> Result<(), SdkError> {
        for spec in &catalog::IMAGES {
            self.add_image(sdk, spec.name, spec.filename)?;
        }
        for (name, filename) in catalog::ship_images() {
            self.add_image(sdk, name, &filename)?;
        }
        debug!("Loaded {} images", self.images.len());
        Ok(())
    }

    fn load_sounds(&mut self, sdk: &mut S) -> Result<(), SdkError> {
        for spec in &catalog::SOUNDS {
            self.add_sound(sdk, spec.name, spec.filename)?;
        }
        debug!("Loaded {} sounds", self.sounds.len());
        Ok(())
    }

    fn load_music(&mut self, sdk: &mut S) -> Result<(), SdkError> {
        for spec in &catalog::MUSIC {
            self.add_music(sdk, spec.name, spec.filename)?;
        }
        debug!("Loaded {} music tracks", self.music.len());
        Ok(())
    }

    /// Load a font and register it under the given name.
    pub fn add_font(
        &mut self,
        sdk: &mut S,
        name: impl Into<String>,
        filename: &str,
        size: i32,
    ) -> Result<(), SdkError> {
        let path = sdk.resource_path(filename, ResourceKind::Font);
        let font = sdk.load_font(&path, size)?;
        self.fonts.insert(name.into(), font);
        Ok(())
    }

    /// Load an image and register it under the given name.
    pub fn add_image(
        &mut self,
        sdk: &mut S,
        name: impl Into<String>,
        filename: &str,
    ) -> Result<(), SdkError> {
        let path = sdk.resource_path(filename, ResourceKind::Image);
        let image = sdk.load_bitmap(&path)?;
        self.images.insert(name.into(), image);
        Ok(())
    }

    /// Load a sound effect and register it under the given name.
    pub fn add_sound(
        &mut self,
        sdk: &mut S,
        name: impl Into<String>,
        filename: &str,
    ) -> Result<(), SdkError> {
        let path = sdk.resource_path(filename, ResourceKind::Sound);
        let sound = sdk.load_sound(&path)?;
        self.sounds.insert(name.into(), sound);
        Ok(())
    }

    /// Load a music track and register it under the given name.
    pub fn add_music(
        &mut self,
        sdk: &mut S,
        name: impl Into<String>,
        filename: &str,
    ) -> Result<(), SdkError> {
        let path = sdk.resource_path(filename, ResourceKind::Music);
        let track = sdk.load_music(&path)?;
        self.music.insert(name.into(), track);
        Ok(())
    }

    /// Get a font loaded in the resources.
    ///
    /// Panics if no font was registered under this name.
    pub fn game_font(&self, name: &str) -> &S::Font {
        self.fonts
            .get(name)
            .unwrap_or_else(|| panic!("font '{}' is not loaded", name))
    }

    /// Get an image loaded in the resources.
    ///
    /// Panics if no image was registered under this name.
    pub fn game_image(&self, name: &str) -> &S::Bitmap {
        self.images
            .get(name)
            .unwrap_or_else(|| panic!("image '{}' is not loaded", name))
    }

    /// Get a sound effect loaded in the resources.
    ///
    /// Panics if no sound was registered under this name.
    pub fn game_sound(&self, name: &str) -> &S::Sound {
        self.sounds
            .get(name)
            .unwrap_or_else(|| panic!("sound '{}' is not loaded", name))
    }

    /// Get a music track loaded in the resources.
    ///
    /// Panics if no music was registered under this name.
    pub fn game_music(&self, name: &str) -> &S::Music {
        self.music
            .get(name)
            .unwrap_or_else(|| panic!("music '{}' is not loaded", name))
    }

    /// Get a font by name, or `None` if it was never registered.
    pub fn font(&self, name: &str) -> Option<&S::Font> {
        self.fonts.get(name)
    }

    /// Get an image by name, or `None` if it was never registered.
    pub fn image(&self, name: &str) -> Option<&S::Bitmap> {
        self.images.get(name)
    }

    /// Get a sound by name, or `None` if it was never registered.
    pub fn sound(&self, name: &str) -> Option<&S::Sound> {
        self.sounds.get(name)
    }

    /// Get a music track by name, or `None` if it was never registered.
    pub fn music(&self, name: &str) -> Option<&S::Music> {
        self.music.get(name)
    }

    /// Number of registered fonts.
    pub fn font_count(&self) -> usize {
        self.fonts.len()
    }

    /// Number of registered images.
    pub fn image_count(&self) -> usize {
        self.images.len()
    }

    /// Number of registered sounds.
    pub fn sound_count(&self) -> usize {
        self.sounds.len()
    }

    /// Number of registered music tracks.
    pub fn music_count(&self) -> usize {
        self.music.len()
    }

    /// Free every registered handle exactly once and empty the registry.
    ///
    /// The maps are drained as they are freed, so a second call finds them
    /// empty and does nothing. Lookups after this point fail as unregistered.
    pub fn free_resources(&mut self, sdk: &mut S) {
        for (_, font) in self.fonts.drain() {
            sdk.free_font(font);
        }
        for (_, image) in self.images.drain() {
            sdk.free_bitmap(image);
        }
        for (_, track) in self.music.drain() {
            sdk.free_music(track);
        }
        for (_, sound) in self.sounds.drain() {
            sdk.free_sound(sound);
        }
        sdk.process_events();
        info!("Resources freed");
    }
}
