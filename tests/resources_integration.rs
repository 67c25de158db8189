//! Resource registry integration tests.
//!
//! These drive the full load/lookup/free lifecycle through a stub SDK that
//! hands out sequential handles and records every call, so the tests can
//! assert on load/free pairing, progress-message order, and screen-size
//! bookkeeping without a window, asset files, or wall-clock delays.

use std::path::{Path, PathBuf};
use std::time::Duration;

use raylib::prelude::{Color, Rectangle};

use battleships::catalog;
use battleships::error::SdkError;
use battleships::resources::GameResources;
use battleships::sdk::{FontAlignment, GameSdk, ResourceKind};

#[derive(Clone, Debug, PartialEq)]
enum Call {
    ChangeScreenSize {
        width: i32,
        height: i32,
    },
    Load {
        kind: ResourceKind,
        path: PathBuf,
        handle: u32,
    },
    Free {
        kind: ResourceKind,
        handle: u32,
    },
    PlaySound {
        handle: u32,
    },
    DrawBitmap {
        handle: u32,
    },
    DrawBitmapSection {
        handle: u32,
        fill_width: f32,
    },
    DrawText {
        text: String,
    },
    ClearScreen,
    RefreshScreen,
    ProcessEvents,
    Delay {
        millis: u64,
    },
}

/// Stub SDK: sequential u32 handles, every call recorded in order.
#[derive(Default)]
struct StubSdk {
    calls: Vec<Call>,
    next_handle: u32,
    /// Fail any load whose path contains this fragment.
    fail_on: Option<&'static str>,
}

impl StubSdk {
    fn new() -> Self {
        Self::default()
    }

    fn failing_on(fragment: &'static str) -> Self {
        Self {
            fail_on: Some(fragment),
            ..Self::default()
        }
    }

    fn load(&mut self, kind: ResourceKind, path: &Path) -> Result<u32, SdkError> {
        if let Some(fragment) = self.fail_on {
            if path.to_string_lossy().contains(fragment) {
                return Err(SdkError::load(kind, path, "stub load failure"));
            }
        }
        self.next_handle += 1;
        let handle = self.next_handle;
        self.calls.push(Call::Load {
            kind,
            path: path.to_path_buf(),
            handle,
        });
        Ok(handle)
    }

    /// Handles issued for loads of the given filename, in call order.
    fn handles_for(&self, filename: &str) -> Vec<u32> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                Call::Load { path, handle, .. }
                    if path.file_name() == Some(std::ffi::OsStr::new(filename)) =>
                {
                    Some(*handle)
                }
                _ => None,
            })
            .collect()
    }

    /// The single handle issued for the given filename.
    fn handle_for(&self, filename: &str) -> u32 {
        let handles = self.handles_for(filename);
        assert_eq!(handles.len(), 1, "expected one load of '{}'", filename);
        handles[0]
    }

    fn loaded_handles(&self) -> Vec<u32> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                Call::Load { handle, .. } => Some(*handle),
                _ => None,
            })
            .collect()
    }

    fn freed_handles(&self) -> Vec<u32> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                Call::Free { handle, .. } => Some(*handle),
                _ => None,
            })
            .collect()
    }

    fn messages(&self) -> Vec<String> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                Call::DrawText { text } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    fn fill_widths(&self) -> Vec<f32> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                Call::DrawBitmapSection { fill_width, .. } => Some(*fill_width),
                _ => None,
            })
            .collect()
    }
}

impl GameSdk for StubSdk {
    type Font = u32;
    type Bitmap = u32;
    type Sound = u32;
    type Music = u32;

    fn screen_size(&self) -> (i32, i32) {
        (1024, 768)
    }

    fn change_screen_size(&mut self, width: i32, height: i32) -> Result<(), SdkError> {
        self.calls.push(Call::ChangeScreenSize { width, height });
        Ok(())
    }

    fn clear_screen(&mut self) {
        self.calls.push(Call::ClearScreen);
    }

    fn refresh_screen(&mut self) {
        self.calls.push(Call::RefreshScreen);
    }

    fn process_events(&mut self) {
        self.calls.push(Call::ProcessEvents);
    }

    fn window_should_close(&self) -> bool {
        false
    }

    fn delay(&mut self, duration: Duration) {
        self.calls.push(Call::Delay {
            millis: duration.as_millis() as u64,
        });
    }

    fn resource_path(&self, filename: &str, kind: ResourceKind) -> PathBuf {
        let subdir = match kind {
            ResourceKind::Font => "fonts",
            ResourceKind::Image => "images",
            ResourceKind::Sound | ResourceKind::Music => "sounds",
        };
        PathBuf::from(subdir).join(filename)
    }

    fn load_font(&mut self, path: &Path, _size: i32) -> Result<u32, SdkError> {
        self.load(ResourceKind::Font, path)
    }

    fn load_bitmap(&mut self, path: &Path) -> Result<u32, SdkError> {
        self.load(ResourceKind::Image, path)
    }

    fn load_sound(&mut self, path: &Path) -> Result<u32, SdkError> {
        self.load(ResourceKind::Sound, path)
    }

    fn load_music(&mut self, path: &Path) -> Result<u32, SdkError> {
        self.load(ResourceKind::Music, path)
    }

    fn free_font(&mut self, font: u32) {
        self.calls.push(Call::Free {
            kind: ResourceKind::Font,
            handle: font,
        });
    }

    fn free_bitmap(&mut self, bitmap: u32) {
        self.calls.push(Call::Free {
            kind: ResourceKind::Image,
            handle: bitmap,
        });
    }

    fn free_sound(&mut self, sound: u32) {
        self.calls.push(Call::Free {
            kind: ResourceKind::Sound,
            handle: sound,
        });
    }

    fn free_music(&mut self, music: u32) {
        self.calls.push(Call::Free {
            kind: ResourceKind::Music,
            handle: music,
        });
    }

    fn play_sound(&mut self, sound: &u32) {
        self.calls.push(Call::PlaySound { handle: *sound });
    }

    fn draw_bitmap(&mut self, bitmap: &u32, _x: f32, _y: f32) {
        self.calls.push(Call::DrawBitmap { handle: *bitmap });
    }

    fn draw_bitmap_section(&mut self, bitmap: &u32, section: Rectangle, _x: f32, _y: f32) {
        self.calls.push(Call::DrawBitmapSection {
            handle: *bitmap,
            fill_width: section.width,
        });
    }

    fn draw_text_lines(
        &mut self,
        text: &str,
        _color: Color,
        _font: &u32,
        _alignment: FontAlignment,
        _bounds: Rectangle,
    ) {
        self.calls.push(Call::DrawText {
            text: text.to_string(),
        });
    }
}

fn loaded_registry() -> (StubSdk, GameResources<StubSdk>) {
    let mut sdk = StubSdk::new();
    let mut resources = GameResources::new();
    resources
        .load_resources(&mut sdk)
        .expect("load_resources failed against the stub");
    (sdk, resources)
}

#[test]
fn load_populates_every_catalog_entry() {
    let (_, resources) = loaded_registry();
    assert_eq!(resources.font_count(), 4);
    assert_eq!(resources.image_count(), 20); // 10 fixed + 10 ship sprites
    assert_eq!(resources.sound_count(), 7);
    assert_eq!(resources.music_count(), 1);
}

#[test]
fn lookups_return_the_loaded_handles() {
    let (sdk, resources) = loaded_registry();

    // arial.ttf is loaded twice: first for the loading screen, then as the
    // ArialLarge title font. cour.ttf backs both Courier sizes.
    let arial = sdk.handles_for("arial.ttf");
    assert_eq!(arial.len(), 2);
    assert_eq!(*resources.game_font("ArialLarge"), arial[1]);

    let cour = sdk.handles_for("cour.ttf");
    assert_eq!(cour.len(), 2);
    assert_eq!(*resources.game_font("Courier"), cour[0]);
    assert_eq!(*resources.game_font("CourierSmall"), cour[1]);

    assert_eq!(*resources.game_font("Menu"), sdk.handle_for("ffaccess.ttf"));

    for spec in &catalog::IMAGES {
        assert_eq!(*resources.game_image(spec.name), sdk.handle_for(spec.filename));
    }
    for spec in &catalog::SOUNDS {
        assert_eq!(*resources.game_sound(spec.name), sdk.handle_for(spec.filename));
    }
    assert_eq!(
        *resources.game_music("Background"),
        sdk.handle_for("horrordrone.mp3")
    );
}

#[test]
fn ship_sprites_are_registered_for_both_orientations() {
    let (sdk, resources) = loaded_registry();
    for index in 1..=5 {
        for (name_token, file_token) in [("LR", "horiz"), ("UD", "vert")] {
            let name = format!("Ship{}{}", name_token, index);
            let filename = format!("ship_deploy_{}_{}.png", file_token, index);
            assert_eq!(*resources.game_image(&name), sdk.handle_for(&filename));
        }
    }
}

#[test]
#[should_panic(expected = "font 'Nonexistent' is not loaded")]
fn unknown_font_lookup_panics() {
    let resources: GameResources<StubSdk> = GameResources::new();
    resources.game_font("Nonexistent");
}

#[test]
#[should_panic(expected = "image 'NoSuchImage' is not loaded")]
fn unknown_image_lookup_panics() {
    let (_, resources) = loaded_registry();
    resources.game_image("NoSuchImage");
}

#[test]
fn optional_lookups_return_none_for_unknown_names() {
    let (_, resources) = loaded_registry();
    assert!(resources.font("nope").is_none());
    assert!(resources.image("nope").is_none());
    assert!(resources.sound("nope").is_none());
    assert!(resources.music("nope").is_none());
    assert!(resources.font("Menu").is_some());
}

#[test]
fn free_resources_frees_each_registered_handle_once() {
    let mut sdk = StubSdk::new();
    let mut resources: GameResources<StubSdk> = GameResources::new();

    resources.add_font(&mut sdk, "A", "a.ttf", 12).unwrap();
    resources.add_font(&mut sdk, "B", "b.ttf", 14).unwrap();
    resources.add_font(&mut sdk, "C", "c.ttf", 16).unwrap();
    resources.add_image(&mut sdk, "One", "one.png").unwrap();
    resources.add_image(&mut sdk, "Two", "two.png").unwrap();
    resources.add_sound(&mut sdk, "Ping", "ping.wav").unwrap();
    resources.add_music(&mut sdk, "Theme", "theme.mp3").unwrap();

    resources.free_resources(&mut sdk);

    let mut loaded = sdk.loaded_handles();
    let mut freed = sdk.freed_handles();
    assert_eq!(freed.len(), 7);
    loaded.sort();
    freed.sort();
    assert_eq!(loaded, freed);
}

#[test]
fn second_free_resources_is_a_no_op() {
    let (mut sdk, mut resources) = loaded_registry();
    resources.free_resources(&mut sdk);
    let frees_after_first = sdk.freed_handles().len();

    resources.free_resources(&mut sdk);
    assert_eq!(sdk.freed_handles().len(), frees_after_first);
    assert_eq!(resources.font_count(), 0);
    assert_eq!(resources.image_count(), 0);
}

#[test]
fn progress_messages_appear_in_phase_order() {
    let (sdk, _) = loaded_registry();
    assert_eq!(
        sdk.messages(),
        vec![
            "Loading fonts...",
            "Loading images...",
            "Loading sounds...",
            "Loading music...",
            "Game loaded...",
        ]
    );
}

#[test]
fn progress_bar_fill_tracks_steps_zero_through_three_then_five() {
    let (sdk, _) = loaded_registry();
    // 260 * step / 5 for steps 0, 1, 2, 3, 5. Step 4 is skipped, so a
    // width of 208 never appears.
    assert_eq!(sdk.fill_widths(), vec![0.0, 52.0, 104.0, 156.0, 260.0]);
}

#[test]
fn every_load_precedes_its_free_and_is_freed_exactly_once() {
    let (mut sdk, mut resources) = loaded_registry();
    resources.free_resources(&mut sdk);

    let mut load_positions = Vec::new();
    for (position, call) in sdk.calls.iter().enumerate() {
        if let Call::Load { handle, .. } = call {
            load_positions.push((*handle, position));
        }
    }
    // 6 splash + 4 fonts + 20 images + 7 sounds + 1 music
    assert_eq!(load_positions.len(), 38);

    for (handle, load_position) in load_positions {
        let free_positions: Vec<usize> = sdk
            .calls
            .iter()
            .enumerate()
            .filter_map(|(position, call)| match call {
                Call::Free { handle: freed, .. } if *freed == handle => Some(position),
                _ => None,
            })
            .collect();
        assert_eq!(free_positions.len(), 1, "handle {} freed once", handle);
        assert!(free_positions[0] > load_position);
    }
}

#[test]
fn splash_resources_are_all_freed_before_load_returns() {
    let (sdk, _) = loaded_registry();

    let splash_files = [
        "SplashBack.png",
        "SwinGameAni.jpg",
        "SwinGameStart.ogg",
        "loader_full.png",
        "loader_empty.png",
    ];
    let mut splash_handles: Vec<u32> =
        splash_files.iter().map(|file| sdk.handle_for(file)).collect();
    // The loading font is the first arial.ttf load.
    splash_handles.push(sdk.handles_for("arial.ttf")[0]);

    let mut freed = sdk.freed_handles();
    splash_handles.sort();
    freed.sort();
    assert_eq!(freed, splash_handles);
}

#[test]
fn failed_splash_load_releases_already_acquired_handles() {
    let mut sdk = StubSdk::failing_on("loader_empty.png");
    let mut resources: GameResources<StubSdk> = GameResources::new();

    assert!(resources.load_resources(&mut sdk).is_err());

    // Background, animation, font, start sound, and loader_full were
    // acquired before the failure; all of them must be handed back.
    let mut loaded = sdk.loaded_handles();
    let mut freed = sdk.freed_handles();
    assert_eq!(loaded.len(), 5);
    loaded.sort();
    freed.sort();
    assert_eq!(loaded, freed);
}

#[test]
fn failed_catalog_load_still_releases_the_splash() {
    let mut sdk = StubSdk::failing_on("deploy.jpg");
    let mut resources: GameResources<StubSdk> = GameResources::new();

    assert!(resources.load_resources(&mut sdk).is_err());

    // Only the six splash resources are freed; whatever catalog entries
    // loaded before the failure stay in the abandoned registry.
    assert_eq!(sdk.freed_handles().len(), 6);
}

#[test]
fn screen_size_is_restored_to_the_preloading_snapshot() {
    let (sdk, _) = loaded_registry();

    let resizes: Vec<(i32, i32)> = sdk
        .calls
        .iter()
        .filter_map(|call| match call {
            Call::ChangeScreenSize { width, height } => Some((*width, *height)),
            _ => None,
        })
        .collect();
    assert_eq!(resizes, vec![(800, 600), (1024, 768)]);
}
