//! Declarative load lists for the game's asset catalog.
//!
//! Every asset the game uses is named here, in const tables consumed by
//! [`GameResources::load_resources`](crate::resources::GameResources::load_resources).
//! The ship sprites are the one procedural family: both their registry names
//! and their filenames derive from a single orientation table crossed with
//! the hull index, so the two spellings cannot drift apart.

/// A font entry: registry name, filename, point size.
pub struct FontSpec {
    pub name: &'static str,
    pub filename: &'static str,
    pub size: i32,
}

/// An image entry: registry name, filename.
pub struct ImageSpec {
    pub name: &'static str,
    pub filename: &'static str,
}

/// A sound effect entry: registry name, filename.
pub struct SoundSpec {
    pub name: &'static str,
    pub filename: &'static str,
}

/// A music track entry: registry name, filename.
pub struct MusicSpec {
    pub name: &'static str,
    pub filename: &'static str,
}

pub const FONTS: [FontSpec; 4] = [
    FontSpec { name: "ArialLarge", filename: "arial.ttf", size: 80 },
    FontSpec { name: "Courier", filename: "cour.ttf", size: 14 },
    FontSpec { name: "CourierSmall", filename: "cour.ttf", size: 8 },
    FontSpec { name: "Menu", filename: "ffaccess.ttf", size: 12 },
];

/// Fixed images: screen backgrounds, deployment UI buttons, and effects.
/// The ship sprites are generated separately by [`ship_images`].
pub const IMAGES: [ImageSpec; 10] = [
    ImageSpec { name: "Menu", filename: "main_page.jpg" },
    ImageSpec { name: "Discovery", filename: "discover.jpg" },
    ImageSpec { name: "Deploy", filename: "deploy.jpg" },
    ImageSpec { name: "LeftRightButton", filename: "deploy_dir_button_horiz.png" },
    ImageSpec { name: "UpDownButton", filename: "deploy_dir_button_vert.png" },
    ImageSpec { name: "SelectedShip", filename: "deploy_button_hl.png" },
    ImageSpec { name: "PlayButton", filename: "deploy_play_button.png" },
    ImageSpec { name: "RandomButton", filename: "deploy_randomize_button.png" },
    ImageSpec { name: "Explosion", filename: "explosion.png" },
    ImageSpec { name: "Splash", filename: "splash.png" },
];

pub const SOUNDS: [SoundSpec; 7] = [
    SoundSpec { name: "Error", filename: "error.wav" },
    SoundSpec { name: "Hit", filename: "hit.wav" },
    SoundSpec { name: "Sink", filename: "sink.wav" },
    SoundSpec { name: "Siren", filename: "siren.wav" },
    SoundSpec { name: "Miss", filename: "watershot.wav" },
    SoundSpec { name: "Winner", filename: "winner.wav" },
    SoundSpec { name: "Lose", filename: "lose.wav" },
];

pub const MUSIC: [MusicSpec; 1] = [MusicSpec {
    name: "Background",
    filename: "horrordrone.mp3",
}];

/// Ship sprite orientation: the token used in the registry name and the
/// token used in the filename.
pub struct ShipOrientation {
    pub name_token: &'static str,
    pub file_token: &'static str,
}

pub const SHIP_ORIENTATIONS: [ShipOrientation; 2] = [
    ShipOrientation { name_token: "LR", file_token: "horiz" },
    ShipOrientation { name_token: "UD", file_token: "vert" },
];

/// Number of ship hulls per orientation, indexed 1..=SHIP_COUNT.
pub const SHIP_COUNT: u32 = 5;

/// Generate the (name, filename) pairs for every ship sprite:
/// `Ship<orientation><index>` mapped to `ship_deploy_<orientation>_<index>.png`.
pub fn ship_images() -> Vec<(String, String)> {
    let mut ships = Vec::with_capacity(SHIP_ORIENTATIONS.len() * SHIP_COUNT as usize);
    for index in 1..=SHIP_COUNT {
        for orientation in &SHIP_ORIENTATIONS {
            ships.push((
                format!("Ship{}{}", orientation.name_token, index),
                format!("ship_deploy_{}_{}.png", orientation.file_token, index),
            ));
        }
    }
    ships
}
