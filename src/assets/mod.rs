//! Game assets
//!
//! Every asset is optional. A failed fetch leaves it [`Asset::Absent`] and the
//! game falls back to solid colours or silence.

#[cfg(target_arch = "wasm32")]
pub mod web;

use std::fmt;

/// A resource that either loaded or did not
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Asset<T> {
    Loaded(T),
    Absent,
}

impl<T> Default for Asset<T> {
    fn default() -> Self {
        Asset::Absent
    }
}

impl<T> Asset<T> {
    /// Coerce a load result, logging the failure
    pub fn from_result(id: AssetId, result: Result<T, AssetError>) -> Self {
        match result {
            Ok(handle) => {
                log::debug!("Loaded {}", id.path());
                Asset::Loaded(handle)
            }
            Err(err) => {
                log::warn!("{err}; using fallback");
                Asset::Absent
            }
        }
    }

    pub fn get(&self) -> Option<&T> {
        match self {
            Asset::Loaded(handle) => Some(handle),
            Asset::Absent => None,
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, Asset::Loaded(_))
    }
}

/// Named resources the game knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetId {
    PlayerSprite,
    PlatformSprite,
    FireSprite,
    Background,
    GameOverImage,
    ScreamSound,
    BackgroundMusic,
}

impl AssetId {
    pub const IMAGES: [AssetId; 5] = [
        AssetId::PlayerSprite,
        AssetId::PlatformSprite,
        AssetId::FireSprite,
        AssetId::Background,
        AssetId::GameOverImage,
    ];

    pub const SOUNDS: [AssetId; 2] = [AssetId::ScreamSound, AssetId::BackgroundMusic];

    /// Path relative to the page
    pub fn path(&self) -> &'static str {
        match self {
            AssetId::PlayerSprite => "player.png",
            AssetId::PlatformSprite => "bridge.png",
            AssetId::FireSprite => "fire.png",
            AssetId::Background => "background.png",
            AssetId::GameOverImage => "amit.jpg",
            AssetId::ScreamSound => "Game over sound.mp3",
            AssetId::BackgroundMusic => "background_music.mp3",
        }
    }

    pub fn is_audio(&self) -> bool {
        Self::SOUNDS.contains(self)
    }
}

/// Why an asset could not be used
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetError {
    /// The host reported a load error for the resource
    LoadFailed { id: AssetId },
    /// The host could not even create an element for the resource
    Unsupported { id: AssetId, reason: String },
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LoadFailed { id } => write!(f, "failed to load {}", id.path()),
            Self::Unsupported { id, reason } => {
                write!(f, "cannot load {}: {}", id.path(), reason)
            }
        }
    }
}

impl std::error::Error for AssetError {}

/// Images used while drawing, keyed by role
#[derive(Debug, Clone)]
pub struct Sprites<I> {
    pub player: Asset<I>,
    pub platform: Asset<I>,
    pub fire: Asset<I>,
    pub background: Asset<I>,
    pub game_over: Asset<I>,
}

impl<I> Default for Sprites<I> {
    fn default() -> Self {
        Self {
            player: Asset::Absent,
            platform: Asset::Absent,
            fire: Asset::Absent,
            background: Asset::Absent,
            game_over: Asset::Absent,
        }
    }
}

impl<I> Sprites<I> {
    /// Slot for an image id; `None` for audio ids
    pub fn slot_mut(&mut self, id: AssetId) -> Option<&mut Asset<I>> {
        match id {
            AssetId::PlayerSprite => Some(&mut self.player),
            AssetId::PlatformSprite => Some(&mut self.platform),
            AssetId::FireSprite => Some(&mut self.fire),
            AssetId::Background => Some(&mut self.background),
            AssetId::GameOverImage => Some(&mut self.game_over),
            AssetId::ScreamSound | AssetId::BackgroundMusic => None,
        }
    }

    /// Number of images that loaded
    pub fn loaded_count(&self) -> usize {
        [
            &self.player,
            &self.platform,
            &self.fire,
            &self.background,
            &self.game_over,
        ]
        .iter()
        .filter(|a| a.is_loaded())
        .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_load_is_absent() {
        let asset: Asset<u32> = Asset::from_result(
            AssetId::FireSprite,
            Err(AssetError::LoadFailed {
                id: AssetId::FireSprite,
            }),
        );
        assert_eq!(asset, Asset::Absent);
        assert!(asset.get().is_none());
    }

    #[test]
    fn test_loaded_asset() {
        let asset = Asset::from_result(AssetId::Background, Ok(7u32));
        assert!(asset.is_loaded());
        assert_eq!(asset.get(), Some(&7));
    }

    #[test]
    fn test_slots_cover_every_image() {
        let mut sprites: Sprites<u8> = Sprites::default();
        for id in AssetId::IMAGES {
            *sprites.slot_mut(id).unwrap() = Asset::Loaded(1);
        }
        assert_eq!(sprites.loaded_count(), 5);
        for id in AssetId::SOUNDS {
            assert!(sprites.slot_mut(id).is_none());
            assert!(id.is_audio());
        }
    }

    #[test]
    fn test_error_message_names_file() {
        let err = AssetError::LoadFailed {
            id: AssetId::ScreamSound,
        };
        assert_eq!(err.to_string(), "failed to load Game over sound.mp3");
    }
}
