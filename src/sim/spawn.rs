//! Procedural platform stream
//!
//! Early in a run planks are laid edge to edge. Past the jitter threshold small
//! seams appear, and past the gap threshold some spawns open a gap that has to
//! be jumped.

use glam::Vec2;
use rand::Rng;

use super::platform::{Platform, rightmost_edge};
use crate::config::GameConfig;

/// Horizontal distance between the current rightmost edge and the next plank
pub fn spawn_offset<R: Rng>(score: u64, rng: &mut R, config: &GameConfig) -> f32 {
    if score > config.gap_score_threshold && rng.random::<f32>() < config.gap_chance {
        return rng.random_range(config.gap_min..=config.gap_max) as f32;
    }
    if score > config.jitter_score_threshold {
        rng.random_range(0..config.jitter_max) as f32
    } else {
        0.0
    }
}

/// Append at most one platform if the stream is running short.
///
/// An empty stream is never refilled: once every plank has scrolled away the
/// run is lost. Returns the spawned platform.
pub fn spawn_platform<R: Rng>(
    platforms: &mut Vec<Platform>,
    score: u64,
    rng: &mut R,
    config: &GameConfig,
) -> Option<Platform> {
    if platforms.is_empty() {
        return None;
    }

    let rightmost = rightmost_edge(platforms);
    if rightmost >= config.width + config.spawn_margin {
        return None;
    }

    let x = rightmost + spawn_offset(score, rng, config);
    let platform = new_platform(x, config);
    platforms.push(platform);
    log::trace!("spawned platform at x={x} (score {score})");
    Some(platform)
}

/// A plank of the configured size at `x`
pub fn new_platform(x: f32, config: &GameConfig) -> Platform {
    Platform::new(
        Vec2::new(x, config.platform_y),
        Vec2::new(config.platform_width, config.platform_height),
    )
}

/// Contiguous planks from the left edge of the view
pub fn initial_platforms(config: &GameConfig) -> Vec<Platform> {
    (0..config.initial_platforms)
        .map(|i| new_platform(i as f32 * config.platform_width, config))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_initial_platforms_are_contiguous() {
        let config = GameConfig::default();
        let platforms = initial_platforms(&config);
        assert_eq!(platforms.len(), 10);
        for (i, pair) in platforms.windows(2).enumerate() {
            assert_eq!(pair[0].right(), pair[1].left(), "seam after plank {i}");
            assert_eq!(pair[0].top(), 460.0);
        }
        assert_eq!(rightmost_edge(&platforms), 1200.0);
    }

    #[test]
    fn test_no_spawn_while_stream_is_long_enough() {
        let config = GameConfig::default();
        let mut rng = Pcg32::seed_from_u64(1);
        let mut platforms = vec![new_platform(880.0, &config)]; // right edge 1000
        assert!(spawn_platform(&mut platforms, 5, &mut rng, &config).is_none());
        assert_eq!(platforms.len(), 1);
    }

    #[test]
    fn test_spawns_exactly_one_when_short() {
        let config = GameConfig::default();
        let mut rng = Pcg32::seed_from_u64(1);
        let mut platforms = vec![new_platform(0.0, &config)]; // far behind the window
        let spawned = spawn_platform(&mut platforms, 5, &mut rng, &config).unwrap();
        assert_eq!(platforms.len(), 2);
        assert_eq!(spawned.left(), 120.0);
    }

    #[test]
    fn test_empty_stream_is_not_refilled() {
        let config = GameConfig::default();
        let mut rng = Pcg32::seed_from_u64(1);
        let mut platforms = Vec::new();
        assert!(spawn_platform(&mut platforms, 500, &mut rng, &config).is_none());
        assert!(platforms.is_empty());
    }

    #[test]
    fn test_gap_chance_one_always_gaps() {
        let config = GameConfig {
            gap_chance: 1.0,
            ..GameConfig::default()
        };
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..200 {
            let offset = spawn_offset(151, &mut rng, &config);
            assert!((130.0..=220.0).contains(&offset));
        }
    }

    proptest! {
        #[test]
        fn no_seams_before_jitter_threshold(seed: u64, score in 0u64..=100) {
            let config = GameConfig::default();
            let mut rng = Pcg32::seed_from_u64(seed);
            prop_assert_eq!(spawn_offset(score, &mut rng, &config), 0.0);
        }

        #[test]
        fn only_small_seams_before_gap_threshold(seed: u64, score in 101u64..=150) {
            let config = GameConfig::default();
            let mut rng = Pcg32::seed_from_u64(seed);
            let offset = spawn_offset(score, &mut rng, &config);
            prop_assert!((0.0..16.0).contains(&offset));
            prop_assert_eq!(offset.fract(), 0.0);
        }

        #[test]
        fn seam_or_gap_after_gap_threshold(seed: u64, score in 151u64..100_000) {
            let config = GameConfig::default();
            let mut rng = Pcg32::seed_from_u64(seed);
            let offset = spawn_offset(score, &mut rng, &config);
            prop_assert!((0.0..16.0).contains(&offset) || (130.0..=220.0).contains(&offset));
            prop_assert_eq!(offset.fract(), 0.0);
        }

        #[test]
        fn spawning_never_moves_rightmost_edge_back(seed: u64, score: u64, xs in prop::collection::vec(-100.0f32..1100.0, 1..12)) {
            let config = GameConfig::default();
            let mut rng = Pcg32::seed_from_u64(seed);
            let mut platforms: Vec<Platform> = xs.into_iter().map(|x| new_platform(x, &config)).collect();
            let before = rightmost_edge(&platforms);
            spawn_platform(&mut platforms, score, &mut rng, &config);
            prop_assert!(rightmost_edge(&platforms) >= before);
        }
    }

    #[test]
    fn test_gap_frequency_roughly_a_quarter() {
        let config = GameConfig::default();
        let mut rng = Pcg32::seed_from_u64(42);
        let draws = 10_000;
        let gaps = (0..draws)
            .filter(|_| spawn_offset(1_000, &mut rng, &config) >= 130.0)
            .count();
        let ratio = gaps as f64 / draws as f64;
        assert!((0.22..0.28).contains(&ratio), "gap ratio {ratio}");
    }
}
