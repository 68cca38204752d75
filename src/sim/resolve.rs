//! Collision resolution
//!
//! Runs after integration. Ship contact ends the run; bullet hits are
//! gathered first and applied afterwards, so removals never disturb the
//! scan and no asteroid takes more than one hit per frame.

use super::collision::{bullet_hits_asteroid, first_ship_hit};
use super::random::UniformSource;
use super::state::GameState;

/// Bullet hits found in one frame. Only [`find_hits`] builds one.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct HitReport {
    /// Indices of hit asteroids, highest first
    asteroids: Vec<usize>,
    /// Indices of bullets consumed by those hits
    bullets: Vec<usize>,
}

impl HitReport {
    pub fn is_empty(&self) -> bool {
        self.asteroids.is_empty()
    }

    pub fn asteroids(&self) -> &[usize] {
        &self.asteroids
    }

    pub fn bullets(&self) -> &[usize] {
        &self.bullets
    }
}

/// End the run if any asteroid touches the ship. Returns true on the frame
/// the ship is destroyed.
pub fn resolve_ship(state: &mut GameState) -> bool {
    if state.game_over {
        return false;
    }
    let Some(index) = first_ship_hit(&state.ship, &state.asteroids) else {
        return false;
    };
    let rock = &state.asteroids[index];
    log::info!(
        "Ship destroyed by asteroid {} at ({:.2}, {:.2}) after {:.1}s",
        rock.id,
        rock.pos.x,
        rock.pos.y,
        state.elapsed
    );
    state.end_game()
}

/// Pair asteroids with bullets without mutating anything.
///
/// Asteroids are scanned back to front; each takes the first bullet that
/// touches it and has not already been claimed.
pub fn find_hits(state: &GameState) -> HitReport {
    let mut claimed = vec![false; state.bullets.len()];
    let mut report = HitReport::default();

    for (index, asteroid) in state.asteroids.iter().enumerate().rev() {
        let hit = state
            .bullets
            .iter()
            .enumerate()
            .find(|(b, bullet)| !claimed[*b] && bullet_hits_asteroid(bullet, asteroid));
        if let Some((b, _)) = hit {
            claimed[b] = true;
            report.asteroids.push(index);
            report.bullets.push(b);
        }
    }
    report
}

/// Apply a hit report: drop the spent bullets, then split or destroy each
/// hit asteroid. Returns the total number of fragments spawned.
pub fn apply_hits<R: UniformSource + ?Sized>(
    state: &mut GameState,
    report: &HitReport,
    rng: &mut R,
) -> usize {
    if report.is_empty() {
        return 0;
    }

    let mut spent = vec![false; state.bullets.len()];
    for &b in &report.bullets {
        if let Some(flag) = spent.get_mut(b) {
            *flag = true;
        } else {
            log::warn!("Hit report names missing bullet {}", b);
        }
    }
    let mut flags = spent.into_iter();
    state.bullets.retain(|_| !flags.next().unwrap_or(false));

    // Descending indices: removing one never shifts a later entry in the
    // report, and fragments land past every index still to be processed.
    let mut hits = report.asteroids.clone();
    hits.sort_unstable_by(|a, b| b.cmp(a));
    hits.dedup();

    let mut fragments = 0;
    for index in hits {
        fragments += state.destroy_asteroid(index, rng).unwrap_or(0);
    }
    fragments
}

/// Full bullet-asteroid pass for one frame
pub fn resolve_bullets<R: UniformSource + ?Sized>(state: &mut GameState, rng: &mut R) -> HitReport {
    let report = find_hits(state);
    apply_hits(state, &report, rng);
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{AsteroidSize, Bullet};
    use glam::Vec2;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn bullet_at(pos: Vec2) -> Bullet {
        Bullet {
            pos,
            vel: Vec2::ZERO,
            scale: 0.01,
            radius: 0.01,
            lifetime: 1.0,
        }
    }

    #[test]
    fn test_ship_contact_ends_game_once() {
        let mut state = GameState::default();
        let mut rng = Pcg32::seed_from_u64(1);
        state.spawn_asteroid(AsteroidSize::Small, Vec2::new(0.05, 0.0), Vec2::ZERO, &mut rng);
        state.spawn_asteroid(AsteroidSize::Small, Vec2::new(-0.05, 0.0), Vec2::ZERO, &mut rng);

        assert!(resolve_ship(&mut state));
        assert!(state.game_over);
        assert!(!resolve_ship(&mut state));
        // The ship stays in the store
        assert_eq!(state.ship.pos, Vec2::ZERO);
    }

    #[test]
    fn test_one_bullet_one_asteroid() {
        let mut state = GameState::default();
        let mut rng = Pcg32::seed_from_u64(2);
        // Two overlapping asteroids, one bullet inside both
        state.spawn_asteroid(AsteroidSize::Small, Vec2::new(0.5, 0.5), Vec2::ZERO, &mut rng);
        state.spawn_asteroid(AsteroidSize::Small, Vec2::new(0.51, 0.5), Vec2::ZERO, &mut rng);
        state.bullets.push(bullet_at(Vec2::new(0.505, 0.5)));

        let report = find_hits(&state);
        // Back-to-front scan: the newer asteroid claims the bullet
        assert_eq!(report.asteroids, vec![1]);
        assert_eq!(report.bullets, vec![0]);

        apply_hits(&mut state, &report, &mut rng);
        assert!(state.bullets.is_empty());
        assert_eq!(state.asteroid_count(), 1);
        assert_eq!(state.asteroids[0].pos, Vec2::new(0.5, 0.5));
    }

    #[test]
    fn test_one_hit_per_asteroid() {
        let mut state = GameState::default();
        let mut rng = Pcg32::seed_from_u64(3);
        state.spawn_asteroid(AsteroidSize::Small, Vec2::new(-0.5, 0.5), Vec2::ZERO, &mut rng);
        state.bullets.push(bullet_at(Vec2::new(-0.5, 0.5)));
        state.bullets.push(bullet_at(Vec2::new(-0.49, 0.5)));

        let report = resolve_bullets(&mut state, &mut rng);
        assert_eq!(report.bullets, vec![0]);
        // Second bullet survives
        assert_eq!(state.bullets.len(), 1);
        assert_eq!(state.bullets[0].pos, Vec2::new(-0.49, 0.5));
        assert_eq!(state.asteroid_count(), 0);
    }

    #[test]
    fn test_multiple_hits_same_frame() {
        let mut state = GameState::default();
        let mut rng = Pcg32::seed_from_u64(4);
        state.spawn_asteroid(AsteroidSize::Medium, Vec2::new(-0.6, 0.0), Vec2::ZERO, &mut rng);
        state.spawn_asteroid(AsteroidSize::Small, Vec2::new(0.0, 0.6), Vec2::ZERO, &mut rng);
        state.spawn_asteroid(AsteroidSize::Large, Vec2::new(0.6, 0.0), Vec2::ZERO, &mut rng);
        state.bullets.push(bullet_at(Vec2::new(0.6, 0.0)));
        state.bullets.push(bullet_at(Vec2::new(-0.6, 0.0)));
        state.bullets.push(bullet_at(Vec2::new(0.0, 0.6)));

        let report = resolve_bullets(&mut state, &mut rng);
        assert_eq!(report.asteroids, vec![2, 1, 0]);
        assert!(state.bullets.is_empty());

        // large -> 2 medium, small -> gone, medium -> 2 small
        let medium = state
            .asteroids
            .iter()
            .filter(|a| a.size == AsteroidSize::Medium)
            .count();
        let small = state
            .asteroids
            .iter()
            .filter(|a| a.size == AsteroidSize::Small)
            .count();
        assert_eq!((medium, small), (2, 2));
    }

    #[test]
    fn test_stale_report_is_harmless() {
        let mut state = GameState::default();
        let mut rng = Pcg32::seed_from_u64(6);
        state.spawn_asteroid(AsteroidSize::Small, Vec2::new(0.5, 0.0), Vec2::ZERO, &mut rng);
        state.spawn_asteroid(AsteroidSize::Small, Vec2::new(-0.5, 0.0), Vec2::ZERO, &mut rng);
        state.bullets.push(bullet_at(Vec2::ZERO));

        // Out-of-range bullet and asteroid, duplicates, ascending order
        let report = HitReport {
            asteroids: vec![0, 0, 1, 9],
            bullets: vec![3, 0],
        };
        apply_hits(&mut state, &report, &mut rng);

        assert!(state.bullets.is_empty());
        assert_eq!(state.asteroid_count(), 0);
    }

    #[test]
    fn test_ascending_report_destroys_named_rocks() {
        let mut state = GameState::default();
        let mut rng = Pcg32::seed_from_u64(7);
        for x in [-0.6, 0.0, 0.6] {
            state.spawn_asteroid(AsteroidSize::Small, Vec2::new(x, 0.0), Vec2::ZERO, &mut rng);
        }
        let report = HitReport {
            asteroids: vec![0, 1],
            bullets: vec![],
        };
        apply_hits(&mut state, &report, &mut rng);

        assert_eq!(state.asteroid_count(), 1);
        assert_eq!(state.asteroids[0].pos, Vec2::new(0.6, 0.0));
    }

    #[test]
    fn test_no_bullets_no_changes() {
        let mut state = GameState::default();
        let mut rng = Pcg32::seed_from_u64(5);
        state.spawn_asteroid(AsteroidSize::Large, Vec2::ZERO, Vec2::ZERO, &mut rng);
        let report = resolve_bullets(&mut state, &mut rng);
        assert!(report.is_empty());
        assert_eq!(state.asteroid_count(), 1);
    }
}
