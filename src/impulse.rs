//! Caller-side policy for choosing which node to push each step.

use rand::Rng;

/// Push one node for a fixed number of consecutive steps, then pick a new
/// node at random.
///
/// The schedule only decides targets; feeding them to
/// [`Simulation::push`](crate::Simulation::push) or
/// [`Simulation::trigger_impulse`](crate::Simulation::trigger_impulse) is
/// up to the host loop.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PushSchedule {
    duration: usize,
    remaining: usize,
    target: usize,
}

impl PushSchedule {
    /// Start pushing `target` for `duration` steps (at least one).
    pub fn new(target: usize, duration: usize) -> Self {
        let duration = duration.max(1);
        PushSchedule { duration, remaining: duration, target }
    }

    pub fn target(&self) -> usize { self.target }
    pub fn remaining(&self) -> usize { self.remaining }
    pub fn duration(&self) -> usize { self.duration }

    /// The node to push this step, or `None` for an empty mesh.
    ///
    /// Once the current target has been returned `duration` times, a new
    /// one is drawn uniformly from `0..node_count`.
    pub fn advance<R: Rng + ?Sized>(&mut self, rng: &mut R, node_count: usize) -> Option<usize> {
        if node_count == 0 {
            return None;
        }
        if self.remaining == 0 || self.target >= node_count {
            self.retarget(rng, node_count);
        }
        self.remaining -= 1;
        Some(self.target)
    }

    /// Drop the current target and start a fresh push on a random node.
    pub fn retarget<R: Rng + ?Sized>(&mut self, rng: &mut R, node_count: usize) {
        if node_count > 0 {
            self.target = rng.random_range(0..node_count);
        }
        self.remaining = self.duration;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn holds_target_for_duration() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut schedule = PushSchedule::new(3, 4);
        for _ in 0..4 {
            assert_eq!(schedule.advance(&mut rng, 100), Some(3));
        }
        assert_eq!(schedule.remaining(), 0);
    }

    #[test]
    fn retargets_within_bounds() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut schedule = PushSchedule::new(0, 2);
        for _ in 0..200 {
            let target = schedule.advance(&mut rng, 5).unwrap();
            assert!(target < 5);
        }
    }

    #[test]
    fn empty_mesh_has_no_target() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut schedule = PushSchedule::new(0, 2);
        assert_eq!(schedule.advance(&mut rng, 0), None);
    }

    #[test]
    fn zero_duration_is_clamped() {
        assert_eq!(PushSchedule::new(0, 0).duration(), 1);
    }
}
