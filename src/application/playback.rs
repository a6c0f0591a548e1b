use crate::domain::LifeModel;

/// Playback drives the simulation clock.
///
/// The model itself never reschedules anything; this driver accumulates
/// real frame time and invokes `step()` once the model's tick interval has
/// elapsed, and only while the model reports running. Tests can bypass it
/// entirely and call `step()` synchronously.
pub struct Playback {
    accumulator: f32,
}

impl Playback {
    pub fn new() -> Self {
        Self { accumulator: 0.0 }
    }

    /// Feed one frame's elapsed time.
    ///
    /// Returns `Some(changed_indices)` when a generation ran this frame,
    /// `None` otherwise. While the model is paused the accumulator is held
    /// at zero so resuming does not fire a burst of catch-up steps.
    pub fn advance(&mut self, model: &mut LifeModel, delta_seconds: f32) -> Option<Vec<usize>> {
        if !model.is_running() {
            self.accumulator = 0.0;
            return None;
        }

        self.accumulator += delta_seconds;
        let interval = model.tick_interval_ms() as f32 / 1000.0;
        if self.accumulator < interval {
            return None;
        }

        self.accumulator = 0.0;
        Some(model.step())
    }
}

impl Default for Playback {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_steps_while_paused() {
        let mut model = LifeModel::new(3, 3, 100);
        model.set_cell(4, true);
        let mut playback = Playback::new();

        assert!(playback.advance(&mut model, 10.0).is_none());
        assert!(model.cell_alive(4));
    }

    #[test]
    fn test_steps_once_interval_elapses() {
        let mut model = LifeModel::new(3, 3, 100);
        model.set_cell(4, true);
        model.resume();
        let mut playback = Playback::new();

        assert!(playback.advance(&mut model, 0.05).is_none());
        let changed = playback.advance(&mut model, 0.06);
        assert_eq!(changed, Some(vec![4]));
        assert!(!model.cell_alive(4));
    }

    #[test]
    fn test_pause_resets_accumulator() {
        let mut model = LifeModel::new(3, 3, 100);
        model.resume();
        let mut playback = Playback::new();

        assert!(playback.advance(&mut model, 0.09).is_none());
        model.pause();
        assert!(playback.advance(&mut model, 0.09).is_none());

        // after resume the banked 0.09s must be gone
        model.resume();
        assert!(playback.advance(&mut model, 0.05).is_none());
    }
}
