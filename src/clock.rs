/// Decides on which frames the game should tick, given the current speed.
///
/// Times are in seconds, as returned by `macroquad::time::get_time`.
#[derive(Debug, Clone, Copy)]
pub struct TickClock {
    last_tick: f64,
}

impl TickClock {
    pub fn new(now: f64) -> Self {
        Self { last_tick: now }
    }

    pub fn due(&mut self, now: f64, speed: u32) -> bool {
        let interval = 1.0 / f64::from(speed.max(1));
        if now - self.last_tick < interval {
            return false;
        }
        self.last_tick += interval;
        // After a stall, resume from now instead of replaying the missed ticks.
        if now - self.last_tick >= interval {
            self.last_tick = now;
        }
        true
    }
}
