//! Modulation sources

/// Returns a triangle wave in range -1.0..1.0
pub fn triangle(tick: usize, tick_count: usize, periods: f32) -> f32 {
    let mut phase = tick as f32 / tick_count as f32 * periods;

    while phase > 1.0 {
        phase -= 1.0
    }

    if phase < 0.25 {
        phase * 4.0
    } else if phase < 0.5 {
        (0.5 - phase) * 4.0
    } else if phase < 0.75 {
        -(phase - 0.5) * 4.0
    } else {
        -(1.0 - phase) * 4.0
    }
}

/// Returns a ramp in range 0.0..1.0
pub fn ramp_up(tick: usize, tick_count: usize) -> f32 {
    tick as f32 / tick_count as f32
}
