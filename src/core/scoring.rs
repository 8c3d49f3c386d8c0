//! Scoring module - party scoring rules
//!
//! Points scale with the number of lines removed by one lock and with the
//! current level. The level rises every ten total lines and each level
//! shaves 100ms off the gravity interval down to a 100ms floor.

use crate::types::{
    BASE_FALL_MS, FALL_SPEEDUP_PER_LEVEL_MS, LINES_PER_LEVEL, LINE_POINTS, MIN_FALL_MS,
};

/// Points for clearing `lines` rows with one lock at the given level
/// lines: 1-4 (0 or out of range scores nothing)
pub fn line_clear_points(lines: u32, level: u32) -> u32 {
    if lines == 0 || lines > 4 {
        return 0;
    }
    LINE_POINTS[lines as usize].saturating_mul(level)
}

/// Level for a total line count: starts at 1, +1 every ten lines
pub fn level_for_lines(total_lines: u32) -> u32 {
    total_lines / LINES_PER_LEVEL + 1
}

/// Gravity interval for a level (milliseconds), floored at [`MIN_FALL_MS`]
pub fn fall_interval_ms(level: u32) -> u32 {
    let speedup = level
        .saturating_sub(1)
        .saturating_mul(FALL_SPEEDUP_PER_LEVEL_MS);
    BASE_FALL_MS.saturating_sub(speedup).max(MIN_FALL_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_clear_points_at_level_one() {
        assert_eq!(line_clear_points(1, 1), 100);
        assert_eq!(line_clear_points(2, 1), 300);
        assert_eq!(line_clear_points(3, 1), 500);
        assert_eq!(line_clear_points(4, 1), 800);
    }

    #[test]
    fn test_line_clear_points_scale_with_level() {
        // A quad scores 800 at level 1 and 2400 at level 3.
        assert_eq!(line_clear_points(4, 1), 800);
        assert_eq!(line_clear_points(4, 3), 2400);
        assert_eq!(line_clear_points(1, 5), 500);
    }

    #[test]
    fn test_no_points_outside_clear_range() {
        assert_eq!(line_clear_points(0, 3), 0);
        assert_eq!(line_clear_points(5, 3), 0);
    }

    #[test]
    fn test_level_curve() {
        assert_eq!(level_for_lines(0), 1);
        assert_eq!(level_for_lines(9), 1);
        assert_eq!(level_for_lines(10), 2);
        assert_eq!(level_for_lines(29), 3);
        assert_eq!(level_for_lines(30), 4);
        assert_eq!(level_for_lines(100), 11);
    }

    #[test]
    fn test_fall_intervals() {
        assert_eq!(fall_interval_ms(1), 1000);
        assert_eq!(fall_interval_ms(2), 900);
        assert_eq!(fall_interval_ms(4), 700);
        assert_eq!(fall_interval_ms(10), 100);
    }

    #[test]
    fn test_fall_interval_floor() {
        assert_eq!(fall_interval_ms(11), 100);
        assert_eq!(fall_interval_ms(50), 100);
        assert_eq!(fall_interval_ms(u32::MAX), 100);
    }
}
