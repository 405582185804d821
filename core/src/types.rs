//! Shared primitive types used across the career engine.

/// A calendar season year (e.g. 2031).
pub type Year = u32;

/// Stable identifier for a general manager.
pub type GmId = String;

/// Stable identifier for a franchise.
pub type TeamId = String;

/// Position of an event in a career's event log. Starts at 1.
pub type Seq = u64;

/// Win percentage with ties counted as half a win. Zero games yields 0.0.
pub fn win_percentage(wins: u32, losses: u32, ties: u32) -> f64 {
    let games = wins + losses + ties;
    if games == 0 {
        return 0.0;
    }
    (wins as f64 + 0.5 * ties as f64) / games as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn win_percentage_counts_ties_as_half() {
        assert_eq!(win_percentage(0, 0, 0), 0.0);
        assert_eq!(win_percentage(8, 8, 0), 0.5);
        assert!((win_percentage(8, 7, 1) - 0.53125).abs() < 1e-12);
    }
}
