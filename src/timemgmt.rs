/// Limits for one `go` command, all optional; zero means "no limit".
#[derive(Clone, Copy, Default, Debug)]
pub struct SearchLimits {
    /// Remaining clock time for the side to move, in milliseconds.
    pub time: i64,
    /// Increment per move, in milliseconds.
    pub increment: i64,
    /// Fixed time for this move, in milliseconds.
    pub movetime: i64,
    /// Moves until the next time control.
    pub movestogo: i64,
    /// Maximum search depth, in plies.
    pub depth: i32,
    /// Node budget.
    pub nodes: u64,
}

/// Margin kept in hand so the flag never falls on engine output latency.
const TIME_BUFFER: i64 = 100;

/// Turn the clock situation into a `(normal, extended)` allowance pair.
/// The extended allowance is spent on finishing an iteration that failed
/// outside its aspiration window.
pub fn allocate(limits: &SearchLimits) -> [i64; 2] {
    if limits.movetime > 0 {
        return [limits.movetime, limits.movetime];
    }
    if limits.time > 0 || limits.increment > 0 {
        let movestogo = if limits.movestogo > 0 {
            limits.movestogo
        } else {
            30
        };
        let cap = limits.time - TIME_BUFFER;
        let normal = (limits.time / movestogo + limits.increment).min(cap).max(1);
        let extended = (limits.time / (1 + movestogo / 2) + limits.increment)
            .min(cap)
            .max(1);
        return [normal, extended];
    }
    [0, 0]
}

mod tests {
    #![allow(unused_imports)]
    use super::*;

    #[test]
    fn movetime_is_used_verbatim() {
        let limits = SearchLimits {
            movetime: 1500,
            ..SearchLimits::default()
        };
        assert_eq!(allocate(&limits), [1500, 1500]);
    }

    #[test]
    fn clock_allocation_leaves_a_buffer() {
        let limits = SearchLimits {
            time: 60_000,
            increment: 1000,
            ..SearchLimits::default()
        };
        let [normal, extended] = allocate(&limits);
        assert!(normal >= 1);
        assert!(extended >= normal);
        assert!(extended <= 60_000 - TIME_BUFFER);
    }

    #[test]
    fn no_limits_means_no_allowance() {
        assert_eq!(allocate(&SearchLimits::default()), [0, 0]);
    }

    #[test]
    fn nearly_flagged_still_gets_a_slice() {
        let limits = SearchLimits {
            time: 50,
            ..SearchLimits::default()
        };
        let [normal, extended] = allocate(&limits);
        assert_eq!(normal, 1);
        assert_eq!(extended, 1);
    }
}
