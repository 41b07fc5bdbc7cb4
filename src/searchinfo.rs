use std::sync::mpsc;
use std::time::Instant;

use crate::timemgmt::{allocate, SearchLimits};

/// Per-search bookkeeping: node counting, the time allowance, and the
/// channel the command loop uses to interrupt a running search.
pub struct SearchInfo<'a> {
    pub start: Instant,
    pub nodes: u64,
    pub node_limit: u64,
    time_limit: [i64; 2],
    /// Active allowance in milliseconds; zero disables the clock.
    pub time_allowed: i64,
    /// Aborting is only armed once the first iteration has completed, so
    /// there is always a sane move to return.
    pub can_abort: bool,
    pub stopped: bool,
    pub quit: bool,
    stdin_rx: Option<&'a mpsc::Receiver<String>>,
}

impl<'a> SearchInfo<'a> {
    pub fn new(limits: &SearchLimits) -> Self {
        let time_limit = allocate(limits);
        Self {
            start: Instant::now(),
            nodes: 0,
            node_limit: limits.nodes,
            time_limit,
            time_allowed: time_limit[0],
            can_abort: false,
            stopped: false,
            quit: false,
            stdin_rx: None,
        }
    }

    pub fn set_stdin(&mut self, rx: &'a mpsc::Receiver<String>) {
        self.stdin_rx = Some(rx);
    }

    #[allow(clippy::cast_possible_wrap)]
    pub fn elapsed_ms(&self) -> i64 {
        self.start.elapsed().as_millis() as i64
    }

    /// Reset to the normal allowance, halved in easy recapture
    /// situations.
    pub fn use_normal_allowance(&mut self, halve: bool) {
        self.time_allowed = self.time_limit[0] >> i32::from(halve);
    }

    /// Switch to the extended allowance while resolving an aspiration
    /// fail-out.
    pub fn use_extended_allowance(&mut self) {
        self.time_allowed = self.time_limit[1];
    }

    /// Called at every polling point. Only consults the clock and the
    /// command channel once aborting is armed.
    pub fn should_stop(&mut self) -> bool {
        if !self.can_abort {
            return false;
        }
        if self.stopped {
            return true;
        }
        if self.node_limit > 0 && self.nodes >= self.node_limit {
            self.stopped = true;
        } else if self.time_allowed > 0 && self.elapsed_ms() > self.time_allowed {
            self.stopped = true;
        } else if let Some(rx) = self.stdin_rx {
            while let Ok(line) = rx.try_recv() {
                match line.trim() {
                    "stop" => self.stopped = true,
                    "quit" => {
                        self.stopped = true;
                        self.quit = true;
                    }
                    "isready" => println!("readyok"),
                    _ => (),
                }
            }
        }
        self.stopped
    }
}

mod tests {
    #![allow(unused_imports)]
    use super::*;

    #[test]
    fn node_limit_stops_once_armed() {
        let limits = SearchLimits {
            nodes: 100,
            ..SearchLimits::default()
        };
        let mut info = SearchInfo::new(&limits);
        info.nodes = 200;
        assert!(!info.should_stop(), "must not stop before iteration one");
        info.can_abort = true;
        assert!(info.should_stop());
    }

    #[test]
    fn allowances_switch() {
        let limits = SearchLimits {
            time: 30_000,
            ..SearchLimits::default()
        };
        let mut info = SearchInfo::new(&limits);
        let normal = info.time_allowed;
        info.use_extended_allowance();
        assert!(info.time_allowed >= normal);
        info.use_normal_allowance(true);
        assert_eq!(info.time_allowed, normal / 2);
    }
}
