//! Player identity, traits, stats, lifecycle state, and schedule.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::clock::MS_PER_DAY;
use crate::prng::Prng;
use crate::traits::{generate_random_traits, sum_deltas, validate_traits, TraitMask};

const MS_PER_MIN: u64 = 1000;
const ACTIVITY_LOG_CAP: usize = 64;
const MIN_GAP_MINUTES: i32 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerState {
    Offline,
    Online,
    InQueue,
    InGame,
    Disconnected,
    Rejoining,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortKey {
    WinRate,
    Aggressiveness,
    Flexibility,
    Grit,
    Endurance,
    Instinct,
    Creativity,
    Precision,
    TotalScore,
}

pub const ALL_SORT_KEYS: [SortKey; 9] = [
    SortKey::WinRate,
    SortKey::Aggressiveness,
    SortKey::Flexibility,
    SortKey::Grit,
    SortKey::Endurance,
    SortKey::Instinct,
    SortKey::Creativity,
    SortKey::Precision,
    SortKey::TotalScore,
];

/// The keys reported on player creation: the seven stat axes plus
/// `TotalScore`. `WinRate` is excluded — a fresh player has no history, and
/// spec only reports it on match conclusion (subject to the game
/// threshold).
pub const CREATION_SORT_KEYS: [SortKey; 8] = [
    SortKey::Aggressiveness,
    SortKey::Flexibility,
    SortKey::Grit,
    SortKey::Endurance,
    SortKey::Instinct,
    SortKey::Creativity,
    SortKey::Precision,
    SortKey::TotalScore,
];

/// A transition the engine must react to (schedule next event, update the
/// state histogram, handle queue admission/removal).
pub struct Transition {
    pub old: PlayerState,
    pub new: PlayerState,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub id: usize,
    pub traits: TraitMask,
    pub agr: i32,
    pub fle: i32,
    pub gri: i32,
    pub edr: i32,
    pub ins: i32,
    pub cre: i32,
    pub pre: i32,
    pub state: PlayerState,
    pub state_changed_at: u64,
    pub current_idle_ms: u64,
    pub total_online_ms: u64,
    pub queue_samples: u64,
    pub queue_ms_sum: u64,
    pub game_samples: u64,
    pub game_ms_sum: u64,
    pub history: Vec<usize>,
    pub won: Vec<usize>,
    pub lost: Vec<usize>,
    pub ongoing_match_id: Option<usize>,
    pub desired_online_windows: Vec<(u64, u64)>,
    #[serde(skip)]
    pub activity_log: VecDeque<String>,
}

/// Rejects a transition request; `None` means legal.
fn transition_rejection(current: PlayerState, target: PlayerState) -> Option<String> {
    if current == target {
        return Some(format!("tried setting same state: {target:?}"));
    }
    match (current, target) {
        (PlayerState::InGame, PlayerState::Offline) => {
            Some("tried setting from InGame to Offline".to_string())
        }
        (PlayerState::Offline, PlayerState::InQueue) => {
            Some("tried setting from Offline to InQueue".to_string())
        }
        (PlayerState::Offline, PlayerState::InGame) => {
            Some("tried setting from Offline to InGame".to_string())
        }
        _ => None,
    }
}

impl Player {
    /// Draws traits, validates conflicts, applies deltas, generates the
    /// online schedule, and sets the initial state from the current
    /// virtual-day progress.
    pub fn new(id: usize, rng: &mut Prng, now_ms: u64) -> Self {
        let mask = validate_traits(generate_random_traits(rng), rng);
        Self::build(id, mask, rng, now_ms)
    }

    /// Skips trait randomization; everything else (deltas, schedule,
    /// initial state) is still generated normally.
    pub fn new_with(id: usize, traits: TraitMask, rng: &mut Prng, now_ms: u64) -> Self {
        Self::build(id, traits, rng, now_ms)
    }

    fn build(id: usize, traits: TraitMask, rng: &mut Prng, now_ms: u64) -> Self {
        let (agr, fle, gri, edr, ins, cre, pre) = sum_deltas(traits);
        let windows = generate_online_schedule(rng);
        let day_ms = now_ms % MS_PER_DAY;
        let online_now = windows.iter().any(|&(s, e)| day_ms >= s && day_ms <= e);
        let mut player = Player {
            id,
            traits,
            agr,
            fle,
            gri,
            edr,
            ins,
            cre,
            pre,
            state: if online_now {
                PlayerState::Online
            } else {
                PlayerState::Offline
            },
            state_changed_at: now_ms,
            current_idle_ms: rng.anchor_u64(4000, 1500),
            total_online_ms: 0,
            queue_samples: 0,
            queue_ms_sum: 0,
            game_samples: 0,
            game_ms_sum: 0,
            history: Vec::new(),
            won: Vec::new(),
            lost: Vec::new(),
            ongoing_match_id: None,
            desired_online_windows: windows,
            activity_log: VecDeque::new(),
        };
        player.log(format!("created in state {:?}", player.state));
        player
    }

    pub(crate) fn log(&mut self, line: impl Into<String>) {
        self.activity_log.push_back(line.into());
        if self.activity_log.len() > ACTIVITY_LOG_CAP {
            self.activity_log.pop_front();
        }
    }

    pub fn can_transition(current: PlayerState, target: PlayerState) -> bool {
        transition_rejection(current, target).is_none()
    }

    /// Applies the local bookkeeping for a state change: legality check
    /// (bypassed if `force`), per-state duration accounting, and a log
    /// line. Returns the transition record for the engine to react to, or
    /// `None` if rejected.
    pub fn set_state(
        &mut self,
        target: PlayerState,
        now_ms: u64,
        rng: &mut Prng,
        force: bool,
    ) -> Option<Transition> {
        if !force {
            if let Some(reason) = transition_rejection(self.state, target) {
                self.log(format!("failed: {reason}"));
                return None;
            }
        }

        if target == PlayerState::Online {
            self.current_idle_ms = rng.anchor_u64(4000, 1500);
        }

        let duration = now_ms.saturating_sub(self.state_changed_at);
        if !matches!(self.state, PlayerState::Offline | PlayerState::Disconnected) {
            self.total_online_ms += duration;
        }
        if self.state == PlayerState::InQueue {
            self.queue_samples += 1;
            self.queue_ms_sum += duration;
        }
        if self.state == PlayerState::InGame {
            self.game_samples += 1;
            self.game_ms_sum += duration;
        }

        let old = self.state;
        self.state = target;
        self.state_changed_at = now_ms;
        self.log(format!("set to state: {target:?}"));

        Some(Transition { old, new: target })
    }

    /// Next scheduled state change for the current state, if any.
    pub fn next_event(&self, now_ms: u64) -> Option<(u64, PlayerState)> {
        match self.state {
            PlayerState::Online => {
                let next_queue = now_ms + self.current_idle_ms;
                let next_offline = self.next_offline_timestamp(now_ms);
                if next_queue < next_offline {
                    Some((next_queue, PlayerState::InQueue))
                } else {
                    Some((next_offline, PlayerState::Offline))
                }
            }
            PlayerState::InQueue => Some((self.next_offline_timestamp(now_ms), PlayerState::Offline)),
            PlayerState::Offline => Some((self.next_online_timestamp(now_ms), PlayerState::Online)),
            _ => None,
        }
    }

    fn next_online_timestamp(&self, now_ms: u64) -> u64 {
        self.next_window_edge(now_ms, true)
    }

    fn next_offline_timestamp(&self, now_ms: u64) -> u64 {
        self.next_window_edge(now_ms, false)
    }

    fn next_window_edge(&self, now_ms: u64, start_edge: bool) -> u64 {
        let day_ms = now_ms % MS_PER_DAY;
        let start_of_day = now_ms - day_ms;

        if self.desired_online_windows.is_empty() {
            return start_of_day + MS_PER_DAY;
        }

        let mut next_time_of_day = None;
        for &(start, end) in &self.desired_online_windows {
            let edge = if start_edge { start } else { end };
            if day_ms <= edge {
                next_time_of_day = Some(edge);
                break;
            }
        }
        let mut next_time_of_day = next_time_of_day.unwrap_or({
            let (start, end) = self.desired_online_windows[0];
            if start_edge {
                start
            } else {
                end
            }
        });
        if next_time_of_day < day_ms {
            next_time_of_day += MS_PER_DAY;
        }
        start_of_day + next_time_of_day
    }

    pub fn is_in_online_window(&self, now_ms: u64) -> bool {
        let day_ms = now_ms % MS_PER_DAY;
        self.desired_online_windows
            .iter()
            .any(|&(s, e)| day_ms >= s && day_ms <= e)
    }

    pub fn total_score(&self) -> i32 {
        self.agr + self.fle + self.gri + self.edr + self.ins + self.cre + self.pre
    }

    pub fn win_rate(&self) -> f64 {
        if self.history.is_empty() {
            0.0
        } else {
            self.won.len() as f64 / self.history.len() as f64
        }
    }

    pub fn games_played(&self) -> usize {
        self.history.len()
    }

    pub fn register_match_result(&mut self, match_id: usize, is_winner: bool) {
        self.history.push(match_id);
        if is_winner {
            self.won.push(match_id);
        } else {
            self.lost.push(match_id);
        }
    }

    /// Mean queue duration, folding in the current in-progress wait if the
    /// player is presently `InQueue`.
    pub fn avg_queue_time_ms(&self, now_ms: u64) -> f64 {
        if self.state == PlayerState::InQueue {
            let current = now_ms.saturating_sub(self.state_changed_at);
            (self.queue_ms_sum + current) as f64 / (self.queue_samples + 1) as f64
        } else if self.queue_samples > 0 {
            self.queue_ms_sum as f64 / self.queue_samples as f64
        } else {
            0.0
        }
    }

    pub fn stat_for(&self, key: SortKey) -> f64 {
        match key {
            SortKey::WinRate => self.win_rate(),
            SortKey::Aggressiveness => self.agr as f64,
            SortKey::Flexibility => self.fle as f64,
            SortKey::Grit => self.gri as f64,
            SortKey::Endurance => self.edr as f64,
            SortKey::Instinct => self.ins as f64,
            SortKey::Creativity => self.cre as f64,
            SortKey::Precision => self.pre as f64,
            SortKey::TotalScore => self.total_score() as f64,
        }
    }
}

/// Chooses `n = uniform_int(1, 6) * 2` minute-of-day stamps at least 60
/// minutes apart, sorts them, pairs consecutive stamps into windows, and
/// scales to virtual milliseconds.
fn generate_online_schedule(rng: &mut Prng) -> Vec<(u64, u64)> {
    let n = rng.range_i32(1, 6) * 2;
    let mut stamps: Vec<i32> = Vec::with_capacity(n as usize);
    let mut guard = 0;
    while (stamps.len() as i32) < n && guard < 10_000 {
        guard += 1;
        let candidate = rng.range_i32(0, 1439);
        if stamps
            .iter()
            .all(|&s| (s - candidate).abs() >= MIN_GAP_MINUTES)
        {
            stamps.push(candidate);
        }
    }
    stamps.sort_unstable();
    stamps
        .chunks_exact(2)
        .map(|pair| {
            (
                pair[0] as u64 * MS_PER_MIN,
                pair[1] as u64 * MS_PER_MIN,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schedule_windows_are_sorted_disjoint_and_gapped() {
        let mut rng = Prng::new(3);
        for _ in 0..50 {
            let windows = generate_online_schedule(&mut rng);
            for w in &windows {
                assert!(w.0 < w.1);
                assert!(w.1 < MS_PER_DAY);
            }
            for pair in windows.windows(2) {
                assert!(pair[0].1 <= pair[1].0);
            }
        }
    }

    #[test]
    fn illegal_transition_is_rejected_and_logged() {
        let mut rng = Prng::new(1);
        let mut p = Player::new(0, &mut rng, 0);
        p.state = PlayerState::Offline;
        let before = p.state;
        let outcome = p.set_state(PlayerState::InQueue, 1000, &mut rng, false);
        assert!(outcome.is_none());
        assert_eq!(p.state, before);
        assert!(p
            .activity_log
            .iter()
            .any(|l| l.contains("tried setting from Offline to InQueue")));
    }

    #[test]
    fn identity_transition_is_rejected() {
        let mut rng = Prng::new(2);
        let mut p = Player::new(0, &mut rng, 0);
        let current = p.state;
        assert!(p.set_state(current, 0, &mut rng, false).is_none());
    }

    #[test]
    fn force_bypasses_legality() {
        let mut rng = Prng::new(4);
        let mut p = Player::new(0, &mut rng, 0);
        p.state = PlayerState::Offline;
        let out = p.set_state(PlayerState::InQueue, 10, &mut rng, true);
        assert!(out.is_some());
        assert_eq!(p.state, PlayerState::InQueue);
    }

    #[test]
    fn win_rate_tracks_history() {
        let mut rng = Prng::new(6);
        let mut p = Player::new(0, &mut rng, 0);
        assert_eq!(p.win_rate(), 0.0);
        p.register_match_result(0, true);
        p.register_match_result(1, false);
        assert_eq!(p.won.len() + p.lost.len(), p.history.len());
        assert_eq!(p.win_rate(), 0.5);
    }

    #[test]
    fn avg_queue_time_folds_in_current_wait() {
        let mut rng = Prng::new(8);
        let mut p = Player::new(0, &mut rng, 0);
        p.state = PlayerState::InQueue;
        p.state_changed_at = 0;
        assert_eq!(p.avg_queue_time_ms(500), 500.0);
    }
}
