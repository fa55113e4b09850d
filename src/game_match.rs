//! Teams, duration, softmax win prediction, and stochastic conclusion.
//!
//! Named `game_match` rather than `match` since the latter is a reserved
//! keyword.

use serde::{Deserialize, Serialize};

use crate::prng::Prng;

const SOFTMAX_K: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchState {
    Initiated,
    Ongoing,
    Finished,
    Completed,
}

/// Stat values captured at the start of a match; the live `Player` keeps
/// mutating independently afterward.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub id: usize,
    pub agr: i32,
    pub fle: i32,
    pub gri: i32,
    pub edr: i32,
    pub ins: i32,
    pub cre: i32,
    pub pre: i32,
}

impl PlayerSnapshot {
    pub fn total(&self) -> i32 {
        self.agr + self.fle + self.gri + self.edr + self.ins + self.cre + self.pre
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Match {
    pub id: usize,
    pub teams: Vec<Vec<PlayerSnapshot>>,
    pub start_ms: u64,
    pub duration_ms: u64,
    pub state: MatchState,
    pub predicted_win_rates: Vec<f64>,
    pub winning_team: Option<usize>,
}

impl Match {
    /// Builds a match in `Initiated` state without starting it. Use
    /// `start` to transition into `Ongoing` and compute win predictions.
    pub fn new(id: usize, teams: Vec<Vec<PlayerSnapshot>>) -> Self {
        Self {
            id,
            teams,
            start_ms: 0,
            duration_ms: 0,
            state: MatchState::Initiated,
            predicted_win_rates: Vec::new(),
            winning_team: None,
        }
    }

    /// Randomizes duration, marks `Ongoing`, and computes per-team softmax
    /// win probabilities from summed snapshot stats.
    pub fn start(&mut self, now_ms: u64, avg_duration_ms: u64, rng: &mut Prng) {
        self.start_ms = now_ms;
        self.duration_ms = rng.anchor_u64(avg_duration_ms, avg_duration_ms / 2);
        self.state = MatchState::Ongoing;
        self.predicted_win_rates = softmax_win_rates(&self.teams);
    }

    pub fn has_elapsed(&self, now_ms: u64) -> bool {
        self.state == MatchState::Ongoing && now_ms.saturating_sub(self.start_ms) >= self.duration_ms
    }

    /// Marks the match `Finished` — duration has elapsed, outcome not yet
    /// sampled.
    pub fn mark_finished(&mut self) {
        self.state = MatchState::Finished;
    }

    /// Draws the winning team by cumulative probability and marks the
    /// match `Completed`. Returns the winning team index.
    pub fn conclude(&mut self, rng: &mut Prng) -> usize {
        let u = rng.unit_float();
        let mut cumulative = 0.0;
        let mut winner = self.predicted_win_rates.len().saturating_sub(1);
        for (i, &p) in self.predicted_win_rates.iter().enumerate() {
            cumulative += p;
            if cumulative >= u {
                winner = i;
                break;
            }
        }
        self.winning_team = Some(winner);
        self.state = MatchState::Completed;
        winner
    }

    pub fn is_player_winner(&self, player_id: usize) -> bool {
        let Some(winner) = self.winning_team else {
            return false;
        };
        self.teams
            .get(winner)
            .is_some_and(|team| team.iter().any(|p| p.id == player_id))
    }
}

fn softmax_win_rates(teams: &[Vec<PlayerSnapshot>]) -> Vec<f64> {
    if teams.len() == 1 {
        return vec![1.0];
    }
    let totals: Vec<f64> = teams
        .iter()
        .map(|team| team.iter().map(|p| p.total() as i64).sum::<i64>() as f64)
        .collect();
    let exps: Vec<f64> = totals.iter().map(|&s| (s / SOFTMAX_K).exp()).collect();
    let sum: f64 = exps.iter().sum();
    exps.iter().map(|&e| e / sum).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snap(id: usize, total: i32) -> PlayerSnapshot {
        PlayerSnapshot {
            id,
            agr: total,
            fle: 0,
            gri: 0,
            edr: 0,
            ins: 0,
            cre: 0,
            pre: 0,
        }
    }

    #[test]
    fn equal_teams_softmax_to_half_each() {
        let teams = vec![vec![snap(0, 10)], vec![snap(1, 10)]];
        let probs = softmax_win_rates(&teams);
        assert!((probs[0] - 0.5).abs() < 1e-6);
        assert!((probs[1] - 0.5).abs() < 1e-6);
    }

    #[test]
    fn probabilities_sum_to_one() {
        let teams = vec![vec![snap(0, 30)], vec![snap(1, 5)], vec![snap(2, 17)]];
        let probs = softmax_win_rates(&teams);
        let sum: f64 = probs.iter().sum();
        assert!((sum - 1.0).abs() < 1e-5);
        assert!(probs.iter().all(|&p| p >= 0.0));
    }

    #[test]
    fn single_team_is_certain() {
        let teams = vec![vec![snap(0, 1)]];
        assert_eq!(softmax_win_rates(&teams), vec![1.0]);
    }

    #[test]
    fn conclude_picks_a_valid_team_and_completes() {
        let mut rng = Prng::new(42);
        let mut m = Match::new(0, vec![vec![snap(0, 10)], vec![snap(1, 10)]]);
        m.start(0, 1000, &mut rng);
        m.mark_finished();
        assert_eq!(m.state, MatchState::Finished);
        let winner = m.conclude(&mut rng);
        assert!(winner < 2);
        assert_eq!(m.state, MatchState::Completed);
        assert!(m.is_player_winner(m.teams[winner][0].id));
    }
}
