//! Shared configuration and small value types used across the engine.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Algorithm {
    Lifo,
    Fifo,
    SkillBased,
    TraitGrouping,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldSetting {
    pub avg_player_per_batch: i64,
    pub player_creation_check_interval: u64,
}

impl Default for WorldSetting {
    fn default() -> Self {
        Self {
            avg_player_per_batch: 25,
            player_creation_check_interval: 15,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchSetting {
    pub draft_interval: u64,
    pub drafted_pool_check_interval: u64,
    pub routine_check_interval: u64,
    pub matches_per_cycle: usize,
    pub max_leader_list_size: usize,
    pub min_game_threshold_for_list: usize,
    pub num_teams: usize,
    pub team_size: usize,
    pub match_duration: u64,
    pub max_skill_gap: i32,
}

impl Default for MatchSetting {
    fn default() -> Self {
        Self {
            draft_interval: 1000,
            drafted_pool_check_interval: 500,
            routine_check_interval: 200,
            matches_per_cycle: 30,
            max_leader_list_size: 24,
            min_game_threshold_for_list: 0,
            num_teams: 2,
            team_size: 1,
            match_duration: 16000,
            max_skill_gap: 10,
        }
    }
}

/// A single leaderboard row: a player id plus the stat value it was last
/// reported under.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub player_id: usize,
    pub value: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn world_setting_defaults_match_spec() {
        let w = WorldSetting::default();
        assert_eq!(w.avg_player_per_batch, 25);
        assert_eq!(w.player_creation_check_interval, 15);
    }

    #[test]
    fn match_setting_defaults_match_spec() {
        let m = MatchSetting::default();
        assert_eq!(m.draft_interval, 1000);
        assert_eq!(m.drafted_pool_check_interval, 500);
        assert_eq!(m.routine_check_interval, 200);
        assert_eq!(m.matches_per_cycle, 30);
        assert_eq!(m.max_leader_list_size, 24);
        assert_eq!(m.min_game_threshold_for_list, 0);
        assert_eq!(m.num_teams, 2);
        assert_eq!(m.team_size, 1);
        assert_eq!(m.match_duration, 16000);
        assert_eq!(m.max_skill_gap, 10);
    }
}
