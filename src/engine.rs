//! Owns players, matches, queues, and pools; drives the per-tick pipeline;
//! maintains leaderboards; exposes read-only views to the host.

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet, VecDeque};

use crate::clock::VirtualClock;
use crate::event_queue::EventQueue;
use crate::game_match::{Match, PlayerSnapshot};
use crate::player::{Player, PlayerState, SortKey, CREATION_SORT_KEYS};
use crate::prng::Prng;
use crate::types::{Algorithm, LeaderboardEntry, MatchSetting, WorldSetting};

pub struct Engine {
    algorithm: Algorithm,
    world_setting: WorldSetting,
    match_setting: MatchSetting,

    clock: VirtualClock,
    rng: Prng,

    players: HashMap<usize, Player>,
    next_player_id: usize,
    matches: HashMap<usize, Match>,
    next_match_id: usize,
    ongoing_match_ids: HashSet<usize>,

    player_state_map: HashMap<PlayerState, usize>,
    drafted_pools: Vec<Vec<usize>>,
    queue: VecDeque<usize>,
    queue_set: HashSet<usize>,
    events: EventQueue,

    players_to_create: i64,

    top_lists: HashMap<SortKey, Vec<LeaderboardEntry>>,
    bottom_lists: HashMap<SortKey, Vec<LeaderboardEntry>>,

    last_creation_check: u64,
    last_pool_check: u64,
}

const MAX_POOLS: usize = 100;

/// Routes `debug`-feature diagnostics to the browser console on `wasm32`
/// (where `eprintln!` has nowhere useful to go) and to stderr elsewhere.
#[cfg(feature = "debug")]
fn debug_log(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&msg.into());
    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("{msg}");
}

impl Engine {
    pub fn new(algorithm: Algorithm, seed: u64) -> Self {
        Self {
            algorithm,
            world_setting: WorldSetting::default(),
            match_setting: MatchSetting::default(),
            clock: VirtualClock::new(),
            rng: Prng::new(seed),
            players: HashMap::new(),
            next_player_id: 0,
            matches: HashMap::new(),
            next_match_id: 0,
            ongoing_match_ids: HashSet::new(),
            player_state_map: HashMap::new(),
            drafted_pools: Vec::new(),
            queue: VecDeque::new(),
            queue_set: HashSet::new(),
            events: EventQueue::new(),
            players_to_create: 0,
            top_lists: HashMap::new(),
            bottom_lists: HashMap::new(),
            last_creation_check: 0,
            last_pool_check: 0,
        }
    }

    // ---- configuration ----

    pub fn set_world_setting(&mut self, w: WorldSetting) {
        self.world_setting = w;
    }

    pub fn set_match_setting(&mut self, m: MatchSetting) {
        self.match_setting = m;
    }

    pub fn world_setting(&self) -> WorldSetting {
        self.world_setting
    }

    pub fn match_setting(&self) -> MatchSetting {
        self.match_setting
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    // ---- clock boundary passthrough ----

    pub fn set_scale(&mut self, scale: f32) {
        self.clock.set_scale(scale);
    }

    pub fn pause(&mut self) {
        self.clock.pause();
    }

    pub fn resume(&mut self) {
        self.clock.resume();
    }

    pub fn now_ms(&self) -> u64 {
        self.clock.now_ms()
    }

    pub fn is_paused(&self) -> bool {
        self.clock.is_paused()
    }

    /// Test/headless-driver entry point: advances virtual time directly
    /// rather than sourcing it from wall-clock elapsed time.
    pub fn advance_clock(&mut self, delta_ms: u64) {
        self.clock.advance(delta_ms);
    }

    // ---- creation backlog ----

    pub fn add_to_creation_queue(&mut self, n: i64) {
        self.players_to_create += n;
    }

    fn spawn_player(&mut self) -> usize {
        let id = self.next_player_id;
        self.next_player_id += 1;
        let now = self.clock.now_ms();
        let player = Player::new(id, &mut self.rng, now);
        self.players.insert(id, player);
        self.on_player_created(id);
        id
    }

    fn on_player_created(&mut self, id: usize) {
        let now = self.clock.now_ms();
        if let Some(player) = self.players.get(&id) {
            let state = player.state;
            *self.player_state_map.entry(state).or_insert(0) += 1;
            if let Some((t, target)) = player.next_event(now) {
                self.events.push(t, id, target);
            }
        }
        for key in CREATION_SORT_KEYS {
            self.report(key, id);
        }
    }

    // ---- queue management ----

    pub fn queue_player(&mut self, id: usize) -> bool {
        if self.queue_set.contains(&id) {
            return false;
        }
        self.queue.push_back(id);
        self.queue_set.insert(id);
        true
    }

    pub fn dequeue_player(&mut self, id: usize) {
        if self.queue_set.remove(&id) {
            self.queue.retain(|&qid| qid != id);
        }
        let mut i = 0;
        while i < self.drafted_pools.len() {
            if let Some(pos) = self.drafted_pools[i].iter().position(|&pid| pid == id) {
                self.drafted_pools[i].remove(pos);
                if self.drafted_pools[i].is_empty() {
                    self.drafted_pools.swap_remove(i);
                    continue;
                }
            }
            i += 1;
        }
    }

    /// `false` if the pool is already full, or (under `SkillBased`) if any
    /// existing member's skill differs from the candidate's by more than
    /// `max_skill_gap`. Other algorithms are currently permissive, per
    /// spec — see `TraitGrouping` in DESIGN.md's Open Questions.
    fn can_admit(&self, player: &Player, pool: &[usize]) -> bool {
        let capacity = self.match_setting.num_teams * self.match_setting.team_size;
        if pool.len() >= capacity {
            return false;
        }
        if self.algorithm == Algorithm::SkillBased {
            for &mate_id in pool {
                if let Some(mate) = self.players.get(&mate_id) {
                    let gap = (player.total_score() - mate.total_score()).abs();
                    if gap > self.match_setting.max_skill_gap {
                        #[cfg(feature = "debug")]
                        debug_log(&format!(
                            "pool admission failed: skill gap {gap} exceeds max {} between players {} and {}",
                            self.match_setting.max_skill_gap, player.id, mate_id
                        ));
                        return false;
                    }
                }
            }
        }
        true
    }

    /// No-op if `id` isn't `InQueue`; otherwise appends to the first pool
    /// that can admit it, in insertion order, else opens a new pool.
    pub fn assign_to_pool(&mut self, id: usize) {
        let admit = match self.players.get(&id) {
            Some(player) if player.state == PlayerState::InQueue => self
                .drafted_pools
                .iter()
                .position(|pool| self.can_admit(player, pool)),
            _ => return,
        };
        match admit {
            Some(i) => self.drafted_pools[i].push(id),
            None => self.drafted_pools.push(vec![id]),
        }
    }

    // ---- transitions ----

    /// Applies a state change and reacts to it: dequeues on leaving
    /// `InQueue`, attempts queue admission on entering `InQueue` (reverting
    /// to `Online` on failure), schedules the next event, and updates the
    /// state histogram.
    pub fn set_player_state(&mut self, id: usize, target: PlayerState, force: bool) -> bool {
        let now = self.clock.now_ms();
        let transition = match self.players.get_mut(&id) {
            Some(player) => player.set_state(target, now, &mut self.rng, force),
            None => return false,
        };
        let Some(transition) = transition else {
            return false;
        };

        if transition.old == PlayerState::InQueue && transition.new != PlayerState::InGame {
            self.dequeue_player(id);
        }

        if transition.new == PlayerState::InQueue {
            let queued = self.queue_player(id);
            if !queued {
                if let Some(player) = self.players.get_mut(&id) {
                    player.log("failed to join queue");
                }
                self.set_player_state(id, PlayerState::Online, false);
            }
        }

        let now = self.clock.now_ms();
        if let Some(player) = self.players.get(&id) {
            if let Some((t, next_state)) = player.next_event(now) {
                self.events.push(t, id, next_state);
                if let Some(player) = self.players.get_mut(&id) {
                    player.log(format!("scheduled to {next_state:?}"));
                }
            }
        }

        *self.player_state_map.entry(transition.old).or_insert(0) =
            self.player_state_map.get(&transition.old).copied().unwrap_or(0).saturating_sub(1);
        *self.player_state_map.entry(transition.new).or_insert(0) += 1;

        true
    }

    // ---- matches ----

    fn start_match(&mut self, pool: Vec<usize>) {
        let match_id = self.next_match_id;
        self.next_match_id += 1;
        let num_teams = self.match_setting.num_teams;
        let team_size = self.match_setting.team_size;

        let mut teams: Vec<Vec<PlayerSnapshot>> = vec![Vec::with_capacity(team_size); num_teams];
        for t in 0..num_teams {
            for p in 0..team_size {
                let idx = t * team_size + p;
                let Some(&player_id) = pool.get(idx) else {
                    continue;
                };
                if let Some(player) = self.players.get(&player_id) {
                    teams[t].push(PlayerSnapshot {
                        id: player.id,
                        agr: player.agr,
                        fle: player.fle,
                        gri: player.gri,
                        edr: player.edr,
                        ins: player.ins,
                        cre: player.cre,
                        pre: player.pre,
                    });
                }
                if let Some(player) = self.players.get_mut(&player_id) {
                    player.ongoing_match_id = Some(match_id);
                }
                self.set_player_state(player_id, PlayerState::InGame, false);
            }
        }

        let now = self.clock.now_ms();
        let avg_duration = self.match_setting.match_duration;
        let mut m = Match::new(match_id, teams);
        m.start(now, avg_duration, &mut self.rng);

        #[cfg(feature = "debug")]
        debug_log(&format!(
            "match {} started with {} teams, predicted win rates {:?}",
            match_id,
            m.teams.len(),
            m.predicted_win_rates
        ));

        self.matches.insert(match_id, m);
        self.ongoing_match_ids.insert(match_id);
    }

    fn conclude_match(&mut self, match_id: usize) {
        let winning_team = match self.matches.get_mut(&match_id) {
            Some(m) => {
                m.mark_finished();
                m.conclude(&mut self.rng)
            }
            None => return,
        };

        let participants: Vec<(usize, bool)> = match self.matches.get(&match_id) {
            Some(m) => m
                .teams
                .iter()
                .enumerate()
                .flat_map(|(t_idx, team)| team.iter().map(move |s| (s.id, t_idx == winning_team)))
                .collect(),
            None => Vec::new(),
        };

        for (player_id, is_winner) in participants {
            if let Some(player) = self.players.get_mut(&player_id) {
                player.register_match_result(match_id, is_winner);
                player.log(format!("match {match_id} ended"));
            }

            let now = self.clock.now_ms();
            let target = self
                .players
                .get(&player_id)
                .map(|p| if p.is_in_online_window(now) { PlayerState::Online } else { PlayerState::Offline });
            if let Some(target) = target {
                self.set_player_state(player_id, target, true);
            }

            if let Some(player) = self.players.get_mut(&player_id) {
                player.ongoing_match_id = None;
            }
            if let Some(player) = self.players.get(&player_id) {
                if player.games_played() > self.match_setting.min_game_threshold_for_list {
                    self.report(SortKey::WinRate, player_id);
                }
            }
        }

        #[cfg(feature = "debug")]
        debug_log(&format!("match {match_id} ended, winning team {winning_team}"));

        self.ongoing_match_ids.remove(&match_id);
    }

    // ---- leaderboards ----

    fn report(&mut self, key: SortKey, player_id: usize) {
        let Some(value) = self.players.get(&player_id).map(|p| p.stat_for(key)) else {
            return;
        };
        let cap = self.match_setting.max_leader_list_size;
        let top = self.top_lists.entry(key).or_default();
        upsert_sorted(top, player_id, value, true, cap);
        let bottom = self.bottom_lists.entry(key).or_default();
        upsert_sorted(bottom, player_id, value, false, cap);
    }

    // ---- per-tick pipeline ----

    pub fn tick(&mut self) {
        self.clock.update();
        self.step_spawn();
        self.step_conclude_matches();
        self.step_drain_events();
        self.step_draft();
        self.step_start_matches();
    }

    fn step_spawn(&mut self) {
        let mut last = self.last_creation_check;
        let due = self
            .clock
            .check_interval(self.world_setting.player_creation_check_interval, &mut last);
        self.last_creation_check = last;
        if !due || self.players_to_create <= 0 {
            return;
        }
        let avg = self.world_setting.avg_player_per_batch;
        let batch = self.rng.anchor_i64(avg, avg / 2).max(0);
        let count = batch.min(self.players_to_create);

        #[cfg(feature = "debug")]
        debug_log(&format!(
            "spawning {count} players, {} remaining in backlog",
            self.players_to_create - count
        ));

        for _ in 0..count {
            self.spawn_player();
        }
        self.players_to_create -= count;
    }

    fn step_conclude_matches(&mut self) {
        let now = self.clock.now_ms();
        let due: Vec<usize> = self
            .ongoing_match_ids
            .iter()
            .copied()
            .filter(|id| self.matches.get(id).is_some_and(|m| m.has_elapsed(now)))
            .collect();
        for id in due {
            self.conclude_match(id);
        }
    }

    fn step_drain_events(&mut self) {
        let cap = self.players.len() / 100 + 5;
        let now = self.clock.now_ms();
        let mut processed = 0;
        while processed < cap {
            let due = matches!(self.events.peek(), Some(e) if e.time_ms <= now);
            if !due {
                break;
            }
            let Some(event) = self.events.pop() else {
                break;
            };
            self.set_player_state(event.player_id, event.target_state, false);
            processed += 1;
        }
    }

    fn step_draft(&mut self) {
        while !self.queue.is_empty() && self.drafted_pools.len() < MAX_POOLS {
            let id = if self.algorithm == Algorithm::Lifo {
                self.queue.pop_back()
            } else {
                self.queue.pop_front()
            };
            let Some(id) = id else { break };
            self.queue_set.remove(&id);
            self.assign_to_pool(id);
        }
    }

    fn step_start_matches(&mut self) {
        let mut last = self.last_pool_check;
        let due = self
            .clock
            .check_interval(self.match_setting.drafted_pool_check_interval, &mut last);
        self.last_pool_check = last;
        if !due {
            return;
        }
        let capacity = self.match_setting.num_teams * self.match_setting.team_size;
        let mut started = 0;
        let mut i = 0;
        while i < self.drafted_pools.len() && started < self.match_setting.matches_per_cycle {
            if self.drafted_pools[i].len() == capacity {
                let pool = self.drafted_pools.remove(i);
                self.start_match(pool);
                started += 1;
            } else {
                i += 1;
            }
        }
    }

    // ---- read views ----

    pub fn players(&self) -> &HashMap<usize, Player> {
        &self.players
    }

    pub fn player(&self, id: usize) -> Option<&Player> {
        self.players.get(&id)
    }

    pub fn matches(&self) -> &HashMap<usize, Match> {
        &self.matches
    }

    pub fn ongoing_match_ids(&self) -> &HashSet<usize> {
        &self.ongoing_match_ids
    }

    pub fn player_state_map(&self) -> &HashMap<PlayerState, usize> {
        &self.player_state_map
    }

    pub fn drafted_pools(&self) -> &[Vec<usize>] {
        &self.drafted_pools
    }

    pub fn sorted_players(&self, key: SortKey, ascending: bool) -> &[LeaderboardEntry] {
        let lists = if ascending { &self.bottom_lists } else { &self.top_lists };
        lists.get(&key).map(|v| v.as_slice()).unwrap_or(&[])
    }

    pub fn num_players_in_state(&self, state: PlayerState) -> usize {
        self.player_state_map.get(&state).copied().unwrap_or(0)
    }

    pub fn avg_queue_time(&self) -> f64 {
        if self.players.is_empty() {
            return 0.0;
        }
        let now = self.clock.now_ms();
        let total: f64 = self.players.values().map(|p| p.avg_queue_time_ms(now)).sum();
        total / self.players.len() as f64
    }

    /// Checks the invariants named in spec §8; used by the test suite. In
    /// release builds nothing calls this automatically — it's a testing
    /// tool, not a runtime guard (those are the targeted `debug_assert!`s
    /// inline above).
    pub fn check_invariants(&self) -> Result<(), String> {
        for player in self.players.values() {
            if player.won.len() + player.lost.len() != player.history.len() {
                return Err(format!("player {} won+lost != history", player.id));
            }
            let expected_rate = if player.history.is_empty() {
                0.0
            } else {
                player.won.len() as f64 / player.history.len() as f64
            };
            if (player.win_rate() - expected_rate).abs() > 1e-9 {
                return Err(format!("player {} win_rate mismatch", player.id));
            }
            if player.state == PlayerState::InGame && player.ongoing_match_id.is_none() {
                return Err(format!("player {} InGame with no ongoing match", player.id));
            }
        }

        for &match_id in &self.ongoing_match_ids {
            let Some(m) = self.matches.get(&match_id) else {
                return Err(format!("ongoing match {match_id} missing"));
            };
            for team in &m.teams {
                for snapshot in team {
                    match self.players.get(&snapshot.id) {
                        Some(p) if p.state == PlayerState::InGame && p.ongoing_match_id == Some(match_id) => {}
                        _ => return Err(format!("participant {} of match {match_id} inconsistent", snapshot.id)),
                    }
                }
            }
            let sum: f64 = m.predicted_win_rates.iter().sum();
            if (sum - 1.0).abs() > 1e-5 || m.predicted_win_rates.iter().any(|&p| p < 0.0) {
                return Err(format!("match {match_id} win rates invalid"));
            }
        }

        let mut seen_in_game = HashSet::new();
        for m in self.matches.values() {
            if self.ongoing_match_ids.contains(&m.id) {
                for team in &m.teams {
                    for s in team {
                        if !seen_in_game.insert(s.id) {
                            return Err(format!("player {} in two ongoing matches", s.id));
                        }
                    }
                }
            }
        }

        if self.queue.len() != self.queue_set.len() {
            return Err("queue deque/set size mismatch".to_string());
        }
        for &id in &self.queue {
            if !self.queue_set.contains(&id) {
                return Err(format!("queue member {id} missing from membership set"));
            }
        }
        for pool in &self.drafted_pools {
            let mut seen = HashSet::new();
            for &id in pool {
                if !seen.insert(id) {
                    return Err(format!("duplicate player {id} within a pool"));
                }
            }
        }

        Ok(())
    }
}

fn upsert_sorted(list: &mut Vec<LeaderboardEntry>, player_id: usize, value: f64, descending: bool, cap: usize) {
    if let Some(entry) = list.iter_mut().find(|e| e.player_id == player_id) {
        entry.value = value;
    } else {
        list.push(LeaderboardEntry { player_id, value });
    }
    list.sort_by(|a, b| {
        let ord = a.value.partial_cmp(&b.value).unwrap_or(Ordering::Equal);
        if descending {
            ord.reverse()
        } else {
            ord
        }
    });
    list.truncate(cap);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drive(engine: &mut Engine, ticks: usize) {
        for _ in 0..ticks {
            engine.advance_clock(50);
            engine.tick();
        }
    }

    #[test]
    fn empty_tick_is_inert() {
        let mut engine = Engine::new(Algorithm::Fifo, 1);
        for _ in 0..100 {
            engine.tick();
        }
        assert!(engine.players().is_empty());
        assert!(engine.matches().is_empty());
        assert_eq!(engine.avg_queue_time(), 0.0);
        assert!(engine.check_invariants().is_ok());
    }

    #[test]
    fn creation_burst_reaches_target_population() {
        let mut engine = Engine::new(Algorithm::Fifo, 42);
        engine.set_world_setting(WorldSetting {
            avg_player_per_batch: 25,
            player_creation_check_interval: 15,
        });
        engine.add_to_creation_queue(1000);
        for _ in 0..2000 {
            engine.advance_clock(15);
            engine.tick();
            if engine.players_to_create <= 0 {
                break;
            }
        }
        assert_eq!(engine.players().len(), 1000);
        let mut ids: Vec<usize> = engine.players().keys().copied().collect();
        ids.sort_unstable();
        assert_eq!(ids, (0..1000).collect::<Vec<_>>());
        for p in engine.players().values() {
            assert!(!p.traits.is_empty());
        }
        assert!(engine.check_invariants().is_ok());
    }

    #[test]
    fn single_1v1_match_runs_to_completion() {
        let mut engine = Engine::new(Algorithm::Fifo, 7);
        engine.set_match_setting(MatchSetting {
            num_teams: 2,
            team_size: 1,
            match_duration: 1000,
            drafted_pool_check_interval: 0,
            ..MatchSetting::default()
        });
        let a = engine.spawn_player();
        let b = engine.spawn_player();
        engine.set_player_state(a, PlayerState::Online, true);
        engine.set_player_state(b, PlayerState::Online, true);
        engine.set_player_state(a, PlayerState::InQueue, true);
        engine.set_player_state(b, PlayerState::InQueue, true);

        drive(&mut engine, 5);
        assert_eq!(engine.ongoing_match_ids().len(), 1);

        drive(&mut engine, 50);

        let total_won: usize = [a, b].iter().map(|&id| engine.player(id).unwrap().won.len()).sum();
        let total_lost: usize = [a, b].iter().map(|&id| engine.player(id).unwrap().lost.len()).sum();
        assert_eq!(total_won, 1);
        assert_eq!(total_lost, 1);
        for &id in &[a, b] {
            let p = engine.player(id).unwrap();
            assert!(p.ongoing_match_id.is_none());
            assert!(matches!(p.state, PlayerState::Online | PlayerState::Offline));
        }
        assert!(engine.check_invariants().is_ok());
    }

    #[test]
    fn leaderboards_stay_sorted_and_capped() {
        let mut engine = Engine::new(Algorithm::Fifo, 3);
        engine.set_match_setting(MatchSetting {
            max_leader_list_size: 5,
            ..MatchSetting::default()
        });
        for _ in 0..20 {
            engine.spawn_player();
        }
        let top = engine.sorted_players(SortKey::TotalScore, false);
        assert!(top.len() <= 5);
        for pair in top.windows(2) {
            assert!(pair[0].value >= pair[1].value);
        }
        let bottom = engine.sorted_players(SortKey::TotalScore, true);
        for pair in bottom.windows(2) {
            assert!(pair[0].value <= pair[1].value);
        }
    }

    #[test]
    fn dequeue_removes_from_queue_and_pools() {
        let mut engine = Engine::new(Algorithm::Fifo, 11);
        let a = engine.spawn_player();
        assert!(engine.queue_player(a));
        assert!(!engine.queue_player(a));
        engine.dequeue_player(a);
        assert!(engine.queue_player(a));
    }

    /// Same seed, same algorithm, same settings, same tick count must
    /// reproduce identical outcomes: trait assignment, match count, and
    /// every player's final win/loss tally.
    #[test]
    fn same_seed_reproduces_identical_run() {
        fn run() -> (usize, usize, Vec<(i32, usize, usize)>) {
            let mut engine = Engine::new(Algorithm::Fifo, 99);
            engine.add_to_creation_queue(40);
            drive(&mut engine, 400);
            let matches = engine.matches().len();
            let mut snapshot: Vec<(i32, usize, usize)> = engine
                .players()
                .values()
                .map(|p| (p.total_score(), p.won.len(), p.lost.len()))
                .collect();
            snapshot.sort_unstable();
            (engine.players().len(), matches, snapshot)
        }
        let a = run();
        let b = run();
        assert_eq!(a, b);
    }

    /// Every match's participants keep exactly one win or one loss recorded
    /// (never both, never neither) and the engine-wide totals of wins and
    /// losses stay equal to each other and to the number of matches played.
    #[test]
    fn wins_and_losses_are_conserved_across_many_matches() {
        let mut engine = Engine::new(Algorithm::Fifo, 21);
        engine.add_to_creation_queue(60);
        drive(&mut engine, 1500);

        let mut total_won = 0;
        let mut total_lost = 0;
        for p in engine.players().values() {
            assert!(p.won.len() + p.lost.len() <= p.history.len());
            assert_eq!(p.won.len() + p.lost.len(), p.history.len());
            total_won += p.won.len();
            total_lost += p.lost.len();
        }
        assert_eq!(total_won, total_lost);
        assert!(engine.check_invariants().is_ok());
    }

    #[test]
    fn trait_conflicts_never_coexist_on_a_spawned_player() {
        let mut engine = Engine::new(Algorithm::Fifo, 55);
        for _ in 0..300 {
            engine.spawn_player();
        }
        for p in engine.players().values() {
            assert!(!(p.traits.has(crate::traits::Trait::Aggressive) && p.traits.has(crate::traits::Trait::Defensive)));
            assert!(!(p.traits.has(crate::traits::Trait::Casual) && p.traits.has(crate::traits::Trait::Competitive)));
        }
    }
}
