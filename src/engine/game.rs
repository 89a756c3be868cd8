//! The quest engine: turn rotation and scoring.

use log::{debug, info, warn};

use super::event::QuestEvent;
use super::timer::{ScheduledTransition, TransitionHandle, TransitionKind, TransitionTimer};
use super::view::{self, GameState, LeaderboardEntry};
use crate::core::{Phase, QuestConfig, QuestRng, Round, Team, TeamId, TeamIndex, TeamMap, Word};
use crate::error::SetupError;
use crate::store::{GameId, QuestStore};

/// Authoritative game state plus the operations that advance it.
///
/// ## Example
///
/// ```
/// use word_quest::core::{Phase, QuestConfig, Team, TeamId, Word, WordId};
/// use word_quest::engine::QuestEngine;
/// use word_quest::store::InMemoryStore;
///
/// let teams = vec![
///     Team::new(TeamId::new(1), "Eagles", "red"),
///     Team::new(TeamId::new(2), "Wolves", "blue"),
/// ];
/// let words = vec![Word::new(WordId::new(1), "CAT", 10)];
///
/// let mut engine =
///     QuestEngine::start(QuestConfig::default(), InMemoryStore::new(), teams, words, 42).unwrap();
///
/// engine.guess_letter('C');
/// engine.guess_letter('A');
/// let state = engine.guess_letter('T');
/// assert_eq!(state.phase, Phase::Won);
/// assert_eq!(state.scores, vec![10, 0]);
///
/// // After the win delay the game runs out of words
/// let state = engine.advance_time(2);
/// assert_eq!(state.phase, Phase::Finished);
/// ```
pub struct QuestEngine<S: QuestStore> {
    config: QuestConfig,
    store: S,
    rng: QuestRng,

    teams: Vec<Team>,
    words: Vec<Word>,
    scores: TeamMap<u32>,
    round: Round,

    game_id: Option<GameId>,
    clock: u64,
    timer: TransitionTimer,
    /// Handle of the transition this engine scheduled last, if still live.
    transition: Option<TransitionHandle>,
    events: Vec<QuestEvent>,
    write_failures: usize,
}

impl<S: QuestStore> QuestEngine<S> {
    /// Start a game with the given teams and words.
    ///
    /// Fails if either collection is empty, a word is not alphabetic, or the
    /// configuration is unusable.
    pub fn start(
        config: QuestConfig,
        store: S,
        teams: Vec<Team>,
        words: Vec<Word>,
        seed: u64,
    ) -> Result<Self, SetupError> {
        config.validate()?;
        let (teams, words) = check_setup(teams, words)?;

        let mut rng = QuestRng::new(seed);
        let round = open_round(&config, &mut rng, &words, 0, teams.len());

        let mut engine = Self {
            scores: TeamMap::with_value(teams.len(), 0),
            config,
            store,
            rng,
            teams,
            words,
            round,
            game_id: None,
            clock: 0,
            timer: TransitionTimer::new(),
            transition: None,
            events: Vec::new(),
            write_failures: 0,
        };
        engine.register_game();
        Ok(engine)
    }

    /// Load teams and words through the store, then start.
    pub fn start_from_store(config: QuestConfig, mut store: S, seed: u64) -> Result<Self, SetupError> {
        let teams = store.load_teams()?;
        let words = store.load_words()?;
        Self::start(config, store, teams, words, seed)
    }

    /// Replace the running game with a fresh one.
    ///
    /// On error the running game is left untouched.
    pub fn start_game(&mut self, teams: Vec<Team>, words: Vec<Word>) -> Result<GameState, SetupError> {
        let (teams, words) = check_setup(teams, words)?;

        self.cancel_transition();
        self.events.clear();
        self.clock = 0;
        self.write_failures = 0;
        self.scores = TeamMap::with_value(teams.len(), 0);
        self.round = open_round(&self.config, &mut self.rng, &words, 0, teams.len());
        self.teams = teams;
        self.words = words;
        self.register_game();

        Ok(self.state())
    }

    // === Player Input ===

    /// Guess a letter for the current tribe.
    ///
    /// Non-letters, guesses outside `Playing`, and guesses while a
    /// transition is pending are ignored. Letters outside `A-Z` are accepted
    /// and can only ever be wrong.
    pub fn guess_letter(&mut self, letter: char) -> GameState {
        if !letter.is_alphabetic() {
            debug!("ignoring non-letter guess {:?}", letter);
            return self.state();
        }
        if !self.accepts_input() {
            debug!("ignoring guess {:?} in phase {:?}", letter, self.round.phase);
            return self.state();
        }

        let letter = uppercase(letter);
        let team = self.round.current_team;
        self.round.guessed_letters.push_back(letter);

        let word = &self.words[self.round.word_index];
        let len = word.len();
        let hidden = word.positions_of(letter).find(|&p| !self.round.is_shown(p));

        match hidden {
            Some(position) => {
                debug!("{} reveals {} at {}", team, letter, position);
                self.round.revealed_positions.push_back(position);
                self.events.push(QuestEvent::LetterRevealed { team, letter, position });
                if self.round.is_complete(len) {
                    self.resolve_win();
                }
            }
            None => self.record_wrong_guess(team, letter),
        }

        self.state()
    }

    /// End the current tribe's turn without solving the word.
    ///
    /// A locked-out tribe may pass before its automatic pass fires; the
    /// automatic pass is then cancelled.
    pub fn pass_question(&mut self) -> GameState {
        if self.round.phase == Phase::Playing {
            // While playing, the only pending transition is the auto-pass
            self.cancel_transition();
            debug!("{} passes", self.round.current_team);
            self.end_turn();
        }
        self.state()
    }

    // === Time ===

    /// Advance the logical clock by `units`, firing due transitions.
    pub fn advance_time(&mut self, units: u64) -> GameState {
        let target = self.clock.saturating_add(units);
        while let Some(transition) = self.timer.take_due(target) {
            self.transition = None;
            self.clock = self.clock.max(transition.due_at);
            self.apply_transition(transition.kind);
        }
        self.clock = target;
        self.state()
    }

    /// Fire the pending transition now instead of waiting for it.
    pub fn fire_pending(&mut self) -> GameState {
        if let Some(transition) = self.timer.take() {
            self.transition = None;
            self.apply_transition(transition.kind);
        }
        self.state()
    }

    // === Queries ===

    /// Snapshot of the whole game.
    #[must_use]
    pub fn state(&self) -> GameState {
        let word = self.current_word();
        GameState {
            game_id: self.game_id,
            clock: self.clock,
            teams: self.teams.clone(),
            scores: self.scores.as_slice().to_vec(),
            leaderboard: self.leaderboard(),
            word_count: self.words.len(),
            word_index: self.round.word_index,
            word_points: self.payout(),
            assigned_team: self.round.assigned_team,
            current_team: self.round.current_team,
            attempted_teams: self.round.attempted_teams.clone(),
            guessed_letters: self.round.guessed_letters.clone(),
            revealed_positions: self.round.revealed_positions.clone(),
            default_revealed_positions: self.round.default_revealed_positions.clone(),
            tiles: self.round.display(word),
            revealed_word: self.round.phase.reveals_word().then(|| word.text.clone()),
            wrong_guess_count: self.round.wrong_guess_count,
            max_wrong_guesses: self.config.max_wrong_guesses,
            is_passed_question: self.round.is_passed_question,
            phase: self.round.phase,
            pending: self.timer.pending().copied(),
        }
    }

    /// Teams by descending score; ties keep input order.
    #[must_use]
    pub fn leaderboard(&self) -> Vec<LeaderboardEntry> {
        view::leaderboard(&self.teams, self.scores.as_slice())
    }

    /// Take the events recorded since the last call.
    pub fn drain_events(&mut self) -> Vec<QuestEvent> {
        std::mem::take(&mut self.events)
    }

    #[must_use]
    pub fn config(&self) -> &QuestConfig {
        &self.config
    }

    #[must_use]
    pub fn round(&self) -> &Round {
        &self.round
    }

    #[must_use]
    pub fn current_word(&self) -> &Word {
        &self.words[self.round.word_index]
    }

    #[must_use]
    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    #[must_use]
    pub fn team_count(&self) -> usize {
        self.teams.len()
    }

    #[must_use]
    pub fn score(&self, team: TeamIndex) -> u32 {
        self.scores[team]
    }

    /// Score of a team by store identity.
    #[must_use]
    pub fn score_of(&self, id: TeamId) -> Option<u32> {
        let slot = self.teams.iter().position(|t| t.id == id)?;
        Some(self.scores[TeamIndex::new(slot as u8)])
    }

    #[must_use]
    pub fn game_id(&self) -> Option<GameId> {
        self.game_id
    }

    #[must_use]
    pub fn clock(&self) -> u64 {
        self.clock
    }

    #[must_use]
    pub fn pending(&self) -> Option<&ScheduledTransition> {
        self.timer.pending()
    }

    /// Score writes the store rejected during this game.
    #[must_use]
    pub fn write_failures(&self) -> usize {
        self.write_failures
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.round.phase == Phase::Finished
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    // === Rules ===

    fn accepts_input(&self) -> bool {
        self.round.phase == Phase::Playing && self.timer.is_idle()
    }

    /// Gold the current tribe would earn by solving the word now.
    fn payout(&self) -> u32 {
        if self.round.is_passed_question {
            self.config.pass_bonus
        } else {
            self.current_word().points
        }
    }

    fn record_wrong_guess(&mut self, team: TeamIndex, letter: char) {
        self.round.wrong_guess_count += 1;
        let wrong_guesses = self.round.wrong_guess_count;
        debug!("{} wrong guess {} ({}/{})", team, letter, wrong_guesses, self.config.max_wrong_guesses);
        self.events.push(QuestEvent::WrongGuess { team, letter, wrong_guesses });

        if wrong_guesses >= self.config.max_wrong_guesses {
            info!("{} is out of guesses", team);
            self.events.push(QuestEvent::LockedOut { team });
            self.schedule(self.config.auto_pass_delay, TransitionKind::AutoPass);
        }
    }

    fn resolve_win(&mut self) {
        let team = self.round.current_team;
        let gold = self.payout();

        self.round.phase = Phase::Won;
        self.round.mark_attempted(team);
        let total = self.scores.credit(team, gold);

        info!(
            "{} solved word {} for {} gold (total {})",
            team, self.round.word_index, gold, total
        );
        self.events.push(QuestEvent::WordSolved {
            team,
            word_index: self.round.word_index,
            gold,
            total,
        });

        self.persist_score(team, total);
        self.schedule(self.config.win_delay, TransitionKind::AdvanceWord);
    }

    /// The current tribe's turn ends in failure.
    fn end_turn(&mut self) {
        let from = self.round.current_team;
        self.round.mark_attempted(from);

        match self.round.next_unattempted(self.teams.len()) {
            Some(to) => {
                self.round.current_team = to;
                self.round.is_passed_question = true;
                self.begin_turn();
                debug!("word {} passes from {} to {}", self.round.word_index, from, to);
                self.events.push(QuestEvent::TeamPassed { from, to });
            }
            None => {
                self.round.phase = Phase::Lost;
                info!("word {} lost by every tribe", self.round.word_index);
                self.events.push(QuestEvent::WordLost {
                    word_index: self.round.word_index,
                });
                self.schedule(self.config.loss_delay, TransitionKind::AdvanceWord);
            }
        }
    }

    fn begin_turn(&mut self) {
        self.cancel_transition();
        self.round.reset_turn();
    }

    fn advance_word(&mut self) {
        self.cancel_transition();
        let next = self.round.word_index + 1;

        if next < self.words.len() {
            self.round = open_round(&self.config, &mut self.rng, &self.words, next, self.teams.len());
            debug!("word {} goes to {}", next, self.round.assigned_team);
            self.events.push(QuestEvent::WordAdvanced {
                word_index: next,
                assigned_team: self.round.assigned_team,
            });
        } else {
            self.round.phase = Phase::Finished;
            info!("game over after {} words", self.words.len());
            self.events.push(QuestEvent::GameFinished);
        }
    }

    fn schedule(&mut self, delay: u64, kind: TransitionKind) {
        let handle = self.timer.schedule(self.clock, delay, kind);
        debug!("{} {:?} due at {}", handle, kind, self.clock.saturating_add(delay));
        self.transition = Some(handle);
    }

    fn cancel_transition(&mut self) {
        if let Some(handle) = self.transition.take() {
            if self.timer.cancel(handle) {
                debug!("{} cancelled", handle);
            }
        }
    }

    fn apply_transition(&mut self, kind: TransitionKind) {
        match kind {
            TransitionKind::AutoPass => {
                if self.round.phase == Phase::Playing {
                    self.end_turn();
                }
            }
            TransitionKind::AdvanceWord => {
                if matches!(self.round.phase, Phase::Won | Phase::Lost) {
                    self.advance_word();
                }
            }
        }
    }

    // === Persistence ===

    fn register_game(&mut self) {
        self.game_id = match self.store.create_game(&self.teams) {
            Ok(id) => {
                if let Err(err) = self.store.init_scores(id, &self.teams) {
                    warn!("failed to initialize scores for {}: {}", id, err);
                }
                Some(id)
            }
            Err(err) => {
                warn!("failed to create game, scores will not be saved: {}", err);
                None
            }
        };

        info!(
            "quest started: {} tribes, {} words, game {:?}",
            self.teams.len(),
            self.words.len(),
            self.game_id
        );
    }

    fn persist_score(&mut self, team: TeamIndex, total: u32) {
        let Some(game) = self.game_id else {
            debug!("no durable game, skipping score write for {}", team);
            return;
        };
        let id = self.teams[team.index()].id;
        if let Err(err) = self.store.update_score(game, id, total) {
            warn!("failed to save score {} for {}: {}", total, id, err);
            self.write_failures += 1;
        }
    }
}

/// Uppercase a guess when that maps to a single character.
fn uppercase(letter: char) -> char {
    let mut upper = letter.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(c), None) => c,
        _ => letter,
    }
}

/// Validate and normalize setup input.
fn check_setup(teams: Vec<Team>, mut words: Vec<Word>) -> Result<(Vec<Team>, Vec<Word>), SetupError> {
    if teams.is_empty() {
        return Err(SetupError::NoTeams);
    }
    if teams.len() > 255 {
        return Err(SetupError::TooManyTeams(teams.len()));
    }
    if words.is_empty() {
        return Err(SetupError::NoWords);
    }

    for (index, word) in words.iter_mut().enumerate() {
        word.text.make_ascii_uppercase();
        if !word.is_valid() {
            return Err(SetupError::InvalidWord {
                index,
                text: word.text.clone(),
            });
        }
    }

    Ok((teams, words))
}

/// Open the word at `index` with freshly drawn hint tiles.
fn open_round(
    config: &QuestConfig,
    rng: &mut QuestRng,
    words: &[Word],
    index: usize,
    team_count: usize,
) -> Round {
    let len = words[index].len();
    let hints = rng.sample_positions(len, config.hint_count(len));
    Round::new(index, team_count, hints)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordId;
    use crate::store::InMemoryStore;

    fn tribes(n: u32) -> Vec<Team> {
        (0..n)
            .map(|i| Team::new(TeamId::new(i + 1), format!("Tribe{}", i), "gray"))
            .collect()
    }

    fn words(texts: &[&str]) -> Vec<Word> {
        texts
            .iter()
            .enumerate()
            .map(|(i, t)| Word::new(WordId::new(i as u32), t, 10))
            .collect()
    }

    fn engine(n: u32, texts: &[&str]) -> QuestEngine<InMemoryStore> {
        QuestEngine::start(QuestConfig::default(), InMemoryStore::new(), tribes(n), words(texts), 42)
            .unwrap()
    }

    #[test]
    fn test_setup_errors() {
        let store = InMemoryStore::new();
        let config = QuestConfig::default();

        let err = QuestEngine::start(config.clone(), store.clone(), vec![], words(&["CAT"]), 1).err();
        assert_eq!(err, Some(SetupError::NoTeams));

        let err = QuestEngine::start(config.clone(), store.clone(), tribes(2), vec![], 1).err();
        assert_eq!(err, Some(SetupError::NoWords));

        let err = QuestEngine::start(config, store, tribes(2), words(&["CAT", "NO WAY"]), 1).err();
        assert!(matches!(err, Some(SetupError::InvalidWord { index: 1, .. })));
    }

    #[test]
    fn test_lowercase_words_are_normalized() {
        let raw = vec![Word {
            id: WordId::new(1),
            text: "cat".into(),
            points: 3,
        }];
        let engine =
            QuestEngine::start(QuestConfig::default(), InMemoryStore::new(), tribes(2), raw, 1).unwrap();
        assert_eq!(engine.current_word().text, "CAT");
    }

    #[test]
    fn test_non_letters_are_ignored() {
        let mut e = engine(4, &["CAT"]);
        let state = e.guess_letter('7');
        assert!(state.guessed_letters.is_empty());
        assert_eq!(state.wrong_guess_count, 0);
    }

    #[test]
    fn test_accented_letter_is_a_wrong_guess() {
        let mut e = engine(4, &["CAT"]);
        let state = e.guess_letter('é');
        assert_eq!(state.guessed_letters.iter().copied().collect::<Vec<_>>(), vec!['É']);
        assert_eq!(state.wrong_guess_count, 1);
        assert!(state.revealed_positions.is_empty());

        let state = e.guess_letter('Ñ');
        assert_eq!(state.guessed_letters.len(), 2);
        assert_eq!(state.wrong_guess_count, 2);
    }

    #[test]
    fn test_uppercase_keeps_multi_char_mappings() {
        assert_eq!(uppercase('q'), 'Q');
        assert_eq!(uppercase('ñ'), 'Ñ');
        assert_eq!(uppercase('ß'), 'ß');
    }

    #[test]
    fn test_lowercase_guess_counts() {
        let mut e = engine(4, &["CAT"]);
        let state = e.guess_letter('c');
        assert_eq!(state.guessed_letters.iter().copied().collect::<Vec<_>>(), vec!['C']);
        assert_eq!(state.revealed_positions.iter().copied().collect::<Vec<_>>(), vec![0]);
    }

    #[test]
    fn test_input_locked_while_transition_pending() {
        let mut e = engine(4, &["DOG"]);
        for letter in ['X', 'Y', 'Z', 'Q'] {
            e.guess_letter(letter);
        }
        assert!(e.pending().is_some());

        let state = e.guess_letter('D');
        assert_eq!(state.guessed_letters.len(), 4);
        assert_eq!(state.wrong_guess_count, 4);
        assert!(state.revealed_positions.is_empty());
    }

    #[test]
    fn test_pass_during_lockout_cancels_auto_pass() {
        let mut e = engine(4, &["DOG"]);
        for letter in ['X', 'Y', 'Z', 'Q'] {
            e.guess_letter(letter);
        }
        assert!(e.transition.is_some());

        let state = e.pass_question();
        assert_eq!(state.current_team, TeamIndex::new(1));
        assert_eq!(state.attempted_teams.as_slice(), &[TeamIndex::new(0)]);
        assert!(state.pending.is_none());
        assert!(e.transition.is_none());

        // The cancelled auto-pass never reaches tribe 1
        let state = e.advance_time(10);
        assert_eq!(state.current_team, TeamIndex::new(1));
        assert_eq!(state.attempted_teams.len(), 1);
    }

    #[test]
    fn test_new_word_cancels_held_handle() {
        let mut e = engine(2, &["AT", "GO"]);
        e.guess_letter('A');
        e.guess_letter('T');
        let handle = e.transition.unwrap();
        assert_eq!(e.pending().unwrap().handle, handle);

        e.fire_pending();
        assert_eq!(e.round().word_index, 1);
        assert!(e.transition.is_none());
        assert!(!e.timer.cancel(handle));
    }

    #[test]
    fn test_payout_drops_after_pass() {
        let mut e = engine(4, &["CAT"]);
        assert_eq!(e.state().word_points, 10);
        e.pass_question();
        assert_eq!(e.state().word_points, 5);
    }

    #[test]
    fn test_score_of_by_identity() {
        let mut e = engine(2, &["AT"]);
        e.guess_letter('A');
        e.guess_letter('T');
        assert_eq!(e.score_of(TeamId::new(1)), Some(10));
        assert_eq!(e.score_of(TeamId::new(2)), Some(0));
        assert_eq!(e.score_of(TeamId::new(99)), None);
    }

    #[test]
    fn test_start_game_resets() {
        let mut e = engine(2, &["AT", "GO"]);
        e.guess_letter('A');
        e.guess_letter('T');
        assert!(e.pending().is_some());

        let state = e.start_game(tribes(3), words(&["SUN"])).unwrap();
        assert_eq!(state.scores, vec![0, 0, 0]);
        assert_eq!(state.word_index, 0);
        assert_eq!(state.phase, Phase::Playing);
        assert!(state.pending.is_none());
        assert!(e.drain_events().is_empty());
        assert_eq!(e.store().game_count(), 2);
    }

    #[test]
    fn test_failed_restart_keeps_running_game() {
        let mut e = engine(2, &["AT"]);
        e.guess_letter('A');
        assert!(e.start_game(vec![], words(&["SUN"])).is_err());
        assert_eq!(e.current_word().text, "AT");
        assert_eq!(e.round().guessed_letters.len(), 1);
    }
}
