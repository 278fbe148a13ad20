//! The Set game engine.
//!
//! `SetGame` owns the draw pile, the tableau and all counters, and applies
//! every transition: dealing, choosing, matching, hinting and scoring.
//!
//! ## Choosing
//!
//! `choose` looks the card up by id (unknown ids are ignored), clears any
//! hint highlight and then acts on the chosen card's state:
//!
//! | state                | effect                                        |
//! |----------------------|-----------------------------------------------|
//! | `None` / `Hinted`    | select it, then evaluate the selection        |
//! | `Selected`           | deselect it                                   |
//! | `Matched`            | acknowledge the set and replace its cards     |
//! | `Mismatched`         | clear the mismatch                            |
//!
//! Evaluating a selection first dismisses a showing mismatch, or replaces a
//! showing set, and only otherwise checks whether three cards are selected.
//!
//! ```
//! use set_game::SetGame;
//!
//! let mut game = SetGame::new(42);
//! game.start_game();
//! assert_eq!(game.tableau().len(), 12);
//! assert_eq!(game.draw_pile_count(), 69);
//!
//! if let Some(found) = game.first_set() {
//!     let ids: Vec<_> = found.iter().map(|&i| game.tableau()[i].id).collect();
//!     for id in ids {
//!         game.choose(id);
//!     }
//!     assert_eq!(game.set_count(), 1);
//!     assert!(game.is_marked_set_visible());
//! }
//! ```

use std::time::{Duration, Instant};

use im::Vector;
use smallvec::SmallVec;

use super::scoring;
use super::snapshot::GameSnapshot;
use super::timer::PlayTimer;
use crate::cards::{generate_deck, Card, CardId, CardIdAllocator, SelectionState};
use crate::core::{Clock, GameConfig, GameRng, SetGameError, SystemClock};
use crate::rules::{self, SetIndices};

/// Tableau positions sharing a selection state. Rarely more than three.
type Positions = SmallVec<[usize; 3]>;

/// A single game of Set.
#[derive(Clone, Debug)]
pub struct SetGame<C: Clock = SystemClock> {
    config: GameConfig,
    clock: C,
    rng: GameRng,
    ids: CardIdAllocator,

    draw_pile: Vector<Card>,
    tableau: Vector<Card>,

    score: i64,
    set_count: u32,
    hint_count: u32,
    unnecessary_deal_count: u32,

    time_of_last_set: Instant,
    timer: PlayTimer,

    is_marked_set_visible: bool,
    is_mismatched_set_visible: bool,
}

impl SetGame<SystemClock> {
    /// Create a game with the default rules, shuffled with `seed`.
    ///
    /// The tableau starts empty; call [`start_game`](Self::start_game) to
    /// deal the opening cards.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::build(GameConfig::default(), GameRng::new(seed), SystemClock)
    }

    /// Create a game shuffled from OS entropy.
    #[must_use]
    pub fn random() -> Self {
        Self::build(GameConfig::default(), GameRng::from_entropy(), SystemClock)
    }
}

impl<C: Clock> SetGame<C> {
    /// Create a game with the default rules and a custom clock.
    #[must_use]
    pub fn with_clock(seed: u64, clock: C) -> Self {
        Self::build(GameConfig::default(), GameRng::new(seed), clock)
    }

    /// Create a game with custom rules.
    pub fn with_config(config: GameConfig, seed: u64, clock: C) -> Result<Self, SetGameError> {
        config.validate()?;
        Ok(Self::build(config, GameRng::new(seed), clock))
    }

    fn build(config: GameConfig, rng: GameRng, clock: C) -> Self {
        let now = clock.now();
        let mut game = Self {
            config,
            clock,
            rng,
            ids: CardIdAllocator::new(),
            draw_pile: Vector::new(),
            tableau: Vector::new(),
            score: 0,
            set_count: 0,
            hint_count: 0,
            unnecessary_deal_count: 0,
            time_of_last_set: now,
            timer: PlayTimer::new(),
            is_marked_set_visible: false,
            is_mismatched_set_visible: false,
        };
        game.shuffle_new_deck();
        game
    }

    fn shuffle_new_deck(&mut self) {
        let mut deck = generate_deck(&mut self.ids);
        self.rng.shuffle(&mut deck);
        self.draw_pile = deck.into_iter().collect();
    }

    /// Replace this game with a fresh one and deal the opening tableau.
    ///
    /// The next shuffle is seeded from the current RNG, so a seeded session
    /// replays identically. Card ids restart at 1, so a reset game numbers
    /// its cards exactly like a new one. Play time restarts from zero; a
    /// running timer keeps running.
    pub fn reset(&mut self) {
        let now = self.clock.now();
        let was_running = self.timer.is_running();

        self.rng = GameRng::new(self.rng.next_seed());
        self.ids = CardIdAllocator::new();
        self.tableau = Vector::new();
        self.shuffle_new_deck();

        self.score = 0;
        self.set_count = 0;
        self.hint_count = 0;
        self.unnecessary_deal_count = 0;
        self.time_of_last_set = now;
        self.timer = PlayTimer::new();
        if was_running {
            self.timer.start(now);
        }
        self.is_marked_set_visible = false;
        self.is_mismatched_set_visible = false;

        self.start_game();
    }

    // === Dealing ===

    /// Deal the opening tableau without any penalty.
    pub fn start_game(&mut self) {
        for _ in 0..self.config.tableau_size {
            self.deal_one_card();
        }
    }

    /// Move the next draw-pile card to the end of the tableau.
    ///
    /// Returns the dealt card's id, or `None` if the draw pile is empty.
    pub fn deal_one_card(&mut self) -> Option<CardId> {
        let card = self.draw_pile.pop_front()?;
        let id = card.id;
        self.tableau.push_back(card);
        Some(id)
    }

    /// Deal up to `quantity` cards. Returns how many were dealt.
    ///
    /// Asking for more cards while a full tableau already shows a set costs
    /// `deal_penalty`, once per call.
    pub fn deal_cards(&mut self, quantity: usize) -> usize {
        if quantity > 0
            && self.tableau.len() >= self.config.tableau_size
            && rules::is_set_available(&self.tableau)
        {
            self.unnecessary_deal_count += 1;
            self.score -= self.config.deal_penalty;
        }

        (0..quantity).filter_map(|_| self.deal_one_card()).count()
    }

    // === Choosing ===

    /// Apply a player's click on the card with the given id.
    pub fn choose(&mut self, id: CardId) {
        self.is_marked_set_visible = false;
        self.is_mismatched_set_visible = false;

        let Some(index) = self.position_of(id) else {
            return;
        };

        let state = self.tableau[index].selection;
        self.clear_state(SelectionState::Hinted);

        match state {
            SelectionState::None | SelectionState::Hinted => {
                self.set_selection(index, SelectionState::Selected);
                self.evaluate_selection();
            }
            SelectionState::Selected => self.set_selection(index, SelectionState::None),
            SelectionState::Matched => self.replace_matched(),
            SelectionState::Mismatched => self.clear_state(SelectionState::Mismatched),
        }
    }

    fn evaluate_selection(&mut self) {
        let mismatched = self.positions(SelectionState::Mismatched);
        if !mismatched.is_empty() {
            for index in mismatched {
                self.set_selection(index, SelectionState::None);
            }
            return;
        }

        if !self.positions(SelectionState::Matched).is_empty() {
            self.replace_matched();
            return;
        }

        let selected = self.positions(SelectionState::Selected);
        if selected.len() != 3 {
            return;
        }

        if rules::is_valid_set(&self.tableau, &selected) {
            let now = self.clock.now();
            let since_last_set = now.saturating_duration_since(self.time_of_last_set);

            self.set_count += 1;
            self.score += scoring::set_reward(&self.config, self.tableau.len(), since_last_set);
            for index in selected {
                self.set_selection(index, SelectionState::Matched);
            }
            self.time_of_last_set = now;
            self.is_marked_set_visible = true;
        } else {
            self.score -= self.config.mismatch_penalty;
            for index in selected {
                self.set_selection(index, SelectionState::Mismatched);
            }
            self.is_mismatched_set_visible = true;
        }
    }

    /// Refill or remove every matched position.
    ///
    /// Positions are visited from the highest index down because removal
    /// shifts everything after it.
    fn replace_matched(&mut self) {
        let matched = self.positions(SelectionState::Matched);

        for &index in matched.iter().rev() {
            if !self.draw_pile.is_empty() && self.tableau.len() <= self.config.tableau_size {
                if let Some(card) = self.draw_pile.pop_front() {
                    self.tableau.set(index, card);
                }
            } else {
                self.tableau.remove(index);
            }
        }
    }

    // === Hints ===

    /// Deselect everything and highlight the given tableau positions.
    ///
    /// A completed set that is still showing is replaced first, so its cards
    /// cannot be chosen and scored again. Positions refer to the tableau
    /// after that replacement.
    ///
    /// Costs `hint_penalty` per highlighted card and counts as one hint.
    /// Out-of-range and repeated positions are ignored; if nothing valid
    /// remains no hint is marked.
    pub fn mark_hint(&mut self, indices: &[usize]) {
        self.replace_matched();

        let mut targets: Positions = indices
            .iter()
            .copied()
            .filter(|&i| i < self.tableau.len())
            .collect();
        targets.sort_unstable();
        targets.dedup();

        if targets.is_empty() {
            return;
        }

        for card in self.tableau.iter_mut() {
            card.selection = SelectionState::None;
        }
        for &index in &targets {
            self.set_selection(index, SelectionState::Hinted);
        }

        self.score -= self.config.hint_penalty * targets.len() as i64;
        self.hint_count += 1;
    }

    /// Find a set and highlight part of it.
    ///
    /// A completed set that is still showing is acknowledged first, as if
    /// one of its cards had been chosen. Then the first set on the tableau
    /// is found and its first `hint_reveal_count` cards are highlighted.
    /// Returns the whole set, or `None` if the tableau has none.
    pub fn hint(&mut self) -> Option<SetIndices> {
        let showing = self
            .tableau
            .iter()
            .find(|card| card.is(SelectionState::Matched))
            .map(|card| card.id);
        if let Some(id) = showing {
            self.choose(id);
        }

        let found = rules::find_first_set(&self.tableau)?;
        let reveal = self.config.hint_reveal_count.min(found.len());
        self.mark_hint(&found[..reveal]);
        Some(found)
    }

    /// First set on the tableau, without marking anything.
    #[must_use]
    pub fn first_set(&self) -> Option<SetIndices> {
        rules::find_first_set(&self.tableau)
    }

    /// Every set on the tableau, for callers that pick one at random.
    #[must_use]
    pub fn all_sets(&self) -> Vec<SetIndices> {
        rules::find_all_sets(&self.tableau)
    }

    /// True if the given tableau positions hold a set.
    #[must_use]
    pub fn is_valid_set(&self, indices: &[usize]) -> bool {
        rules::is_valid_set(&self.tableau, indices)
    }

    // === Timing ===

    /// Resume play-time measurement.
    pub fn start_timer(&mut self) {
        self.timer.start(self.clock.now());
    }

    /// Pause play-time measurement.
    pub fn stop_timer(&mut self) {
        self.timer.stop(self.clock.now());
    }

    #[must_use]
    pub fn is_timer_running(&self) -> bool {
        self.timer.is_running()
    }

    /// Total active play time, including the running interval.
    #[must_use]
    pub fn elapsed_play_time(&self) -> Duration {
        self.timer.elapsed(self.clock.now())
    }

    /// Time since the last set, or since the game began.
    #[must_use]
    pub fn time_since_last_set(&self) -> Duration {
        self.clock.now().saturating_duration_since(self.time_of_last_set)
    }

    /// Time left before a set no longer earns any bonus.
    #[must_use]
    pub fn bonus_time_left(&self) -> Duration {
        scoring::bonus_time_left(&self.config, self.time_since_last_set())
    }

    /// Unscaled bonus a set found right now would earn.
    #[must_use]
    pub fn current_bonus(&self) -> i64 {
        scoring::time_bonus(&self.config, self.time_since_last_set())
    }

    // === Observable state ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Seed of the current shuffle.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    #[must_use]
    pub fn tableau(&self) -> &Vector<Card> {
        &self.tableau
    }

    /// Look up a visible card by id.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.tableau.iter().find(|card| card.id == id)
    }

    #[must_use]
    pub fn draw_pile_count(&self) -> usize {
        self.draw_pile.len()
    }

    #[must_use]
    pub fn score(&self) -> i64 {
        self.score
    }

    #[must_use]
    pub fn set_count(&self) -> u32 {
        self.set_count
    }

    #[must_use]
    pub fn hint_count(&self) -> u32 {
        self.hint_count
    }

    #[must_use]
    pub fn unnecessary_deal_count(&self) -> u32 {
        self.unnecessary_deal_count
    }

    /// A set was completed by the most recent `choose`.
    #[must_use]
    pub fn is_marked_set_visible(&self) -> bool {
        self.is_marked_set_visible
    }

    /// A mismatch was produced by the most recent `choose`.
    #[must_use]
    pub fn is_mismatched_set_visible(&self) -> bool {
        self.is_mismatched_set_visible
    }

    #[must_use]
    pub fn is_set_available(&self) -> bool {
        rules::is_set_available(&self.tableau)
    }

    /// Draw pile exhausted, at least one set found and none left to find.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.draw_pile.is_empty() && self.set_count > 0 && !self.is_set_available()
    }

    /// Capture the observable state.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            tableau: self.tableau.clone(),
            draw_pile_count: self.draw_pile.len(),
            score: self.score,
            set_count: self.set_count,
            hint_count: self.hint_count,
            unnecessary_deal_count: self.unnecessary_deal_count,
            elapsed_play_time: self.elapsed_play_time(),
            bonus_time_left: self.bonus_time_left(),
            is_set_available: self.is_set_available(),
            is_game_over: self.is_game_over(),
            is_marked_set_visible: self.is_marked_set_visible,
            is_mismatched_set_visible: self.is_mismatched_set_visible,
        }
    }

    // === Helpers ===

    fn position_of(&self, id: CardId) -> Option<usize> {
        self.tableau.iter().position(|card| card.id == id)
    }

    fn positions(&self, state: SelectionState) -> Positions {
        self.tableau
            .iter()
            .enumerate()
            .filter(|(_, card)| card.is(state))
            .map(|(index, _)| index)
            .collect()
    }

    fn set_selection(&mut self, index: usize, state: SelectionState) {
        if let Some(card) = self.tableau.get_mut(index) {
            card.selection = state;
        }
    }

    fn clear_state(&mut self, state: SelectionState) {
        for index in self.positions(state) {
            self.set_selection(index, SelectionState::None);
        }
    }
}
