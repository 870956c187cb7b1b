//! Game engine and state management.

extern crate alloc;

use alloc::vec::Vec;

use log::{debug, info};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::sync::Mutex;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::RequestError;
use crate::event::{GameEvent, Snapshot};
use crate::hand::Hand;
use crate::options::GameOptions;
use crate::pairs::PairRecord;
use crate::result::{Actor, GameResult};

mod go_fish;
mod old_maid;
pub mod schedule;
pub mod state;

pub use schedule::{Scheduled, Scheduler};
pub use state::{GameState, Prompt, Seat, Seats, Variant};

/// Continuations scheduled by the turn machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Step {
    /// Go Fish: deal the next opening card.
    DealCard { dealt: usize },
    /// Go Fish: the player's turn begins.
    BeginPlayerTurn,
    /// Go Fish: lay down pairs after a card arrived, then hand the turn on.
    Settle { actor: Actor, pass_turn: bool },
    /// Go Fish: the computer takes its turn.
    ComputerTurn,
    /// Go Fish: the computer asks for a rank.
    ComputerAsk,
    /// Go Fish: draw for a player whose turn started with an empty hand.
    AutoDraw,
    /// Old Maid: compact the receiver's hand after a pick.
    FinishPick { actor: Actor },
    /// Old Maid: check for the end, then let the next actor pick.
    CheckEnd,
}

/// A two-seat pair-collecting card game: the human player against the
/// computer.
///
/// The game owns the deck, both seats, the turn state and a scheduler of
/// pending continuations. Requests (`request_*`) validate against the
/// current state and either change it or are rejected without effect.
/// Transitions that a front end animates finish in scheduled steps that run
/// when the host calls [`Game::advance`]; no request is accepted while one
/// is pending.
///
/// Everything that changes is reported as a [`GameEvent`], collected with
/// [`Game::drain_events`].
pub struct Game {
    /// The rule set.
    variant: Variant,
    /// Game options.
    pub options: GameOptions,
    /// Cards not yet dealt or drawn.
    pub deck: Mutex<Deck>,
    /// Hands and collected pairs.
    pub seats: Mutex<Seats>,
    /// Current game state.
    pub state: Mutex<GameState>,
    /// Whose turn it is.
    pub turn: Mutex<Actor>,
    /// Pending player input.
    prompt: Mutex<Option<Prompt>>,
    /// Final result, once the game is over.
    result: Mutex<Option<GameResult>>,
    /// Pending continuations.
    scheduler: Mutex<Scheduler<Step>>,
    /// Events not yet drained by the presentation layer.
    events: Mutex<Vec<GameEvent>>,
    /// Random number generator.
    rng: Mutex<ChaCha8Rng>,
}

impl Game {
    /// Creates a game with the given seed and starts it.
    ///
    /// Go Fish deals its opening hands through scheduled steps, so the game
    /// is busy until the host advances the clock. Old Maid deals at once.
    ///
    /// # Example
    ///
    /// ```
    /// use pairgames::{Game, GameOptions, GameState, Timing, Variant};
    ///
    /// let options = GameOptions::default().with_timing(Timing::instant());
    /// let game = Game::new(Variant::GoFish, options, 42);
    /// game.run_until_idle();
    /// assert_eq!(game.state(), GameState::PlayerTurn);
    /// ```
    #[must_use]
    pub fn new(variant: Variant, options: GameOptions, seed: u64) -> Self {
        let game = Self {
            variant,
            options,
            deck: Mutex::new(Deck::empty()),
            seats: Mutex::new(Seats::default()),
            state: Mutex::new(GameState::Dealing),
            turn: Mutex::new(Actor::Player),
            prompt: Mutex::new(None),
            result: Mutex::new(None),
            scheduler: Mutex::new(Scheduler::new()),
            events: Mutex::new(Vec::new()),
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        };
        game.new_game();
        game
    }

    /// Abandons the current game and starts a fresh one.
    ///
    /// Pending continuations are cancelled; the random sequence carries on.
    pub fn new_game(&self) {
        self.scheduler.lock().cancel_all();
        *self.seats.lock() = Seats::default();
        *self.prompt.lock() = None;
        *self.result.lock() = None;
        *self.turn.lock() = Actor::Player;
        *self.state.lock() = GameState::Dealing;

        let mut deck = Deck::create(self.variant.uses_old_maid());
        self.rng.with(|rng| deck.shuffle(rng));
        *self.deck.lock() = deck;

        info!("starting a new game of {}", self.variant.name());

        match self.variant {
            Variant::GoFish => self.start_go_fish(),
            Variant::OldMaid => self.start_old_maid(),
        }
    }

    /// Moves the clock forward by `elapsed` milliseconds and runs every step
    /// that falls due, including steps scheduled by those steps.
    ///
    /// Returns the number of steps run.
    pub fn advance(&self, elapsed: u64) -> usize {
        let deadline = self.scheduler.lock().now().saturating_add(elapsed);
        let mut ran = 0;

        loop {
            // Bind first so the scheduler lock is released before the step runs.
            let next = self.scheduler.lock().pop_due(deadline);
            let Some(step) = next else { break };
            self.run_step(step);
            ran += 1;
        }

        self.scheduler.lock().set_now(deadline);
        ran
    }

    /// Runs every pending step in due order, however far in the future.
    ///
    /// Returns the number of steps run.
    pub fn run_until_idle(&self) -> usize {
        let mut ran = 0;
        loop {
            let next = self.scheduler.lock().pop_next();
            let Some(step) = next else { break };
            self.run_step(step);
            ran += 1;
        }
        ran
    }

    /// Returns whether a scheduled transition is still pending.
    pub fn is_busy(&self) -> bool {
        !self.scheduler.lock().is_empty()
    }

    /// Milliseconds until the next scheduled step, if any.
    pub fn next_due_in(&self) -> Option<u64> {
        self.scheduler.lock().next_due_in()
    }

    /// Current clock value in milliseconds.
    pub fn now(&self) -> u64 {
        self.scheduler.lock().now()
    }

    /// Removes and returns all events emitted since the last call.
    pub fn drain_events(&self) -> Vec<GameEvent> {
        core::mem::take(&mut *self.events.lock())
    }

    /// Returns the rule set.
    pub const fn variant(&self) -> Variant {
        self.variant
    }

    /// Returns the current game state.
    pub fn state(&self) -> GameState {
        *self.state.lock()
    }

    /// Returns whose turn it is.
    pub fn current_turn(&self) -> Actor {
        *self.turn.lock()
    }

    /// Returns whether the game has ended.
    pub fn is_game_over(&self) -> bool {
        self.state() == GameState::GameOver
    }

    /// Returns the input the player is expected to give, if any.
    pub fn pending_prompt(&self) -> Option<Prompt> {
        *self.prompt.lock()
    }

    /// Returns the final result once the game is over.
    pub fn result(&self) -> Option<GameResult> {
        *self.result.lock()
    }

    /// Returns the number of cards remaining in the deck.
    pub fn cards_remaining(&self) -> usize {
        self.deck.lock().len()
    }

    /// Returns a copy of `actor`'s hand.
    pub fn hand(&self, actor: Actor) -> Hand {
        self.seats.lock().get(actor).hand.clone()
    }

    /// Returns the pairs `actor` has collected.
    pub fn pairs(&self, actor: Actor) -> Vec<PairRecord> {
        self.seats.lock().get(actor).pairs.clone()
    }

    /// Returns how many pairs `actor` has collected.
    pub fn pair_count(&self, actor: Actor) -> usize {
        self.seats.lock().get(actor).pairs.len()
    }

    /// Ends the game if the rule set's end condition holds.
    ///
    /// Go Fish ends when the deck and both hands are empty; Old Maid ends
    /// when one card is left between both hands. The engine runs this check
    /// itself after every move; calling it again is harmless.
    ///
    /// Returns whether the game is over.
    pub fn check_game_over(&self) -> bool {
        if self.is_game_over() {
            return true;
        }
        match self.variant {
            Variant::GoFish => self.check_go_fish_over(),
            Variant::OldMaid => self.check_old_maid_over(),
        }
    }

    /// Captures everything the presentation layer draws.
    pub fn snapshot(&self) -> Snapshot {
        let (player_hand, computer_hand, player_pairs, computer_pairs) = self.seats.with(|seats| {
            (
                seats.player.hand.cards().to_vec(),
                seats.computer.hand.cards().to_vec(),
                seats.player.pairs.clone(),
                seats.computer.pairs.clone(),
            )
        });

        Snapshot {
            variant: self.variant,
            state: self.state(),
            turn: self.current_turn(),
            prompt: self.pending_prompt(),
            busy: self.is_busy(),
            deck_remaining: self.cards_remaining(),
            player_hand,
            computer_hand,
            player_pairs,
            computer_pairs,
        }
    }

    fn run_step(&self, step: Step) {
        debug!("running {step:?} at {}ms", self.now());
        match step {
            Step::DealCard { dealt } => self.deal_card(dealt),
            Step::BeginPlayerTurn => self.begin_player_turn(),
            Step::Settle { actor, pass_turn } => self.settle(actor, pass_turn),
            Step::ComputerTurn => self.computer_turn(),
            Step::ComputerAsk => self.computer_ask(),
            Step::AutoDraw => self.auto_draw(),
            Step::FinishPick { actor } => self.finish_pick(actor),
            Step::CheckEnd => self.check_end(),
        }
    }

    fn schedule(&self, delay: u64, step: Step) {
        self.scheduler.lock().schedule(delay, step);
    }

    fn emit(&self, event: GameEvent) {
        self.events.lock().push(event);
    }

    /// Emits a fresh snapshot.
    fn notify(&self) {
        let snapshot = self.snapshot();
        self.emit(GameEvent::StateChanged(snapshot));
    }

    fn set_turn(&self, actor: Actor, state: GameState) {
        *self.turn.lock() = actor;
        *self.state.lock() = state;
    }

    fn set_prompt(&self, prompt: Option<Prompt>) {
        *self.prompt.lock() = prompt;
        if let Some(prompt) = prompt {
            self.emit(GameEvent::Prompt(prompt));
        }
    }

    /// Draws the top card of the deck into `actor`'s hand.
    fn draw_into(&self, actor: Actor) -> Option<Card> {
        let card = self.deck.lock().draw()?;
        self.seats.lock().get_mut(actor).hand.add_card(card);
        log::trace!("{actor:?} drew {card}");
        Some(card)
    }

    /// Records freshly laid pairs for `actor` and reports them.
    fn collect(&self, actor: Actor, pairs: Vec<PairRecord>) {
        if pairs.is_empty() {
            return;
        }
        debug!("{actor:?} laid down {} pair(s)", pairs.len());
        self.seats
            .lock()
            .get_mut(actor)
            .pairs
            .extend(pairs.iter().copied());
        self.emit(GameEvent::PairsCollected { actor, pairs });
    }

    fn random_index(&self, len: usize) -> usize {
        self.rng.with(|rng| rng.random_range(0..len))
    }

    fn finish(&self, result: GameResult) {
        info!(
            "{} over: {:?} ({} pairs to {})",
            self.variant.name(),
            result.winner,
            result.player_pairs,
            result.computer_pairs
        );
        self.scheduler.lock().cancel_all();
        *self.state.lock() = GameState::GameOver;
        *self.prompt.lock() = None;
        *self.result.lock() = Some(result);
        self.emit(GameEvent::GameOver(result));
        self.notify();
    }

    /// Checks the preconditions every request shares.
    fn ensure_ready(&self, variant: Variant, expected: GameState) -> Result<(), RequestError> {
        if self.variant != variant {
            return Err(RequestError::WrongVariant);
        }
        if self.is_game_over() {
            return Err(RequestError::GameOver);
        }
        if self.is_busy() {
            return Err(RequestError::TransitionInFlight);
        }
        if self.state() != expected {
            return Err(RequestError::InvalidState);
        }
        Ok(())
    }
}

fn log_rejection(request: &str) -> impl Fn(&RequestError) + '_ {
    move |err| debug!("rejected {request}: {err}")
}
