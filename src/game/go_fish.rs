use log::debug;

use crate::error::RequestError;
use crate::event::GameEvent;
use crate::pairs::remove_pairs;
use crate::result::{Actor, GameResult, Winner};

use super::{Game, GameState, Prompt, Step, Variant, log_rejection};

impl Game {
    pub(super) fn start_go_fish(&self) {
        self.notify();
        self.schedule(0, Step::DealCard { dealt: 0 });
    }

    /// Deals one opening card, alternating player first.
    pub(super) fn deal_card(&self, dealt: usize) {
        let target = if dealt % 2 == 0 {
            Actor::Player
        } else {
            Actor::Computer
        };

        let card = if dealt < self.options.hand_size * 2 {
            self.draw_into(target)
        } else {
            None
        };

        let Some(card) = card else {
            self.collect_opening_pairs();
            return;
        };

        self.emit(GameEvent::CardDealt { to: target, card });
        self.notify();
        self.schedule(
            self.options.timing.deal,
            Step::DealCard { dealt: dealt + 1 },
        );
    }

    fn collect_opening_pairs(&self) {
        let mut laid = 0;
        for actor in [Actor::Player, Actor::Computer] {
            let pairs = self.seats.with(|seats| remove_pairs(&mut seats.get_mut(actor).hand));
            laid += pairs.len();
            self.collect(actor, pairs);
        }

        if laid == 0 {
            self.begin_player_turn();
        } else {
            self.notify();
            self.schedule(
                self.options.timing.pair_collect.saturating_mul(laid as u64),
                Step::BeginPlayerTurn,
            );
        }
    }

    /// Hands the turn to the player, drawing for them if their hand is empty.
    pub(super) fn begin_player_turn(&self) {
        self.set_turn(Actor::Player, GameState::PlayerTurn);
        if self.check_go_fish_over() {
            return;
        }

        if !self.seats.lock().player.hand.is_empty() {
            self.set_prompt(Some(Prompt::ChooseRank));
            self.notify();
            return;
        }

        if self.deck.lock().is_empty() {
            debug!("player has no cards and the deck is empty; passing the turn");
            self.pass_to_computer();
        } else {
            self.set_prompt(None);
            self.notify();
            self.schedule(self.options.timing.auto_draw, Step::AutoDraw);
        }
    }

    pub(super) fn auto_draw(&self) {
        if let Some(card) = self.draw_into(Actor::Player) {
            self.emit(GameEvent::CardDrawn {
                actor: Actor::Player,
                card,
            });
            self.notify();
            self.schedule(
                self.options.timing.draw,
                Step::Settle {
                    actor: Actor::Player,
                    pass_turn: false,
                },
            );
        } else {
            self.begin_player_turn();
        }
    }

    fn pass_to_computer(&self) {
        self.set_prompt(None);
        self.set_turn(Actor::Computer, GameState::ComputerTurn);
        self.notify();
        self.schedule(self.options.timing.computer_think, Step::ComputerTurn);
    }

    /// Lays down the pairs in `actor`'s hand after cards arrived, then either
    /// lets `actor` go again or passes the turn.
    pub(super) fn settle(&self, actor: Actor, pass_turn: bool) {
        let pairs = self.seats.with(|seats| remove_pairs(&mut seats.get_mut(actor).hand));
        self.collect(actor, pairs);

        if self.check_go_fish_over() {
            return;
        }

        let next = if pass_turn { actor.opponent() } else { actor };
        match next {
            Actor::Player => self.begin_player_turn(),
            Actor::Computer => self.pass_to_computer(),
        }
    }

    pub(super) fn computer_turn(&self) {
        self.set_turn(Actor::Computer, GameState::ComputerTurn);

        if !self.seats.lock().computer.hand.is_empty() {
            self.computer_ask();
            return;
        }

        match self.draw_into(Actor::Computer) {
            Some(card) => {
                self.emit(GameEvent::CardDrawn {
                    actor: Actor::Computer,
                    card,
                });
                self.notify();
                self.schedule(self.options.timing.draw, Step::ComputerAsk);
            }
            None => {
                if !self.check_go_fish_over() {
                    debug!("computer has no cards and the deck is empty; passing the turn");
                    self.begin_player_turn();
                }
            }
        }
    }

    /// The computer asks for the rank of a random card in its hand.
    pub(super) fn computer_ask(&self) {
        let len = self.seats.lock().computer.hand.len();
        if len == 0 {
            self.begin_player_turn();
            return;
        }

        let index = self.random_index(len);
        let rank = self.seats.lock().computer.hand.cards()[index].rank;
        debug!("computer asks for rank {rank}");

        self.set_turn(Actor::Computer, GameState::AwaitingResponse);
        self.emit(GameEvent::ComputerAsked { rank });
        self.set_prompt(Some(Prompt::RespondToAsk { rank }));
        self.notify();
    }

    /// Asks the computer for every card of `rank`.
    ///
    /// If the computer holds the rank, all its cards of that rank move to the
    /// player, pairs are laid down, and the player goes again. Otherwise the
    /// game waits for [`Game::request_draw`].
    ///
    /// # Errors
    ///
    /// Returns an error if this is not a Go Fish game, the game is over, a
    /// transition is in flight, it is not the player's turn, or the player
    /// does not hold `rank`.
    pub fn request_ask(&self, rank: u8) -> Result<(), RequestError> {
        self.try_ask(rank).inspect_err(log_rejection("ask"))
    }

    fn try_ask(&self, rank: u8) -> Result<(), RequestError> {
        self.ensure_ready(Variant::GoFish, GameState::PlayerTurn)?;

        if !self.seats.lock().player.hand.has_rank(rank) {
            return Err(RequestError::RankNotHeld);
        }

        let taken = self.seats.with(|seats| {
            let cards = seats.computer.hand.take_rank(rank);
            seats.player.hand.extend(cards.iter().copied());
            cards
        });

        if taken.is_empty() {
            debug!("player asked for rank {rank}: go fish");
            *self.state.lock() = GameState::AwaitingDraw;
            self.set_prompt(Some(Prompt::GoFish { rank }));
            self.notify();
            return Ok(());
        }

        debug!("player asked for rank {rank}: got {} card(s)", taken.len());
        self.set_prompt(None);
        self.emit(GameEvent::CardsTransferred {
            from: Actor::Computer,
            to: Actor::Player,
            cards: taken,
        });
        self.notify();
        self.schedule(
            self.options.timing.transfer,
            Step::Settle {
                actor: Actor::Player,
                pass_turn: false,
            },
        );
        Ok(())
    }

    /// Draws from the deck after a missed ask. The turn always passes to the
    /// computer afterwards, even if the card drawn is the rank asked for.
    ///
    /// With an empty deck nothing is drawn and the turn still passes.
    ///
    /// # Errors
    ///
    /// Returns an error if this is not a Go Fish game, the game is over, a
    /// transition is in flight, or no draw is pending.
    pub fn request_draw(&self) -> Result<(), RequestError> {
        self.try_draw().inspect_err(log_rejection("draw"))
    }

    fn try_draw(&self) -> Result<(), RequestError> {
        self.ensure_ready(Variant::GoFish, GameState::AwaitingDraw)?;

        self.set_prompt(None);
        let delay = match self.draw_into(Actor::Player) {
            Some(card) => {
                self.emit(GameEvent::CardDrawn {
                    actor: Actor::Player,
                    card,
                });
                self.options.timing.draw
            }
            None => 0,
        };

        self.notify();
        self.schedule(
            delay,
            Step::Settle {
                actor: Actor::Player,
                pass_turn: true,
            },
        );
        Ok(())
    }

    /// Answers the computer's ask. The answer must be truthful.
    ///
    /// Answering `true` hands every card of the asked rank to the computer,
    /// which then asks again. Answering `false` ("go fish") makes the computer
    /// draw, after which the turn passes to the player.
    ///
    /// # Errors
    ///
    /// Returns an error if this is not a Go Fish game, the game is over, a
    /// transition is in flight, no ask is pending, or the answer does not
    /// match the player's hand.
    pub fn request_respond(&self, has_card: bool) -> Result<(), RequestError> {
        self.try_respond(has_card)
            .inspect_err(log_rejection("respond"))
    }

    fn try_respond(&self, has_card: bool) -> Result<(), RequestError> {
        self.ensure_ready(Variant::GoFish, GameState::AwaitingResponse)?;

        let Some(Prompt::RespondToAsk { rank }) = self.pending_prompt() else {
            return Err(RequestError::InvalidState);
        };

        let holds = self.seats.lock().player.hand.has_rank(rank);
        match (has_card, holds) {
            (false, true) => return Err(RequestError::FalseDenial),
            (true, false) => return Err(RequestError::FalseClaim),
            _ => {}
        }

        self.set_prompt(None);
        *self.state.lock() = GameState::ComputerTurn;

        if has_card {
            let taken = self.seats.with(|seats| {
                let cards = seats.player.hand.take_rank(rank);
                seats.computer.hand.extend(cards.iter().copied());
                cards
            });
            self.emit(GameEvent::CardsTransferred {
                from: Actor::Player,
                to: Actor::Computer,
                cards: taken,
            });
            self.notify();
            self.schedule(
                self.options.timing.transfer,
                Step::Settle {
                    actor: Actor::Computer,
                    pass_turn: false,
                },
            );
            return Ok(());
        }

        let delay = match self.draw_into(Actor::Computer) {
            Some(card) => {
                self.emit(GameEvent::CardDrawn {
                    actor: Actor::Computer,
                    card,
                });
                self.options.timing.draw
            }
            None => 0,
        };
        self.notify();
        self.schedule(
            delay,
            Step::Settle {
                actor: Actor::Computer,
                pass_turn: true,
            },
        );
        Ok(())
    }

    /// Ends the game once the deck and both hands are empty.
    pub(super) fn check_go_fish_over(&self) -> bool {
        let deck_empty = self.deck.lock().is_empty();
        let (hands_empty, player_pairs, computer_pairs) = self.seats.with(|seats| {
            (
                seats.player.hand.is_empty() && seats.computer.hand.is_empty(),
                seats.player.pairs.len(),
                seats.computer.pairs.len(),
            )
        });

        if !(deck_empty && hands_empty) {
            return false;
        }

        let winner = match player_pairs.cmp(&computer_pairs) {
            core::cmp::Ordering::Greater => Winner::Player,
            core::cmp::Ordering::Less => Winner::Computer,
            core::cmp::Ordering::Equal => Winner::Tie,
        };

        self.finish(GameResult {
            winner,
            player_pairs,
            computer_pairs,
            old_maid_holder: None,
        });
        true
    }
}

