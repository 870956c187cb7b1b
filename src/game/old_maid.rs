extern crate alloc;

use alloc::vec;

use log::debug;

use crate::error::RequestError;
use crate::event::GameEvent;
use crate::pairs::remove_all_pairs;
use crate::result::{Actor, GameResult, Winner};

use super::{Game, GameState, Prompt, Step, Variant, log_rejection};

impl Game {
    /// Deals the whole deck one card at a time, player first, then lays down
    /// every pair.
    pub(super) fn start_old_maid(&self) {
        let mut target = Actor::Player;
        while let Some(card) = self.draw_into(target) {
            self.emit(GameEvent::CardDealt { to: target, card });
            target = target.opponent();
        }

        for actor in [Actor::Player, Actor::Computer] {
            let pairs = self.seats.with(|seats| remove_all_pairs(&mut seats.get_mut(actor).hand));
            self.collect(actor, pairs);
        }

        if !self.check_old_maid_over() {
            self.prompt_pick();
        }
    }

    fn prompt_pick(&self) {
        let count = self.seats.lock().computer.hand.len();
        self.set_turn(Actor::Player, GameState::PlayerTurn);
        self.set_prompt(Some(Prompt::PickOpponentCard { count }));
        self.notify();
    }

    /// Takes the computer's card at `index` into the player's hand.
    ///
    /// The player's pairs are laid down and the turn passes to the computer,
    /// which picks back after the configured delay.
    ///
    /// # Errors
    ///
    /// Returns an error if this is not an Old Maid game, the game is over, a
    /// transition is in flight, it is not the player's turn, or the computer
    /// holds no card at `index`.
    pub fn request_pick(&self, index: usize) -> Result<(), RequestError> {
        self.try_pick(index).inspect_err(log_rejection("pick"))
    }

    fn try_pick(&self, index: usize) -> Result<(), RequestError> {
        self.ensure_ready(Variant::OldMaid, GameState::PlayerTurn)?;

        let card = self
            .seats
            .with(|seats| {
                let card = seats.computer.hand.take_at(index)?;
                seats.player.hand.add_card(card);
                Some(card)
            })
            .ok_or(RequestError::NoSuchCard)?;

        debug!("player picked {card}");
        self.set_prompt(None);
        self.emit(GameEvent::CardsTransferred {
            from: Actor::Computer,
            to: Actor::Player,
            cards: vec![card],
        });
        self.notify();
        self.schedule(
            self.options.timing.transfer,
            Step::FinishPick {
                actor: Actor::Player,
            },
        );
        Ok(())
    }

    /// The computer takes a random card from the player and reshuffles its
    /// own hand so the card's position gives nothing away.
    fn computer_pick(&self) {
        let len = self.seats.lock().player.hand.len();
        if len == 0 {
            self.prompt_pick();
            return;
        }

        let index = self.random_index(len);
        let card = self.seats.with(|seats| {
            let card = seats.player.hand.take_at(index)?;
            seats.computer.hand.add_card(card);
            Some(card)
        });
        let Some(card) = card else {
            return;
        };
        self.rng
            .with(|rng| self.seats.with(|seats| seats.computer.hand.shuffle(rng)));

        debug!("computer picked {card}");
        self.emit(GameEvent::CardsTransferred {
            from: Actor::Player,
            to: Actor::Computer,
            cards: vec![card],
        });
        self.notify();
        self.schedule(
            self.options.timing.transfer,
            Step::FinishPick {
                actor: Actor::Computer,
            },
        );
    }

    /// Lays down every pair the receiver now holds and hands the turn over.
    pub(super) fn finish_pick(&self, actor: Actor) {
        let pairs = self.seats.with(|seats| remove_all_pairs(&mut seats.get_mut(actor).hand));
        self.collect(actor, pairs);

        let (next, state, delay) = match actor {
            Actor::Player => (
                Actor::Computer,
                GameState::ComputerTurn,
                self.options.timing.computer_think,
            ),
            Actor::Computer => (
                Actor::Player,
                GameState::PlayerTurn,
                self.options.timing.game_over_check,
            ),
        };
        self.set_turn(next, state);
        self.notify();
        self.schedule(delay, Step::CheckEnd);
    }

    pub(super) fn check_end(&self) {
        if self.check_old_maid_over() {
            return;
        }
        match self.current_turn() {
            Actor::Computer => self.computer_pick(),
            Actor::Player => self.prompt_pick(),
        }
    }

    /// Ends the game once a single card is left between both hands.
    pub(super) fn check_old_maid_over(&self) -> bool {
        let (last, player_pairs, computer_pairs) = self.seats.with(|seats| {
            let last = (seats.cards_held() == 1).then(|| {
                if seats.player.hand.is_empty() {
                    (Actor::Computer, seats.computer.hand.cards()[0])
                } else {
                    (Actor::Player, seats.player.hand.cards()[0])
                }
            });
            (last, seats.player.pairs.len(), seats.computer.pairs.len())
        });

        let Some((holder, card)) = last else {
            return false;
        };

        let (winner, old_maid_holder) = if card.is_old_maid() {
            (Winner::from(holder.opponent()), Some(holder))
        } else {
            (Winner::Tie, None)
        };

        self.finish(GameResult {
            winner,
            player_pairs,
            computer_pairs,
            old_maid_holder,
        });
        true
    }
}
