use pairgames::{
    Actor, Card, Game, GameEvent, GameOptions, GameResult, GameState, PairRecord, Prompt, Suit,
    Variant, Winner,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmGame {
    game: Game,
}

#[wasm_bindgen]
impl WasmGame {
    #[wasm_bindgen(constructor)]
    pub fn new(variant: &str, seed: u32) -> Result<WasmGame, JsValue> {
        let variant = parse_variant(variant)?;
        Ok(Self {
            game: Game::new(variant, GameOptions::default(), u64::from(seed)),
        })
    }

    pub fn reset(&mut self, variant: &str, seed: u32) -> Result<(), JsValue> {
        let variant = parse_variant(variant)?;
        self.game = Game::new(variant, GameOptions::default(), u64::from(seed));
        Ok(())
    }

    pub fn new_game(&self) {
        self.game.new_game();
    }

    pub fn ask(&self, rank: u8) -> Result<(), JsValue> {
        self.game.request_ask(rank).map_err(js_err)
    }

    pub fn draw(&self) -> Result<(), JsValue> {
        self.game.request_draw().map_err(js_err)
    }

    pub fn respond(&self, has_card: bool) -> Result<(), JsValue> {
        self.game.request_respond(has_card).map_err(js_err)
    }

    pub fn pick(&self, index: u32) -> Result<(), JsValue> {
        self.game.request_pick(index as usize).map_err(js_err)
    }

    /// Moves the clock forward; call from `requestAnimationFrame`.
    pub fn advance(&self, elapsed_ms: u32) -> u32 {
        self.game.advance(u64::from(elapsed_ms)) as u32
    }

    pub fn run_until_idle(&self) -> u32 {
        self.game.run_until_idle() as u32
    }

    pub fn next_due_in(&self) -> Option<u32> {
        self.game
            .next_due_in()
            .map(|wait| u32::try_from(wait).unwrap_or(u32::MAX))
    }

    pub fn is_busy(&self) -> bool {
        self.game.is_busy()
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        to_js_value(&JsSnapshot::from(self.game.snapshot()))
    }

    pub fn result(&self) -> Result<JsValue, JsValue> {
        to_js_value(&self.game.result().map(JsResult::from))
    }

    pub fn drain_events(&self) -> Result<JsValue, JsValue> {
        let events: Vec<JsEvent> = self
            .game
            .drain_events()
            .into_iter()
            .map(JsEvent::from)
            .collect();
        to_js_value(&events)
    }
}

#[derive(Serialize)]
struct JsSnapshot {
    variant: &'static str,
    state: &'static str,
    turn: &'static str,
    prompt: Option<JsPrompt>,
    busy: bool,
    deck_remaining: u32,
    player_hand: Vec<JsCard>,
    computer_cards: u32,
    player_pairs: Vec<JsPair>,
    computer_pairs: Vec<JsPair>,
}

impl From<pairgames::Snapshot> for JsSnapshot {
    fn from(snapshot: pairgames::Snapshot) -> Self {
        Self {
            variant: snapshot.variant.name(),
            state: state_to_str(snapshot.state),
            turn: actor_to_str(snapshot.turn),
            prompt: snapshot.prompt.map(JsPrompt::from),
            busy: snapshot.busy,
            deck_remaining: snapshot.deck_remaining as u32,
            player_hand: snapshot.player_hand.into_iter().map(card_to_js).collect(),
            computer_cards: snapshot.computer_hand.len() as u32,
            player_pairs: snapshot.player_pairs.iter().map(JsPair::from).collect(),
            computer_pairs: snapshot.computer_pairs.iter().map(JsPair::from).collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(tag = "kind")]
enum JsPrompt {
    ChooseRank,
    GoFish { rank: u8 },
    RespondToAsk { rank: u8 },
    PickOpponentCard { count: u32 },
}

impl From<Prompt> for JsPrompt {
    fn from(prompt: Prompt) -> Self {
        match prompt {
            Prompt::ChooseRank => Self::ChooseRank,
            Prompt::GoFish { rank } => Self::GoFish { rank },
            Prompt::RespondToAsk { rank } => Self::RespondToAsk { rank },
            Prompt::PickOpponentCard { count } => Self::PickOpponentCard {
                count: count as u32,
            },
        }
    }
}

#[derive(Serialize)]
struct JsCard {
    suit: &'static str,
    rank: u8,
    label: &'static str,
    red: bool,
}

#[derive(Serialize)]
struct JsPair {
    rank: u8,
    cards: [JsCard; 2],
}

impl From<&PairRecord> for JsPair {
    fn from(pair: &PairRecord) -> Self {
        Self {
            rank: pair.rank,
            cards: pair.cards.map(card_to_js),
        }
    }
}

#[derive(Serialize)]
struct JsResult {
    winner: &'static str,
    player_pairs: u32,
    computer_pairs: u32,
    old_maid_holder: Option<&'static str>,
}

impl From<GameResult> for JsResult {
    fn from(result: GameResult) -> Self {
        Self {
            winner: winner_to_str(result.winner),
            player_pairs: result.player_pairs as u32,
            computer_pairs: result.computer_pairs as u32,
            old_maid_holder: result.old_maid_holder.map(actor_to_str),
        }
    }
}

/// Events as the page consumes them. The computer's drawn and dealt cards
/// stay hidden.
#[derive(Serialize)]
#[serde(tag = "kind")]
enum JsEvent {
    StateChanged,
    Prompt { prompt: JsPrompt },
    GameOver { result: JsResult },
    CardDealt { to: &'static str, card: Option<JsCard> },
    CardDrawn { actor: &'static str, card: Option<JsCard> },
    CardsTransferred { from: &'static str, to: &'static str, cards: Vec<JsCard> },
    PairsCollected { actor: &'static str, pairs: Vec<JsPair> },
    ComputerAsked { rank: u8 },
}

impl From<GameEvent> for JsEvent {
    fn from(event: GameEvent) -> Self {
        match event {
            GameEvent::StateChanged(_) => Self::StateChanged,
            GameEvent::Prompt(prompt) => Self::Prompt {
                prompt: prompt.into(),
            },
            GameEvent::GameOver(result) => Self::GameOver {
                result: result.into(),
            },
            GameEvent::CardDealt { to, card } => Self::CardDealt {
                to: actor_to_str(to),
                card: visible_to_player(to, card),
            },
            GameEvent::CardDrawn { actor, card } => Self::CardDrawn {
                actor: actor_to_str(actor),
                card: visible_to_player(actor, card),
            },
            GameEvent::CardsTransferred { from, to, cards } => Self::CardsTransferred {
                from: actor_to_str(from),
                to: actor_to_str(to),
                cards: cards.into_iter().map(card_to_js).collect(),
            },
            GameEvent::PairsCollected { actor, pairs } => Self::PairsCollected {
                actor: actor_to_str(actor),
                pairs: pairs.iter().map(JsPair::from).collect(),
            },
            GameEvent::ComputerAsked { rank } => Self::ComputerAsked { rank },
        }
    }
}

fn visible_to_player(holder: Actor, card: Card) -> Option<JsCard> {
    (holder == Actor::Player).then(|| card_to_js(card))
}

fn card_to_js(card: Card) -> JsCard {
    JsCard {
        suit: suit_to_str(card.suit),
        rank: card.rank,
        label: card.rank_label(),
        red: card.color() == pairgames::Color::Red,
    }
}

fn parse_variant(name: &str) -> Result<Variant, JsValue> {
    match name {
        "go-fish" | "GoFish" => Ok(Variant::GoFish),
        "old-maid" | "OldMaid" => Ok(Variant::OldMaid),
        _ => Err(JsValue::from_str(&format!("unknown variant: {name}"))),
    }
}

fn suit_to_str(suit: Suit) -> &'static str {
    match suit {
        Suit::Hearts => "Hearts",
        Suit::Diamonds => "Diamonds",
        Suit::Clubs => "Clubs",
        Suit::Spades => "Spades",
        Suit::OldMaid => "OldMaid",
    }
}

fn state_to_str(state: GameState) -> &'static str {
    match state {
        GameState::Dealing => "Dealing",
        GameState::PlayerTurn => "PlayerTurn",
        GameState::AwaitingDraw => "AwaitingDraw",
        GameState::AwaitingResponse => "AwaitingResponse",
        GameState::ComputerTurn => "ComputerTurn",
        GameState::GameOver => "GameOver",
    }
}

fn actor_to_str(actor: Actor) -> &'static str {
    match actor {
        Actor::Player => "Player",
        Actor::Computer => "Computer",
    }
}

fn winner_to_str(winner: Winner) -> &'static str {
    match winner {
        Winner::Player => "Player",
        Winner::Computer => "Computer",
        Winner::Tie => "Tie",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
