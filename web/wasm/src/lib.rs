use core::time::Duration;

use serde::Serialize;
use threeround::{
    Card, FinalOutcome, Game, GameOptions, GameSnapshot, Hand, Pacer, Role, RoundOutcome,
    RoundResult, SessionProgress, StepEvent, StepKind, Turn,
};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmGame {
    game: Game,
    pacer: Pacer,
}

#[wasm_bindgen]
impl WasmGame {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32, auto_play: bool) -> Self {
        let options = GameOptions::default().with_auto_play(auto_play);
        let pacer = Pacer::from_options(&options);
        Self {
            game: Game::new(options, u64::from(seed)),
            pacer,
        }
    }

    pub fn reset(&mut self) {
        self.pacer.cancel();
        self.game.reset();
    }

    pub fn start_round(&mut self) {
        self.pacer.cancel();
        self.game.start_round();
    }

    /// Hits for whichever side is to act.
    pub fn hit(&self) -> Result<String, JsValue> {
        let role = self.require_role()?;
        self.game
            .hit(role)
            .map(|card| card.label().to_string())
            .map_err(js_err)
    }

    /// Stands for whichever side is to act.
    pub fn stand(&self) -> Result<(), JsValue> {
        let role = self.require_role()?;
        self.game.stand(role).map_err(js_err)
    }

    pub fn set_auto_play(&self, enabled: bool) {
        self.game.set_auto_play(enabled);
    }

    /// Advances pacing to `now_ms` (e.g. `performance.now()`).
    ///
    /// Returns the applied step as an object, or `undefined`.
    pub fn poll(&mut self, now_ms: f64) -> Result<JsValue, JsValue> {
        let now = Duration::from_millis(now_ms.max(0.0) as u64);
        match self.pacer.poll(&self.game, now) {
            Some(event) => to_js_value(&JsEvent::from(event)),
            None => Ok(JsValue::UNDEFINED),
        }
    }

    pub fn is_waiting(&self) -> bool {
        self.pacer.is_waiting()
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let snapshot = Snapshot::from(self.game.snapshot());
        to_js_value(&snapshot)
    }

    pub fn final_result(&self) -> Result<JsValue, JsValue> {
        let result = self.game.session_result().map_err(js_err)?;
        to_js_value(&JsFinal {
            player_wins: result.player_wins,
            dealer_wins: result.dealer_wins,
            outcome: final_to_str(result.outcome),
            rounds: result.rounds.into_iter().map(JsRound::from).collect(),
        })
    }
}

impl WasmGame {
    fn require_role(&self) -> Result<Role, JsValue> {
        self.game
            .turn()
            .role()
            .ok_or_else(|| JsValue::from_str("round is resolved"))
    }
}

#[derive(Serialize)]
struct Snapshot {
    round: u8,
    rounds: u8,
    player: JsHand,
    dealer: JsHand,
    turn: &'static str,
    outcome: Option<&'static str>,
    last_card: Option<&'static str>,
    player_wins: u8,
    dealer_wins: u8,
    finished: bool,
    auto_play: bool,
    pending: Option<&'static str>,
}

impl From<GameSnapshot> for Snapshot {
    fn from(snapshot: GameSnapshot) -> Self {
        Self {
            round: snapshot.round,
            rounds: snapshot.rounds,
            player: JsHand::from(&snapshot.player),
            dealer: JsHand::from(&snapshot.dealer),
            turn: turn_to_str(snapshot.turn),
            outcome: snapshot.outcome.map(outcome_to_str),
            last_card: snapshot.last_card.map(Card::label),
            player_wins: snapshot.player_wins,
            dealer_wins: snapshot.dealer_wins,
            finished: snapshot.finished,
            auto_play: snapshot.auto_play,
            pending: snapshot.pending.map(step_to_str),
        }
    }
}

#[derive(Serialize)]
struct JsHand {
    cards: Vec<&'static str>,
    score: u8,
    bust: bool,
}

impl From<&Hand> for JsHand {
    fn from(hand: &Hand) -> Self {
        Self {
            cards: hand.cards().iter().map(|card| card.label()).collect(),
            score: hand.score(),
            bust: hand.is_bust(),
        }
    }
}

#[derive(Serialize)]
struct JsRound {
    round: u8,
    outcome: &'static str,
    player_score: u8,
    dealer_score: u8,
}

impl From<RoundResult> for JsRound {
    fn from(result: RoundResult) -> Self {
        Self {
            round: result.round,
            outcome: outcome_to_str(result.outcome),
            player_score: result.player_score,
            dealer_score: result.dealer_score,
        }
    }
}

#[derive(Serialize)]
struct JsFinal {
    player_wins: u8,
    dealer_wins: u8,
    outcome: &'static str,
    rounds: Vec<JsRound>,
}

#[derive(Serialize)]
#[serde(tag = "kind")]
enum JsEvent {
    PlayerStopped {
        score: u8,
    },
    DealerDrew {
        card: &'static str,
        score: u8,
    },
    DealerStood {
        score: u8,
    },
    RoundRecorded {
        result: JsRound,
        next_round: Option<u8>,
    },
}

impl From<StepEvent> for JsEvent {
    fn from(event: StepEvent) -> Self {
        match event {
            StepEvent::PlayerStopped { score } => Self::PlayerStopped { score },
            StepEvent::DealerDrew { card, score } => Self::DealerDrew {
                card: card.label(),
                score,
            },
            StepEvent::DealerStood { score } => Self::DealerStood { score },
            StepEvent::RoundRecorded { result, progress } => Self::RoundRecorded {
                result: JsRound::from(result),
                next_round: match progress {
                    SessionProgress::NextRound(index) => Some(index),
                    SessionProgress::Finished(_) => None,
                },
            },
        }
    }
}

fn turn_to_str(turn: Turn) -> &'static str {
    match turn {
        Turn::PlayerTurn => "PlayerTurn",
        Turn::DealerTurn => "DealerTurn",
        Turn::Resolved => "Resolved",
    }
}

fn outcome_to_str(outcome: RoundOutcome) -> &'static str {
    match outcome {
        RoundOutcome::PlayerWin => "PlayerWin",
        RoundOutcome::DealerWin => "DealerWin",
        RoundOutcome::Push => "Push",
    }
}

fn final_to_str(outcome: FinalOutcome) -> &'static str {
    match outcome {
        FinalOutcome::PlayerOverall => "PlayerOverall",
        FinalOutcome::DealerOverall => "DealerOverall",
        FinalOutcome::Tie => "Tie",
    }
}

fn step_to_str(kind: StepKind) -> &'static str {
    match kind {
        StepKind::EndPlayerTurn => "EndPlayerTurn",
        StepKind::DealerDraw => "DealerDraw",
        StepKind::DealerStand => "DealerStand",
        StepKind::RecordOutcome => "RecordOutcome",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
