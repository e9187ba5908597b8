//! Observers: one-way sinks for game events.
//!
//! The game owns its observer and calls [`GameObserver::notify`] with a
//! shared reference to each event. Nothing flows back.

use rustc_hash::FxHashMap;
use tracing::{debug, info, trace};

use super::event::GameEvent;
use crate::core::error::describe_cards;
use crate::core::PlayerId;
use crate::rules::GameResult;

/// Receives game events.
pub trait GameObserver {
    /// Called once per event, in order.
    fn notify(&mut self, event: &GameEvent);
}

/// Discards every event.
impl GameObserver for () {
    fn notify(&mut self, _event: &GameEvent) {}
}

/// Fans each event out to both observers, left first.
impl<A: GameObserver, B: GameObserver> GameObserver for (A, B) {
    fn notify(&mut self, event: &GameEvent) {
        self.0.notify(event);
        self.1.notify(event);
    }
}

/// Writes every event to `tracing`.
///
/// Plays and the final result go out at `info`, rotations at `debug`, and
/// the visible and legal sets behind each play at `trace`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingObserver;

impl GameObserver for TracingObserver {
    fn notify(&mut self, event: &GameEvent) {
        match event {
            GameEvent::CardPlayed {
                tick,
                player,
                visible,
                legal,
                chosen,
                pile,
                pile_tops,
            } => {
                trace!(
                    tick,
                    %player,
                    visible = %describe_cards(visible),
                    legal = %describe_cards(legal),
                    "choosing a card"
                );
                info!(tick, %player, card = %chosen, pile, "played");
                debug!(tick, piles = %describe_cards(pile_tops), "pile tops");
            }
            GameEvent::ReserveRotated {
                tick,
                player,
                waste_top,
                reserve_left,
            } => match waste_top {
                Some(top) => debug!(tick, %player, waste_top = %top, reserve_left, "rotated reserve"),
                None => debug!(tick, %player, "no legal card and nothing to draw"),
            },
            GameEvent::GameFinished { tick, result } => {
                info!(tick, %result, "game finished");
            }
        }
    }
}

/// Records every event, in order.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Vec<GameEvent>,
}

impl EventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Only the `CardPlayed` events.
    pub fn plays(&self) -> impl Iterator<Item = &GameEvent> {
        self.events
            .iter()
            .filter(|e| matches!(e, GameEvent::CardPlayed { .. }))
    }
}

impl GameObserver for EventLog {
    fn notify(&mut self, event: &GameEvent) {
        self.events.push(event.clone());
    }
}

/// Counters kept per player by [`PlayTally`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlayerTally {
    /// Cards placed on community piles.
    pub plays: u32,
    /// Piles started with a rank-1 card.
    pub piles_started: u32,
    /// Turns spent drawing from reserve.
    pub rotations: u32,
}

/// Per-player play counts and the final result.
#[derive(Clone, Debug, Default)]
pub struct PlayTally {
    players: FxHashMap<PlayerId, PlayerTally>,
    result: Option<GameResult>,
    ticks: u64,
}

impl PlayTally {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Counters for `player` (all zero if they never acted).
    #[must_use]
    pub fn get(&self, player: PlayerId) -> PlayerTally {
        self.players.get(&player).copied().unwrap_or_default()
    }

    /// The final result, once the game has finished.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    /// Last tick seen.
    #[must_use]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Total cards placed by everyone.
    #[must_use]
    pub fn total_plays(&self) -> u32 {
        self.players.values().map(|t| t.plays).sum()
    }
}

impl GameObserver for PlayTally {
    fn notify(&mut self, event: &GameEvent) {
        self.ticks = self.ticks.max(event.tick());

        match event {
            GameEvent::CardPlayed { player, chosen, .. } => {
                let tally = self.players.entry(*player).or_default();
                tally.plays += 1;
                if chosen.starts_pile() {
                    tally.piles_started += 1;
                }
            }
            GameEvent::ReserveRotated { player, .. } => {
                self.players.entry(*player).or_default().rotations += 1;
            }
            GameEvent::GameFinished { result, .. } => {
                self.result = Some(*result);
            }
        }
    }
}

impl std::fmt::Display for PlayTally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut players: Vec<_> = self.players.iter().collect();
        players.sort_by_key(|(player, _)| **player);

        for (player, tally) in players {
            writeln!(
                f,
                "{player}: {} plays, {} piles started, {} rotations",
                tally.plays, tally.piles_started, tally.rotations
            )?;
        }

        match self.result {
            Some(result) => write!(f, "{result} after {} ticks", self.ticks),
            None => write!(f, "unfinished after {} ticks", self.ticks),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, Rank, Suit};
    use crate::core::CardId;
    use smallvec::smallvec;

    fn play(tick: u64, player: u8, rank: u8) -> GameEvent {
        let card = Card::new(CardId(tick as u16), PlayerId::new(player), Suit::Red, Rank::new(rank).unwrap());
        GameEvent::CardPlayed {
            tick,
            player: PlayerId::new(player),
            visible: smallvec![card],
            legal: smallvec![card],
            chosen: card,
            pile: 0,
            pile_tops: vec![card],
        }
    }

    fn rotate(tick: u64, player: u8) -> GameEvent {
        GameEvent::ReserveRotated {
            tick,
            player: PlayerId::new(player),
            waste_top: None,
            reserve_left: 0,
        }
    }

    #[test]
    fn test_event_log_records_in_order() {
        let mut log = EventLog::new();
        assert!(log.is_empty());

        log.notify(&play(1, 0, 1));
        log.notify(&rotate(1, 1));
        log.notify(&play(2, 0, 2));

        assert_eq!(log.len(), 3);
        assert_eq!(log.plays().count(), 2);
        assert_eq!(log.events()[1], rotate(1, 1));
    }

    #[test]
    fn test_tally_counts() {
        let mut tally = PlayTally::new();

        tally.notify(&play(1, 0, 1));
        tally.notify(&rotate(1, 1));
        tally.notify(&play(2, 0, 2));
        tally.notify(&play(2, 1, 1));
        tally.notify(&GameEvent::GameFinished {
            tick: 2,
            result: GameResult::Winner(PlayerId::new(1)),
        });

        assert_eq!(
            tally.get(PlayerId::new(0)),
            PlayerTally { plays: 2, piles_started: 1, rotations: 0 }
        );
        assert_eq!(
            tally.get(PlayerId::new(1)),
            PlayerTally { plays: 1, piles_started: 1, rotations: 1 }
        );
        assert_eq!(tally.get(PlayerId::new(3)), PlayerTally::default());
        assert_eq!(tally.total_plays(), 3);
        assert_eq!(tally.ticks(), 2);
        assert_eq!(tally.result(), Some(GameResult::Winner(PlayerId::new(1))));

        let text = tally.to_string();
        assert!(text.starts_with("Plow: 2 plays, 1 piles started, 0 rotations\n"));
        assert!(text.ends_with("Bucket wins after 2 ticks"));
    }

    #[test]
    fn test_pair_fans_out() {
        let mut pair = (EventLog::new(), PlayTally::new());
        pair.notify(&play(1, 0, 1));
        pair.notify(&rotate(2, 0));

        assert_eq!(pair.0.len(), 2);
        assert_eq!(pair.1.get(PlayerId::new(0)).rotations, 1);
    }

    #[test]
    fn test_tracing_and_unit_observers_accept_everything() {
        let events = [play(1, 0, 1), rotate(1, 0), GameEvent::GameFinished {
            tick: 1,
            result: GameResult::Stalemate,
        }];

        let mut tracing_observer = TracingObserver;
        for event in &events {
            tracing_observer.notify(event);
            GameObserver::notify(&mut (), event);
        }
    }
}
