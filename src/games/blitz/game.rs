//! Blitz game implementation.

use tracing::{debug, info, instrument, warn};

use crate::cards::Card;
use crate::core::error::describe_cards;
use crate::core::{BlitzError, GameConfig, GameRng, PlayerId, PlayerMap, RandomSource};
use crate::events::{GameEvent, GameObserver, TracingObserver};
use crate::rules::{self, GameResult, Placement};
use crate::zones::{CommunityPile, PlayerPiles};

/// Whether the game is still being played.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    Finished(GameResult),
}

impl GameStatus {
    #[must_use]
    pub fn is_finished(&self) -> bool {
        matches!(self, GameStatus::Finished(_))
    }

    /// The result, once finished.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        match self {
            GameStatus::Running => None,
            GameStatus::Finished(result) => Some(*result),
        }
    }
}

/// A table of players racing to empty their stock piles.
///
/// Generic over the random source (so tests can script shuffles and picks)
/// and over the observer that receives events.
#[derive(Debug)]
pub struct BlitzGame<R = GameRng, O = TracingObserver> {
    config: GameConfig,
    rng: R,
    observer: O,
    players: PlayerMap<PlayerPiles>,
    piles: Vec<CommunityPile>,
    tick: u64,
    status: GameStatus,
}

impl BlitzGame {
    /// Create a game with a `GameRng` (seeded from the config, or from
    /// entropy) and the tracing observer.
    pub fn new(config: GameConfig) -> Result<Self, BlitzError> {
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        info!(seed = rng.seed(), players = config.player_count, "dealing a new game");
        Self::with_parts(config, rng, TracingObserver)
    }
}

impl<R: RandomSource, O: GameObserver> BlitzGame<R, O> {
    /// Create a game from explicit parts.
    ///
    /// Players are dealt in seating order, each shuffled with `rng`.
    pub fn with_parts(config: GameConfig, mut rng: R, observer: O) -> Result<Self, BlitzError> {
        config.validate()?;

        let players = PlayerMap::new(config.player_count, |player| {
            PlayerPiles::deal(player, &mut rng)
        });

        Ok(Self {
            config,
            rng,
            observer,
            players,
            piles: Vec::new(),
            tick: 0,
            status: GameStatus::Running,
        })
    }

    /// Play ticks until the game finishes.
    #[instrument(skip(self), fields(players = self.config.player_count))]
    pub fn run(&mut self) -> Result<GameResult, BlitzError> {
        loop {
            if let GameStatus::Finished(result) = self.step()? {
                return Ok(result);
            }
        }
    }

    /// Play one tick: every player in seating order gets one move.
    ///
    /// The tick stops early if someone empties their stock. Stepping a
    /// finished game changes nothing.
    pub fn step(&mut self) -> Result<GameStatus, BlitzError> {
        if self.status.is_finished() {
            return Ok(self.status);
        }

        self.tick += 1;

        for player in PlayerId::all(self.players.player_count()) {
            if self.take_turn(player)? {
                self.finish(GameResult::Winner(player));
                return Ok(self.status);
            }
        }

        if let Some(max_ticks) = self.config.max_ticks {
            if self.tick >= max_ticks {
                warn!(ticks = self.tick, "tick ceiling reached without a winner");
                self.finish(GameResult::Stalemate);
            }
        }

        Ok(self.status)
    }

    /// One player's move. Returns `true` if it emptied their stock.
    fn take_turn(&mut self, player: PlayerId) -> Result<bool, BlitzError> {
        let visible = self.players[player].visible_cards();
        let legal = rules::legal_cards(&visible, &self.piles);

        if legal.is_empty() {
            let piles = &mut self.players[player];
            piles.rotate_reserve();

            let event = GameEvent::ReserveRotated {
                tick: self.tick,
                player,
                waste_top: piles.waste_top().copied(),
                reserve_left: piles.reserve_len(),
            };
            self.observer.notify(&event);
            return Ok(false);
        }

        let chosen = legal[self.rng.pick(legal.len())];
        let pile = self.place(chosen, &visible)?;
        let blitzed = self.players[player].play_card(chosen)?;

        let event = GameEvent::CardPlayed {
            tick: self.tick,
            player,
            visible,
            legal,
            chosen,
            pile,
            pile_tops: self.piles.iter().filter_map(|p| p.top().copied()).collect(),
        };
        self.observer.notify(&event);

        Ok(blitzed)
    }

    /// Put `card` on its pile and return that pile's index.
    fn place(&mut self, card: Card, visible: &[Card]) -> Result<usize, BlitzError> {
        let unplayable = || BlitzError::UnplayableCard {
            card,
            visible: describe_cards(visible),
        };

        match rules::placement(&card, &self.piles) {
            Some(Placement::NewPile) => {
                let pile = CommunityPile::start(card).ok_or_else(unplayable)?;
                self.piles.push(pile);
                Ok(self.piles.len() - 1)
            }
            Some(Placement::Onto(index)) => {
                if self.piles[index].push(card) {
                    Ok(index)
                } else {
                    Err(unplayable())
                }
            }
            None => Err(unplayable()),
        }
    }

    fn finish(&mut self, result: GameResult) {
        debug!(tick = self.tick, %result, "game over");
        self.status = GameStatus::Finished(result);
        self.observer.notify(&GameEvent::GameFinished {
            tick: self.tick,
            result,
        });
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Ticks started so far.
    #[must_use]
    pub fn tick(&self) -> u64 {
        self.tick
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Every player's piles, read-only.
    #[must_use]
    pub fn players(&self) -> &PlayerMap<PlayerPiles> {
        &self.players
    }

    /// Community piles in creation order.
    #[must_use]
    pub fn piles(&self) -> &[CommunityPile] {
        &self.piles
    }

    #[must_use]
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Consume the game and hand back its observer.
    #[must_use]
    pub fn into_observer(self) -> O {
        self.observer
    }
}

impl<R, O> std::fmt::Display for BlitzGame<R, O> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.status {
            GameStatus::Running => writeln!(f, "Tick {} (running)", self.tick)?,
            GameStatus::Finished(result) => writeln!(f, "Tick {}: {result}", self.tick)?,
        }

        for (_, piles) in self.players.iter() {
            writeln!(f, "  {piles}")?;
        }

        writeln!(f, "Community piles ({}):", self.piles.len())?;
        for (index, pile) in self.piles.iter().enumerate() {
            writeln!(f, "  [{index}] {pile}")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CardId, CARDS_PER_PLAYER};
    use crate::events::EventLog;

    /// Leaves decks in factory order and always takes the first legal card.
    #[derive(Debug)]
    struct Scripted;

    impl RandomSource for Scripted {
        fn shuffle<T>(&mut self, _items: &mut [T]) {}

        fn pick(&mut self, _len: usize) -> usize {
            0
        }
    }

    fn scripted(players: usize) -> BlitzGame<Scripted, EventLog> {
        BlitzGame::with_parts(GameConfig::new(players), Scripted, EventLog::new()).unwrap()
    }

    fn ids(cards: &[Card]) -> Vec<u16> {
        cards.iter().map(|c| c.id.raw()).collect()
    }

    #[test]
    fn test_rejects_bad_player_counts() {
        for count in [0, 5, 9] {
            let err = BlitzGame::with_parts(GameConfig::new(count), Scripted, ()).unwrap_err();
            assert!(matches!(err, BlitzError::PlayerCount { .. }));
        }
    }

    #[test]
    fn test_new_game_state() {
        let game = scripted(3);

        assert_eq!(game.status(), GameStatus::Running);
        assert_eq!(game.tick(), 0);
        assert!(game.piles().is_empty());
        assert_eq!(game.players().player_count(), 3);
        for (player, piles) in game.players().iter() {
            assert_eq!(piles.owner(), player);
            assert_eq!(piles.card_count(), CARDS_PER_PLAYER);
        }
    }

    #[test]
    fn test_first_tick_starts_a_pile_per_player() {
        let mut game = scripted(2);
        assert_eq!(game.step(), Ok(GameStatus::Running));

        // Both players hold Red 1 in candidate slot 0; each starts a pile.
        assert_eq!(game.tick(), 1);
        assert_eq!(game.piles().len(), 2);
        assert_eq!(ids(game.piles()[0].cards()), vec![0]);
        assert_eq!(ids(game.piles()[1].cards()), vec![40]);

        let plays: Vec<_> = game.observer().plays().collect();
        assert_eq!(plays.len(), 2);
        match plays[0] {
            GameEvent::CardPlayed { visible, legal, chosen, pile, .. } => {
                assert_eq!(ids(visible), vec![3, 0, 1, 2]);
                assert_eq!(ids(legal), vec![0]);
                assert_eq!(chosen.id, CardId(0));
                assert_eq!(*pile, 0);
            }
            other => panic!("unexpected event {other:?}"),
        }
    }

    #[test]
    fn test_second_player_extends_first_players_pile() {
        let mut game = scripted(2);
        game.step().unwrap();
        game.step().unwrap();

        // Plow plays Red 2 onto pile 0, then Bucket's Red 2 goes onto the
        // first Red pile that accepts it, which is now Bucket's own pile.
        assert_eq!(ids(game.piles()[0].cards()), vec![0, 1]);
        assert_eq!(ids(game.piles()[1].cards()), vec![40, 41]);
    }

    #[test]
    fn test_solo_game_wins_on_tenth_tick() {
        let mut game = scripted(1);
        let result = game.run().unwrap();

        assert_eq!(result, GameResult::Winner(PlayerId::new(0)));
        assert_eq!(game.tick(), 10);
        assert_eq!(game.players()[PlayerId::new(0)].stock_len(), 0);

        // Red 1-7 on one pile, Blue 1-3 on another.
        assert_eq!(ids(game.piles()[0].cards()), (0..7).collect::<Vec<_>>());
        assert_eq!(ids(game.piles()[1].cards()), vec![10, 11, 12]);

        let last = game.observer().events().last().unwrap();
        assert_eq!(last, &GameEvent::GameFinished { tick: 10, result });
    }

    #[test]
    fn test_step_after_finish_is_noop() {
        let mut game = scripted(1);
        let result = game.run().unwrap();
        let events = game.observer().len();

        assert_eq!(game.step(), Ok(GameStatus::Finished(result)));
        assert_eq!(game.tick(), 10);
        assert_eq!(game.observer().len(), events);
    }

    #[test]
    fn test_tick_ceiling_ends_in_stalemate() {
        let config = GameConfig::new(1).with_max_ticks(3);
        let mut game = BlitzGame::with_parts(config, Scripted, EventLog::new()).unwrap();

        assert_eq!(game.run(), Ok(GameResult::Stalemate));
        assert_eq!(game.tick(), 3);
        assert_eq!(game.status().result(), Some(GameResult::Stalemate));
    }

    /// Deals every deck backwards, so the opening row is all high Yellows.
    #[derive(Debug)]
    struct Reversed;

    impl RandomSource for Reversed {
        fn shuffle<T>(&mut self, items: &mut [T]) {
            items.reverse();
        }

        fn pick(&mut self, _len: usize) -> usize {
            0
        }
    }

    #[test]
    fn test_no_legal_card_rotates_reserve() {
        let mut game = BlitzGame::with_parts(GameConfig::new(1), Reversed, EventLog::new()).unwrap();
        assert_eq!(game.step(), Ok(GameStatus::Running));

        // Candidates Yellow 10, 9, 8 and stock top Yellow 7 are all blocked,
        // so the player draws Green 7, 6, 5 instead.
        let piles = &game.players()[PlayerId::new(0)];
        assert_eq!(piles.waste_len(), 3);
        assert_eq!(piles.reserve_len(), 24);
        assert!(game.piles().is_empty());

        let expected = GameEvent::ReserveRotated {
            tick: 1,
            player: PlayerId::new(0),
            waste_top: piles.waste_top().copied(),
            reserve_left: 24,
        };
        assert_eq!(game.observer().events(), &[expected]);
        assert_eq!(piles.waste_top().map(|c| c.id), Some(CardId(24)));
    }

    #[test]
    fn test_display_lists_players_and_piles() {
        let mut game = scripted(1);
        game.run().unwrap();
        let text = game.to_string();

        assert!(text.starts_with("Tick 10: Plow wins\n"));
        assert!(text.contains("  Plow: stock 0 (top -)"));
        assert!(text.contains("Community piles (2):"));
        assert!(text.contains("  [1] Blue 1..3 (3 cards, top Blue 3<Plow>)"));
    }
}
