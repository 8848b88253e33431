//! The session controller.
//!
//! Owns the persisted [`Session`], the active round's [`MatchEngine`], and
//! the pool fetch in flight. Every mutating operation persists the session
//! before returning, so a reload resumes exactly where play stopped.
//!
//! ## Control flow
//!
//! `start_round` → caller fetches the pool → `supply_pool` → `DeckReady` →
//! `flip`/`resolve_mismatch` drive the round → `RoundWon` →
//! `advance_generation` → next `start_round` once the player picks a board
//! size again.
//!
//! ## Fetch ordering
//!
//! Requests carry a monotonic token. Only the most recent request can
//! complete; anything older identifies itself as stale in `supply_pool`
//! and is dropped with a debug log. Re-requesting the same generation and
//! board size while a fetch is in flight is a no-op, so double-clicking a
//! difficulty button cannot race two fetches for one round.

use crate::core::{Clock, Entity, GameConfig, GameRng};
use crate::deck::{build_deck, CardId, Deck, Face};
use crate::engine::{FlipOutcome, MatchEngine, Phase};
use crate::error::GameError;
use crate::events::{ErrorKind, GameEvent};
use crate::provider::{FetchError, PoolRequest, RequestToken};
use crate::scoring;
use crate::session::{load_session, save_session, Session, SessionStore};

/// Orchestrates rounds, generations, power-ups, and persistence.
///
/// Single-threaded and callback-driven: no operation blocks, and both
/// suspension points (the pool fetch and the mismatch delay) are completed
/// by the caller.
pub struct SessionController<S: SessionStore, C: Clock> {
    config: GameConfig,
    store: S,
    clock: C,
    rng: GameRng,
    session: Session,
    engine: Option<MatchEngine>,
    pending: Option<PoolRequest>,
    next_token: u64,
    events: Vec<GameEvent>,
}

impl<S: SessionStore, C: Clock> SessionController<S, C> {
    /// Create a controller, loading any persisted session from `store`.
    ///
    /// Deck layouts are entropy-seeded; use [`SessionController::with_seed`]
    /// in tests.
    #[must_use]
    pub fn new(config: GameConfig, store: S, clock: C) -> Self {
        Self::build(config, store, clock, GameRng::from_entropy())
    }

    /// Create a controller with a pinned RNG seed for reproducible decks.
    #[must_use]
    pub fn with_seed(config: GameConfig, store: S, clock: C, seed: u64) -> Self {
        Self::build(config, store, clock, GameRng::new(seed))
    }

    fn build(config: GameConfig, mut store: S, clock: C, rng: GameRng) -> Self {
        let session = load_session(&mut store, &config.session_key, &config.session_version);
        Self {
            config,
            store,
            clock,
            rng,
            session,
            engine: None,
            pending: None,
            next_token: 0,
            events: Vec::new(),
        }
    }

    // === Round lifecycle ===

    /// Begin a new round at the given board size.
    ///
    /// Resets the turn counter, records the round start time, persists,
    /// and returns the [`PoolRequest`] the caller must fetch and complete
    /// via [`SessionController::supply_pool`]. Returns `Ok(None)` when an
    /// identical request is already in flight (the duplicate is dropped).
    ///
    /// # Errors
    ///
    /// [`GameError::InvalidBoardSize`] when `board_size` is zero, odd, or
    /// not one of the configured sizes. No state is mutated.
    pub fn start_round(&mut self, board_size: usize) -> Result<Option<PoolRequest>, GameError> {
        if !self.config.is_playable_size(board_size) {
            return Err(GameError::InvalidBoardSize(board_size));
        }

        if let Some(pending) = self.pending {
            if pending.generation == self.session.gen && pending.board_size == board_size {
                tracing::debug!(token = %pending.token, "pool fetch already in flight");
                return Ok(None);
            }
        }

        self.session.board_size = board_size;
        self.session.difficulty = board_size;
        self.session.turns = 0;
        self.session.game_win = false;
        self.session.start_time = self.clock.now_ms();
        self.save();

        self.engine = None;
        self.next_token += 1;
        let request = PoolRequest {
            token: RequestToken::new(self.next_token),
            generation: self.session.gen,
            board_size,
        };
        self.pending = Some(request);

        tracing::info!(
            generation = request.generation,
            board_size,
            token = %request.token,
            "round starting, pool requested"
        );
        Ok(Some(request))
    }

    /// Complete a pool fetch.
    ///
    /// Stale tokens (anything but the most recent request) are silently
    /// dropped. A transport failure or an undersized pool leaves the round
    /// unstarted and surfaces an [`GameEvent::Error`]; the caller may
    /// retry by invoking `start_round` again.
    pub fn supply_pool(&mut self, token: RequestToken, result: Result<Vec<Entity>, FetchError>) {
        let Some(pending) = self.pending else {
            tracing::debug!(%token, "discarding pool result with no request in flight");
            return;
        };
        if pending.token != token {
            tracing::debug!(stale = %token, current = %pending.token, "discarding stale pool result");
            return;
        }
        self.pending = None;

        let pool = match result {
            Ok(pool) => pool,
            Err(err) => {
                tracing::warn!(%err, generation = pending.generation, "pool fetch failed");
                self.events.push(GameEvent::Error {
                    kind: ErrorKind::Fetch,
                });
                return;
            }
        };

        match build_deck(&pool, pending.board_size, &mut self.rng) {
            Ok(deck) => {
                self.engine = Some(MatchEngine::new(deck));
                self.events.push(GameEvent::DeckReady {
                    generation: pending.generation,
                    board_size: pending.board_size,
                });
            }
            Err(err) => {
                tracing::warn!(%err, "deck construction failed");
                self.events.push(GameEvent::Error {
                    kind: ErrorKind::InsufficientPool,
                });
            }
        }
    }

    // === Play ===

    /// Flip a card. Invalid flips are ignored, matching the engine.
    pub fn flip(&mut self, card: CardId) {
        let outcome = match self.engine.as_mut() {
            Some(engine) => engine.flip(card),
            None => return,
        };

        match outcome {
            FlipOutcome::Ignored => {}
            FlipOutcome::Revealed { card } => {
                self.events.push(GameEvent::CardFlipped {
                    card,
                    face: Face::Revealed,
                });
            }
            FlipOutcome::Matched {
                first,
                second,
                round_won,
            } => {
                self.events.push(GameEvent::CardFlipped {
                    card: first,
                    face: Face::Matched,
                });
                self.events.push(GameEvent::CardFlipped {
                    card: second,
                    face: Face::Matched,
                });
                self.record_turn();
                if round_won {
                    self.round_won();
                }
            }
            FlipOutcome::Mismatched { first, second } => {
                self.events.push(GameEvent::CardFlipped {
                    card: second,
                    face: Face::Revealed,
                });
                self.events.push(GameEvent::MismatchPending {
                    first,
                    second,
                    delay_ms: self.config.mismatch_delay_ms,
                });
            }
        }
    }

    /// Revert a pending mismatch once the caller's reveal delay elapses.
    pub fn resolve_mismatch(&mut self) {
        let resolved = match self.engine.as_mut() {
            Some(engine) => engine.resolve_mismatch(),
            None => return,
        };

        if let Some((first, second)) = resolved {
            self.events.push(GameEvent::CardFlipped {
                card: first,
                face: Face::Hidden,
            });
            self.events.push(GameEvent::CardFlipped {
                card: second,
                face: Face::Hidden,
            });
            self.record_turn();
        }
    }

    /// Spend a power-up, revealing all face-down cards.
    ///
    /// The caller shows the listed cards for the configured duration and
    /// re-hides them itself; engine face state is untouched.
    ///
    /// # Errors
    ///
    /// [`GameError::NoPowerUps`] with none left, or
    /// [`GameError::NoActiveRound`] without a dealt, unfinished round.
    pub fn use_power_up(&mut self) -> Result<(), GameError> {
        if self.session.power_ups == 0 {
            return Err(GameError::NoPowerUps);
        }

        let revealed = match &self.engine {
            Some(engine) if engine.phase() != Phase::RoundWon => engine.hidden_cards(),
            _ => return Err(GameError::NoActiveRound),
        };

        self.session.power_ups -= 1;
        self.save();
        self.events.push(GameEvent::PowerUpUsed {
            revealed,
            duration_ms: self.config.power_up_reveal_ms,
            remaining: self.session.power_ups,
        });
        Ok(())
    }

    // === Progression ===

    /// Move to the next generation after a won round.
    ///
    /// At the final generation the session is left unchanged and
    /// [`GameEvent::GameCompleted`] fires instead - the playthrough ends
    /// with [`SessionController::restart`]. Otherwise the generation
    /// increments, the round state resets, and a new round starts once the
    /// player picks a board size. Any in-flight pool fetch is invalidated.
    ///
    /// # Errors
    ///
    /// [`GameError::RoundNotWon`] when the current round is not won.
    pub fn advance_generation(&mut self) -> Result<(), GameError> {
        if !self.session.game_win {
            return Err(GameError::RoundNotWon);
        }

        if self.config.is_final_generation(self.session.gen) {
            self.events.push(GameEvent::GameCompleted);
            return Ok(());
        }

        self.session.gen += 1;
        self.session.turns = 0;
        self.session.game_win = false;
        self.session.board_size = 0;
        self.session.difficulty = 0;
        self.engine = None;
        self.pending = None;
        self.save();

        tracing::info!(generation = self.session.gen, "generation advanced");
        self.events.push(GameEvent::GenerationAdvanced {
            generation: self.session.gen,
        });
        Ok(())
    }

    /// Reset the playthrough to generation 1 after clearing the game.
    ///
    /// Keeps the mute preference and any unspent power-ups.
    pub fn restart(&mut self) {
        self.session.gen = 1;
        self.session.turns = 0;
        self.session.total_turns = 0;
        self.session.game_win = false;
        self.session.difficulty = 0;
        self.session.board_size = 0;
        self.session.start_time = 0;
        self.engine = None;
        self.pending = None;
        self.save();
    }

    /// Toggle the persisted mute flag; returns the new value.
    pub fn toggle_mute(&mut self) -> bool {
        self.session.mute = !self.session.mute;
        self.save();
        self.session.mute
    }

    // === Accessors ===

    /// The persisted session record.
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The engine configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The active round's deck, once dealt.
    #[must_use]
    pub fn deck(&self) -> Option<&Deck> {
        self.engine.as_ref().map(MatchEngine::deck)
    }

    /// The active round's phase, once dealt.
    #[must_use]
    pub fn phase(&self) -> Option<Phase> {
        self.engine.as_ref().map(MatchEngine::phase)
    }

    /// The pool request awaiting completion, if any.
    #[must_use]
    pub fn pending_request(&self) -> Option<PoolRequest> {
        self.pending
    }

    /// Take all events queued since the last drain.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    // === Internals ===

    /// One completed pair comparison: bump both turn counters and persist.
    fn record_turn(&mut self) {
        self.session.turns += 1;
        self.session.total_turns += 1;
        self.save();
        self.events.push(GameEvent::TurnRecorded {
            turns: self.session.turns,
        });
    }

    fn round_won(&mut self) {
        self.session.game_win = true;
        // Winning a round earns one power-up, banked across generations.
        self.session.power_ups += 1;
        self.save();

        let elapsed_ms = self.clock.now_ms().saturating_sub(self.session.start_time);
        let rating = scoring::rate(self.session.turns);
        tracing::info!(
            generation = self.session.gen,
            turns = self.session.turns,
            elapsed_ms,
            %rating,
            "round won"
        );
        self.events.push(GameEvent::RoundWon {
            turns: self.session.turns,
            elapsed_ms,
            rating,
        });
    }

    fn save(&mut self) {
        save_session(&mut self.store, &self.config.session_key, &self.session);
    }
}
