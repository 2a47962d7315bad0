//! App: routes terminal events into a game session.
//!
//! Everything here is terminal-free so it can be driven from tests with
//! synthetic crossterm events; `main.rs` owns the real terminal.

use crossterm::event::{KeyEvent, KeyEventKind, MouseEvent};

use anyhow::Result;

use crate::config::Config;
use crate::core::{ActionOutcome, GameRng, GameSession, GameSnapshot, TileRng};
use crate::high_score::HighScoreStore;
use crate::input::{map_key, should_quit, SwipeTracker};
use crate::term::{FrameBuffer, GameView, Viewport};
use crate::types::GameAction;

/// What the event loop should do next
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

pub struct App<R: TileRng = GameRng> {
    session: GameSession<R>,
    view: GameView,
    swipe: SwipeTracker,
    store: Option<HighScoreStore>,
    /// Best score known to be on disk
    saved_high_score: u64,
    snapshot: GameSnapshot,
}

impl App<GameRng> {
    /// Build the app from a validated config, loading the stored best score.
    ///
    /// A store that cannot be read is reported and treated as empty; the game
    /// is still playable.
    pub fn from_config(config: &Config) -> Result<Self> {
        let rules = config.rules()?;
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        log::info!(
            "{}x{} board, target {}, seed {}",
            rules.size(),
            rules.size(),
            rules.winning_value(),
            rng.seed()
        );

        let store = config
            .high_score_path
            .clone()
            .or_else(HighScoreStore::default_path)
            .map(HighScoreStore::new);
        let high_score = match &store {
            Some(store) => store.load(rules.size()).unwrap_or_else(|e| {
                log::warn!("ignoring high score file: {:#}", e);
                0
            }),
            None => 0,
        };

        let session = GameSession::new(rules, rng, high_score)?;
        let view = GameView::default().with_theme(config.theme()?);
        let swipe = SwipeTracker::new(config.swipe.min_cols, config.swipe.min_rows);
        Ok(Self::new(session, view, swipe, store))
    }
}

impl<R: TileRng> App<R> {
    pub fn new(
        session: GameSession<R>,
        view: GameView,
        swipe: SwipeTracker,
        store: Option<HighScoreStore>,
    ) -> Self {
        let saved_high_score = session.high_score();
        Self {
            session,
            view,
            swipe,
            store,
            saved_high_score,
            snapshot: GameSnapshot::default(),
        }
    }

    pub fn session(&self) -> &GameSession<R> {
        &self.session
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Control {
        // Release and repeat events arrive on some platforms; act on presses only.
        if key.kind != KeyEventKind::Press {
            return Control::Continue;
        }
        if should_quit(key) {
            self.shutdown();
            return Control::Quit;
        }
        if let Some(action) = map_key(key) {
            self.apply(action);
        }
        Control::Continue
    }

    pub fn handle_mouse(&mut self, event: MouseEvent) -> Control {
        if let Some(action) = self.swipe.handle(event) {
            self.apply(action);
        }
        Control::Continue
    }

    /// Drop a half-finished drag; coordinates change with the layout.
    pub fn handle_resize(&mut self) {
        self.swipe.reset();
    }

    pub fn apply(&mut self, action: GameAction) -> ActionOutcome {
        // The outgoing game's record is saved before a restart resets it.
        if action == GameAction::Restart {
            self.persist();
        }

        let outcome = self.session.apply_action(action);
        match outcome {
            ActionOutcome::Moved(summary) if summary.game_over => self.persist(),
            ActionOutcome::Ignored => {
                log::trace!(
                    "ignored {} in {}",
                    action.as_str(),
                    self.session.phase().as_str()
                );
            }
            _ => {}
        }
        outcome
    }

    /// Save the best score if it beats what is on disk.
    pub fn persist_high_score(&mut self) -> Result<bool> {
        let best = self.session.high_score();
        let Some(store) = &self.store else {
            return Ok(false);
        };
        if best <= self.saved_high_score {
            return Ok(false);
        }
        let written = store.save(self.session.rules().size(), best)?;
        self.saved_high_score = best;
        Ok(written)
    }

    /// Final save before the loop exits.
    pub fn shutdown(&mut self) {
        self.persist();
        log::info!(
            "quit after {} moves, score {}, best {}",
            self.session.moves(),
            self.session.score(),
            self.session.high_score()
        );
    }

    fn persist(&mut self) {
        if let Err(e) = self.persist_high_score() {
            log::warn!("could not save high score: {:#}", e);
        }
    }

    pub fn render_into(&mut self, viewport: Viewport, fb: &mut FrameBuffer) {
        self.session.snapshot_into(&mut self.snapshot);
        self.view.render_into(&self.snapshot, viewport, fb);
    }
}
