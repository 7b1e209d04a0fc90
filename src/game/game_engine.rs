use log::{trace, warn};
use std::cell::RefCell;
use std::rc::Rc;

use super::GridGame;
use crate::destroyable::Destroyable;
use crate::events::{EventEmitter, EventHandler, EventObserver, Unsubscriber};
use crate::model::{GameEngineCommand, GameEngineEvent};

/// Hosts one game behind the command/event channels: commands from the input
/// side go in, and a fresh snapshot comes out after every one of them.
pub struct GameEngine<G: GridGame> {
    game: G,
    game_engine_event_emitter: EventEmitter<GameEngineEvent<G::Snapshot>>,
    subscription: Option<Unsubscriber<GameEngineCommand>>,
}

impl<G: GridGame> Destroyable for GameEngine<G> {
    fn destroy(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.unsubscribe();
        }
    }
}

impl<G: GridGame + 'static> GameEngine<G> {
    pub fn new(
        game: G,
        game_engine_command_observer: EventObserver<GameEngineCommand>,
        game_engine_event_emitter: EventEmitter<GameEngineEvent<G::Snapshot>>,
    ) -> Rc<RefCell<Self>> {
        let engine = Rc::new(RefCell::new(Self {
            game,
            game_engine_event_emitter,
            subscription: None,
        }));
        Self::wire_subscription(engine.clone(), game_engine_command_observer);
        engine
    }

    fn wire_subscription(
        engine: Rc<RefCell<Self>>,
        game_engine_command_observer: EventObserver<GameEngineCommand>,
    ) {
        let engine_handler = engine.clone();
        let subscription = game_engine_command_observer.subscribe(move |command| {
            // A listener reacting to our own events may send a command back
            // while we are still handling the previous one; drop it.
            match engine_handler.try_borrow_mut() {
                Ok(mut engine) => engine.handle_event(command),
                Err(_) => warn!(
                    target: "game_engine",
                    "Dropping {:?}; still handling the previous command",
                    command
                ),
            }
        });
        engine.borrow_mut().subscription = Some(subscription);
    }
}

impl<G: GridGame> GameEngine<G> {
    pub fn snapshot(&self) -> G::Snapshot {
        self.game.snapshot()
    }

    fn handle_command(&mut self, command: &GameEngineCommand) {
        trace!(target: "game_engine", "Handling command: {:?}", command);
        match command {
            GameEngineCommand::CellClicked(position) => {
                if let Err(err) = self.game.apply_move(*position) {
                    warn!(target: "game_engine", "Rejected click: {}", err);
                    self.game_engine_event_emitter
                        .emit(GameEngineEvent::MoveRejected(err));
                }
            }
            GameEngineCommand::Restart => self.game.reset(),
            GameEngineCommand::InitDisplay => (),
            GameEngineCommand::ShowHint => {
                let hint = self.game.hint();
                trace!(target: "game_engine", "Hint: {:?}", hint);
                self.game_engine_event_emitter
                    .emit(GameEngineEvent::HintSuggested(hint));
            }
        }
        self.sync_board_display();
    }

    fn sync_board_display(&self) {
        self.game_engine_event_emitter
            .emit(GameEngineEvent::BoardUpdated(self.game.snapshot()));
    }
}

impl<G: GridGame> EventHandler<GameEngineCommand> for GameEngine<G> {
    fn handle_event(&mut self, event: &GameEngineCommand) {
        self.handle_command(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::Channel;
    use crate::game::lights_out::LightsOutGame;
    use crate::game::preset_picker::FixedPresetPicker;
    use crate::game::tic_tac_toe::TicTacToeGame;
    use crate::model::{
        GameError, GameSnapshot, GridPosition, LightsOutSnapshot, Mark, TicTacToeSnapshot,
        TicTacToeStatus,
    };

    type Recorded<S> = Rc<RefCell<Vec<GameEngineEvent<S>>>>;

    fn record<S: GameSnapshot>(
        observer: &EventObserver<GameEngineEvent<S>>,
    ) -> Recorded<S> {
        let events = Rc::new(RefCell::new(vec![]));
        let events_clone = events.clone();
        observer.subscribe(move |event: &GameEngineEvent<S>| {
            events_clone.borrow_mut().push(event.clone());
        });
        events
    }

    fn last_board<S: GameSnapshot>(events: &Recorded<S>) -> S {
        events
            .borrow()
            .iter()
            .rev()
            .find_map(|event| match event {
                GameEngineEvent::BoardUpdated(snapshot) => Some(snapshot.clone()),
                _ => None,
            })
            .unwrap()
    }

    #[test]
    fn test_every_command_repaints() {
        let (command_emitter, command_observer) = Channel::<GameEngineCommand>::new();
        let (event_emitter, event_observer) = Channel::<GameEngineEvent<TicTacToeSnapshot>>::new();
        let events = record(&event_observer);
        let _engine = GameEngine::new(TicTacToeGame::new(), command_observer, event_emitter);

        command_emitter.emit(GameEngineCommand::InitDisplay);
        command_emitter.emit(GameEngineCommand::CellClicked(GridPosition::new(1, 1)));
        // occupied: no state change, but still a repaint
        command_emitter.emit(GameEngineCommand::CellClicked(GridPosition::new(1, 1)));

        let events = events.borrow();
        assert_eq!(events.len(), 3);
        assert!(events
            .iter()
            .all(|event| matches!(event, GameEngineEvent::BoardUpdated(_))));
        assert_eq!(events[1], events[2]);
    }

    #[test]
    fn test_invalid_click_is_reported_and_repainted() {
        let (command_emitter, command_observer) = Channel::<GameEngineCommand>::new();
        let (event_emitter, event_observer) = Channel::<GameEngineEvent<TicTacToeSnapshot>>::new();
        let events = record(&event_observer);
        let _engine = GameEngine::new(TicTacToeGame::new(), command_observer, event_emitter);

        command_emitter.emit(GameEngineCommand::CellClicked(GridPosition::new(3, 0)));

        let events = events.borrow();
        assert_eq!(
            events[0],
            GameEngineEvent::MoveRejected(GameError::InvalidCoordinate {
                row: 3,
                col: 0,
                rows: 3,
                cols: 3
            })
        );
        assert!(matches!(events[1], GameEngineEvent::BoardUpdated(_)));
    }

    #[test]
    fn test_restart_command_resets_game() {
        let (command_emitter, command_observer) = Channel::<GameEngineCommand>::new();
        let (event_emitter, event_observer) = Channel::<GameEngineEvent<TicTacToeSnapshot>>::new();
        let events = record(&event_observer);
        let engine = GameEngine::new(TicTacToeGame::new(), command_observer, event_emitter);

        command_emitter.emit(GameEngineCommand::CellClicked(GridPosition::new(0, 0)));
        assert_eq!(
            last_board(&events).board.get(GridPosition::new(0, 0)),
            Some(Mark::Cross)
        );
        command_emitter.emit(GameEngineCommand::Restart);
        let snapshot = last_board(&events);
        assert!(snapshot.board.all(Mark::Empty));
        assert_eq!(snapshot.status, TicTacToeStatus::Playing);
        assert_eq!(engine.borrow().snapshot(), snapshot);
    }

    #[test]
    fn test_hint_for_lights_out() {
        let (command_emitter, command_observer) = Channel::<GameEngineCommand>::new();
        let (event_emitter, event_observer) = Channel::<GameEngineEvent<LightsOutSnapshot>>::new();
        let events = record(&event_observer);
        let _engine = GameEngine::new(
            LightsOutGame::new(FixedPresetPicker::new(2)),
            command_observer,
            event_emitter,
        );

        command_emitter.emit(GameEngineCommand::ShowHint);
        assert!(matches!(
            events.borrow()[0],
            GameEngineEvent::HintSuggested(Some(_))
        ));
    }

    #[test]
    fn test_no_hint_for_tic_tac_toe() {
        let (command_emitter, command_observer) = Channel::<GameEngineCommand>::new();
        let (event_emitter, event_observer) = Channel::<GameEngineEvent<TicTacToeSnapshot>>::new();
        let events = record(&event_observer);
        let _engine = GameEngine::new(TicTacToeGame::new(), command_observer, event_emitter);

        command_emitter.emit(GameEngineCommand::ShowHint);
        assert_eq!(events.borrow()[0], GameEngineEvent::HintSuggested(None));
    }

    #[test]
    fn test_reentrant_command_is_dropped() {
        let (command_emitter, command_observer) = Channel::<GameEngineCommand>::new();
        let (event_emitter, event_observer) = Channel::<GameEngineEvent<TicTacToeSnapshot>>::new();
        let events = record(&event_observer);
        let engine = GameEngine::new(TicTacToeGame::new(), command_observer, event_emitter);

        // a renderer that clicks again while the first click is being handled
        let command_emitter_inner = command_emitter.clone();
        event_observer.subscribe(move |event: &GameEngineEvent<TicTacToeSnapshot>| {
            if let GameEngineEvent::BoardUpdated(snapshot) = event {
                if snapshot.moves == 1 {
                    command_emitter_inner
                        .emit(GameEngineCommand::CellClicked(GridPosition::new(2, 2)));
                }
            }
        });

        command_emitter.emit(GameEngineCommand::CellClicked(GridPosition::new(0, 0)));

        assert_eq!(engine.borrow().snapshot().moves, 1);
        assert_eq!(events.borrow().len(), 1);
    }

    #[test]
    fn test_destroy_stops_listening() {
        let (command_emitter, command_observer) = Channel::<GameEngineCommand>::new();
        let (event_emitter, event_observer) = Channel::<GameEngineEvent<TicTacToeSnapshot>>::new();
        let events = record(&event_observer);
        let engine = GameEngine::new(TicTacToeGame::new(), command_observer.clone(), event_emitter);

        engine.borrow_mut().destroy();
        assert_eq!(command_observer.listener_count(), 0);
        command_emitter.emit(GameEngineCommand::CellClicked(GridPosition::new(0, 0)));
        assert!(events.borrow().is_empty());
    }
}
