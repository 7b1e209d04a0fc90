use std::cell::RefCell;
use std::rc::Rc;

use gtk4::{prelude::*, Orientation};
use log::info;

use super::board_canvas_ui::BoardCanvasUI;
use super::board_painter::BoardPainter;
use super::status_bar_ui::StatusBarUI;
use crate::destroyable::Destroyable;
use crate::events::{Channel, EventEmitter};
use crate::game::{GameEngine, GridGame, LightsOutGame, SeededPresetPicker, TicTacToeGame};
use crate::model::{GameEngineCommand, GameEngineEvent, GameKind};

/// One mounted game: its engine, canvas and status bar, wired to a private
/// pair of channels. Switching games destroys the view and mounts a new one.
pub struct GameView {
    pub kind: GameKind,
    pub container: gtk4::Box,
    game_engine_command_emitter: EventEmitter<GameEngineCommand>,
    parts: Vec<Rc<RefCell<dyn Destroyable>>>,
}

impl Destroyable for GameView {
    fn destroy(&mut self) {
        for part in self.parts.drain(..) {
            part.borrow_mut().destroy();
        }
    }
}

impl GameView {
    pub fn new(kind: GameKind, seed: Option<u64>) -> Self {
        match kind {
            GameKind::LightsOut => {
                let picker = SeededPresetPicker::new(seed);
                info!(target: "game_view", "Lights out preset seed: {}", picker.seed());
                Self::mount(kind, LightsOutGame::new(picker))
            }
            GameKind::TicTacToe => Self::mount(kind, TicTacToeGame::new()),
        }
    }

    fn mount<G>(kind: GameKind, game: G) -> Self
    where
        G: GridGame + 'static,
        G::Snapshot: BoardPainter + PartialEq,
    {
        let (game_engine_command_emitter, game_engine_command_observer) =
            Channel::<GameEngineCommand>::new();
        let (game_engine_event_emitter, game_engine_event_observer) =
            Channel::<GameEngineEvent<G::Snapshot>>::new();

        let canvas = BoardCanvasUI::new(
            game_engine_command_emitter.clone(),
            game_engine_event_observer.clone(),
        );
        let status_bar = StatusBarUI::new(game_engine_event_observer);
        let engine = GameEngine::new(
            game,
            game_engine_command_observer,
            game_engine_event_emitter,
        );

        let container = gtk4::Box::builder()
            .name("game-view")
            .orientation(Orientation::Vertical)
            .build();
        container.append(&canvas.borrow().drawing_area);
        container.append(&status_bar.borrow().label);

        game_engine_command_emitter.emit(GameEngineCommand::InitDisplay);

        let mut parts: Vec<Rc<RefCell<dyn Destroyable>>> = Vec::with_capacity(3);
        parts.push(engine);
        parts.push(canvas);
        parts.push(status_bar);

        Self {
            kind,
            container,
            game_engine_command_emitter,
            parts,
        }
    }

    pub fn restart(&self) {
        self.game_engine_command_emitter
            .emit(GameEngineCommand::Restart);
    }

    pub fn show_hint(&self) {
        self.game_engine_command_emitter
            .emit(GameEngineCommand::ShowHint);
    }
}
