use std::cell::RefCell;
use std::rc::Rc;

use gtk4::{cairo, prelude::*, DrawingArea, GestureClick};
use itertools::Itertools;
use log::{error, trace};

use super::board_painter::BoardPainter;
use super::layout::{grid_width, CellBounds, BACKGROUND, GRID_LINE, HINT, HINT_STROKE_WIDTH, SYMBOL_STROKE_WIDTH};
use crate::destroyable::Destroyable;
use crate::events::{EventEmitter, EventObserver, Unsubscriber};
use crate::model::{GameEngineCommand, GameEngineEvent, GridPosition};

struct CanvasState<S> {
    snapshot: Option<S>,
    hint: Option<GridPosition>,
}

/// The board itself: paints the latest snapshot and turns clicks into cell
/// commands.
pub struct BoardCanvasUI<S: BoardPainter> {
    pub drawing_area: DrawingArea,
    state: Rc<RefCell<CanvasState<S>>>,
    gesture_click: Option<GestureClick>,
    subscription: Option<Unsubscriber<GameEngineEvent<S>>>,
}

impl<S: BoardPainter> Destroyable for BoardCanvasUI<S> {
    fn destroy(&mut self) {
        if let Some(gesture_click) = self.gesture_click.take() {
            self.drawing_area.remove_controller(&gesture_click);
        }
        if let Some(subscription) = self.subscription.take() {
            subscription.unsubscribe();
        }
    }
}

impl<S: BoardPainter + PartialEq> BoardCanvasUI<S> {
    pub fn new(
        game_engine_command_emitter: EventEmitter<GameEngineCommand>,
        game_engine_event_observer: EventObserver<GameEngineEvent<S>>,
    ) -> Rc<RefCell<Self>> {
        let kind = S::KIND;
        let drawing_area = DrawingArea::builder()
            .name("board-canvas")
            .content_width(kind.canvas_width())
            .content_height(kind.canvas_height())
            .hexpand(false)
            .vexpand(false)
            .halign(gtk4::Align::Center)
            .build();

        let state = Rc::new(RefCell::new(CanvasState {
            snapshot: None,
            hint: None,
        }));

        {
            let state = Rc::clone(&state);
            drawing_area.set_draw_func(move |_, cr, _, _| {
                if let Err(err) = paint(cr, &state.borrow()) {
                    error!(target: "board_canvas_ui", "Failed to paint board: {}", err);
                }
            });
        }

        let canvas = Rc::new(RefCell::new(Self {
            drawing_area,
            state,
            gesture_click: None,
            subscription: None,
        }));

        Self::register_click_handler(&canvas, game_engine_command_emitter);
        Self::connect_observer(&canvas, game_engine_event_observer);
        canvas
    }

    fn register_click_handler(
        canvas: &Rc<RefCell<Self>>,
        game_engine_command_emitter: EventEmitter<GameEngineCommand>,
    ) {
        let kind = S::KIND;
        let gesture_click = GestureClick::new();
        gesture_click.set_button(1);
        gesture_click.connect_pressed(move |_gesture, _, x, y| {
            let Some(position) = GridPosition::from_pixel(x, y, kind.cell_size()) else {
                return;
            };
            if position.row >= kind.n_rows() || position.col >= kind.n_cols() {
                trace!(target: "board_canvas_ui", "Click outside the board at {}", position);
                return;
            }
            trace!(target: "board_canvas_ui", "Click on {}", position);
            game_engine_command_emitter.emit(GameEngineCommand::CellClicked(position));
        });

        let mut canvas = canvas.borrow_mut();
        canvas.drawing_area.add_controller(gesture_click.clone());
        canvas.gesture_click = Some(gesture_click);
    }

    fn connect_observer(
        canvas: &Rc<RefCell<Self>>,
        game_engine_event_observer: EventObserver<GameEngineEvent<S>>,
    ) {
        let state = Rc::clone(&canvas.borrow().state);
        let drawing_area = canvas.borrow().drawing_area.clone();
        let subscription = game_engine_event_observer.subscribe(move |event| {
            let mut state = state.borrow_mut();
            match event {
                GameEngineEvent::BoardUpdated(snapshot) => {
                    // a hint only applies to the board it was computed for
                    if state.snapshot.as_ref() != Some(snapshot) {
                        state.hint = None;
                    }
                    state.snapshot = Some(snapshot.clone());
                }
                GameEngineEvent::HintSuggested(hint) => state.hint = *hint,
                GameEngineEvent::MoveRejected(_) => return,
            }
            drawing_area.queue_draw();
        });
        canvas.borrow_mut().subscription = Some(subscription);
    }
}

fn paint<S: BoardPainter>(cr: &cairo::Context, state: &CanvasState<S>) -> Result<(), cairo::Error> {
    let kind = S::KIND;
    let cell_size = kind.cell_size() as f64;
    let width = kind.canvas_width() as f64;
    let height = kind.canvas_height() as f64;

    BACKGROUND.apply(cr);
    cr.paint()?;

    let grid = grid_width(kind);
    GRID_LINE.apply(cr);
    cr.set_line_width(grid);
    cr.set_line_cap(cairo::LineCap::Round);
    for row in 1..kind.n_rows() {
        let y = row as f64 * cell_size;
        cr.move_to(grid / 2.0, y);
        cr.line_to(width - grid / 2.0, y);
    }
    for col in 1..kind.n_cols() {
        let x = col as f64 * cell_size;
        cr.move_to(x, grid / 2.0);
        cr.line_to(x, height - grid / 2.0);
    }
    cr.stroke()?;

    let Some(snapshot) = &state.snapshot else {
        return Ok(());
    };

    cr.set_line_width(SYMBOL_STROKE_WIDTH);
    cr.set_line_join(cairo::LineJoin::Round);
    for (row, col) in (0..kind.n_rows()).cartesian_product(0..kind.n_cols()) {
        let position = GridPosition::new(row, col);
        snapshot.paint_cell(cr, position, &CellBounds::for_cell(kind, position))?;
    }

    if let Some(hint) = state.hint {
        HINT.apply(cr);
        cr.set_line_width(HINT_STROKE_WIDTH);
        let inset = HINT_STROKE_WIDTH / 2.0;
        cr.rectangle(
            hint.col as f64 * cell_size + inset,
            hint.row as f64 * cell_size + inset,
            cell_size - HINT_STROKE_WIDTH,
            cell_size - HINT_STROKE_WIDTH,
        );
        cr.stroke()?;
    }
    Ok(())
}
