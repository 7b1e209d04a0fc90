use std::cell::RefCell;
use std::rc::Rc;

use gtk4::{prelude::*, Label};

use super::layout::{STATUS_MARGIN_BOTTOM, STATUS_MARGIN_SIDE, STATUS_MARGIN_TOP};
use crate::destroyable::Destroyable;
use crate::events::{EventObserver, Unsubscriber};
use crate::model::{GameEngineEvent, GameSnapshot};

pub const TERMINAL_CSS_CLASS: &str = "status-terminal";

pub struct StatusBarUI<S: GameSnapshot> {
    pub label: Label,
    subscription: Option<Unsubscriber<GameEngineEvent<S>>>,
}

impl<S: GameSnapshot> Destroyable for StatusBarUI<S> {
    fn destroy(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.unsubscribe();
        }
    }
}

impl<S: GameSnapshot> StatusBarUI<S> {
    pub fn new(game_engine_event_observer: EventObserver<GameEngineEvent<S>>) -> Rc<RefCell<Self>> {
        let label = Label::builder()
            .name("status-bar")
            .label("  ")
            .xalign(0.0)
            .hexpand(true)
            .margin_top(STATUS_MARGIN_TOP)
            .margin_bottom(STATUS_MARGIN_BOTTOM)
            .margin_start(STATUS_MARGIN_SIDE)
            .margin_end(STATUS_MARGIN_SIDE)
            .build();

        let status_bar = Rc::new(RefCell::new(Self {
            label,
            subscription: None,
        }));

        let label = status_bar.borrow().label.clone();
        let subscription = game_engine_event_observer.subscribe(move |event| {
            if let GameEngineEvent::BoardUpdated(snapshot) = event {
                Self::show(&label, snapshot);
            }
        });
        status_bar.borrow_mut().subscription = Some(subscription);
        status_bar
    }

    fn show(label: &Label, snapshot: &S) {
        label.set_text(&snapshot.status_message());
        if snapshot.is_terminal() {
            label.add_css_class(TERMINAL_CSS_CLASS);
        } else {
            label.remove_css_class(TERMINAL_CSS_CLASS);
        }
    }
}
