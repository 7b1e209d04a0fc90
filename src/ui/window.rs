use gio::{Menu, SimpleAction};
use glib::timeout_add_local_once;
use gtk4::gdk::Display;
use gtk4::{
    prelude::*, AboutDialog, Application, ApplicationWindow, Button, CssProvider, DropDown,
    HeaderBar, License, MenuButton, Orientation, STYLE_PROVIDER_PRIORITY_APPLICATION,
};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use super::game_view::GameView;
use super::status_bar_ui::TERMINAL_CSS_CLASS;
use crate::destroyable::Destroyable;
use crate::game::Settings;
use crate::model::GameKind;

const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
const HINT_COOLDOWN: Duration = Duration::from_secs(4);

type CurrentView = Rc<RefCell<Option<GameView>>>;

fn stylesheet() -> String {
    format!(
        "#status-bar {{ color: black; }}\n#status-bar.{} {{ color: red; }}\n#game-view {{ background: white; }}",
        TERMINAL_CSS_CLASS
    )
}

fn window_title(kind: GameKind, seed: Option<u64>) -> String {
    match seed {
        Some(seed) if Settings::is_debug_mode() => format!("{} (seed {})", kind.title(), seed),
        _ => kind.title().to_string(),
    }
}

fn hint_available(kind: GameKind, settings: &Settings) -> bool {
    settings.show_hint_button && kind == GameKind::LightsOut
}

fn mount_game(
    window: &ApplicationWindow,
    root: &gtk4::Box,
    current_view: &CurrentView,
    kind: GameKind,
    seed: Option<u64>,
) {
    let previous = current_view.borrow_mut().take();
    if let Some(mut view) = previous {
        log::debug!(target: "window", "Unmounting {}", view.kind);
        view.destroy();
        root.remove(&view.container);
    }
    log::info!(target: "window", "Mounting {}", kind);
    let view = GameView::new(kind, seed);
    root.append(&view.container);
    window.set_title(Some(&window_title(kind, seed)));
    *current_view.borrow_mut() = Some(view);
}

fn hint_button_handler(
    current_view: &CurrentView,
    settings: &Rc<RefCell<Settings>>,
) -> impl Fn(&Button) {
    let current_view = Rc::clone(current_view);
    let settings = Rc::clone(settings);
    move |button| {
        let Some(kind) = current_view.borrow().as_ref().map(|view| view.kind) else {
            return;
        };
        if !hint_available(kind, &settings.borrow()) {
            return;
        }
        log::trace!(target: "window", "Handling hint button click");
        if let Some(view) = current_view.borrow().as_ref() {
            view.show_hint();
        }
        button.set_sensitive(false);
        let button = button.clone();
        let current_view = Rc::clone(&current_view);
        let settings = Rc::clone(&settings);
        timeout_add_local_once(HINT_COOLDOWN, move || {
            log::trace!(target: "window", "Re-enabling hint button");
            let kind = current_view.borrow().as_ref().map(|view| view.kind);
            button.set_sensitive(kind.is_some_and(|kind| hint_available(kind, &settings.borrow())));
        });
    }
}

pub fn build_ui(app: &Application) {
    let settings = Rc::new(RefCell::new(Settings::load()));
    let mut startup = settings.borrow().clone();
    startup.apply_env_overrides();
    let initial_kind = startup.game;
    let seed = Settings::seed_from_env();

    let window = ApplicationWindow::builder()
        .application(app)
        .title(window_title(initial_kind, seed))
        .resizable(false)
        .decorated(true)
        .build();

    if let Some(display) = Display::default() {
        let provider = CssProvider::new();
        provider.load_from_string(&stylesheet());
        gtk4::style_context_add_provider_for_display(
            &display,
            &provider,
            STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
    } else {
        log::warn!(target: "window", "No display; default styling only");
    }

    let root = gtk4::Box::builder()
        .name("top-level-box")
        .orientation(Orientation::Vertical)
        .build();
    window.set_child(Some(&root));

    let current_view: CurrentView = Rc::new(RefCell::new(None));

    // Header bar: game selector on the left, hint and menu on the right
    let header_bar = HeaderBar::new();

    let titles = GameKind::all()
        .iter()
        .map(|kind| kind.title())
        .collect::<Vec<&str>>();
    let game_selector = DropDown::from_strings(&titles);
    game_selector.set_tooltip_text(Some("Select Game"));
    game_selector.set_selected(initial_kind.index() as u32);
    header_bar.pack_start(&game_selector);

    let hint_button = Button::from_icon_name("view-reveal-symbolic");
    hint_button.set_tooltip_text(Some("Show Hint"));
    hint_button.set_visible(settings.borrow().show_hint_button);
    hint_button.set_sensitive(hint_available(initial_kind, &settings.borrow()));
    hint_button.connect_clicked(hint_button_handler(&current_view, &settings));

    let menu = Menu::new();
    menu.append(Some("Restart"), Some("win.restart"));
    menu.append(Some("About"), Some("win.about"));
    let menu_button = MenuButton::builder()
        .icon_name("open-menu-symbolic")
        .menu_model(&menu)
        .build();

    header_bar.pack_end(&menu_button);
    header_bar.pack_end(&hint_button);
    window.set_titlebar(Some(&header_bar));

    mount_game(&window, &root, &current_view, initial_kind, seed);

    {
        let window = window.clone();
        let root = root.clone();
        let current_view = Rc::clone(&current_view);
        let settings = Rc::clone(&settings);
        let hint_button = hint_button.clone();
        game_selector.connect_selected_notify(move |selector| {
            let kind = GameKind::from_index(selector.selected() as usize);
            if current_view.borrow().as_ref().map(|view| view.kind) == Some(kind) {
                return;
            }
            settings.borrow_mut().game = kind;
            if let Err(err) = settings.borrow().save() {
                log::error!(target: "window", "Failed to save settings: {}", err);
            }
            mount_game(&window, &root, &current_view, kind, seed);
            hint_button.set_sensitive(hint_available(kind, &settings.borrow()));
        });
    }

    app.set_accels_for_action("win.restart", &["<Control>r"]);
    app.set_accels_for_action("win.hint", &["<Control>h"]);

    let action_restart = SimpleAction::new("restart", None);
    {
        let current_view = Rc::clone(&current_view);
        action_restart.connect_activate(move |_, _| {
            if let Some(view) = current_view.borrow().as_ref() {
                view.restart();
            }
        });
    }
    window.add_action(&action_restart);

    let action_hint = SimpleAction::new("hint", None);
    {
        let hint_button = hint_button.clone();
        action_hint.connect_activate(move |_, _| {
            if hint_button.is_sensitive() {
                hint_button.emit_clicked();
            }
        });
    }
    window.add_action(&action_hint);

    let action_about = SimpleAction::new("about", None);
    action_about.connect_activate(move |_, _| {
        let dialog = AboutDialog::builder()
            .program_name("Grid Games")
            .version(APP_VERSION)
            .comments("Lights Out and Tic Tac Toe")
            .license_type(License::MitX11)
            .build();
        dialog.present();
    });
    window.add_action(&action_about);

    window.connect_close_request(move |_| {
        log::info!(target: "window", "Closing window");
        if let Some(mut view) = current_view.borrow_mut().take() {
            view.destroy();
        }
        if let Err(err) = settings.borrow().save() {
            log::error!(target: "window", "Failed to save settings: {}", err);
        }
        glib::signal::Propagation::Proceed
    });

    window.present();
}
