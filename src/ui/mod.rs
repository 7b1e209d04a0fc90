pub mod board_canvas_ui;
pub mod board_painter;
pub mod game_view;
pub mod layout;
pub mod status_bar_ui;
pub mod window;
