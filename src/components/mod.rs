//! UI components composed by the studio page.

pub mod add_video_form;
pub mod player_panel;
pub mod video_grid;
