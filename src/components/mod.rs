pub mod app;
pub mod sprite_panel;
pub mod stage_controls;
pub mod stage_view;
