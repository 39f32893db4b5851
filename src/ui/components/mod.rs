pub mod mode_selector;
pub mod progress_bar;
pub mod result_panel;
pub mod target_view;
pub mod typed_field;
