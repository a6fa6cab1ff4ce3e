//! UIコンポーネント

pub mod header;
pub mod settings_panel;
pub mod source_inputs;
pub mod generate_button;
pub mod recipe_card;
pub mod toaster;
