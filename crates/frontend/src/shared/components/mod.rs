pub mod menu_button;
