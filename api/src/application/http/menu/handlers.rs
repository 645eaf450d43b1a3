pub mod filter_menu;
