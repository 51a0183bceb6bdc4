pub mod add;
pub mod browse;
pub mod edit;
pub mod main_menu;
pub mod quit;
pub mod search;
