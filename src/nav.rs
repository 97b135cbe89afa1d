pub mod links;
pub mod menu;
pub mod model;
pub mod render;

pub use menu::{Callback, Icon, Menus, NavigationItem, NavigationItems};
pub use model::compute_menus;
