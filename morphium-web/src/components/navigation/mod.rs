pub mod drop_down_nav;
pub mod flyout_menu;
pub mod mobile_menu;
pub mod nav_group;
pub mod side_nav;
pub mod top_nav;

pub use drop_down_nav::DropDownNav;
pub use flyout_menu::FlyoutMenu;
pub use mobile_menu::MobileMenu;
pub use nav_group::{NavGroup, NavLink};
pub use side_nav::SideNav;
pub use top_nav::TopNav;
