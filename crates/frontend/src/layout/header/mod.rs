pub mod header;
pub mod nav;

pub use header::Header;
pub use nav::{NavBar, NavItem, NAV_ITEMS};
