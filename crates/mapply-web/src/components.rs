mod content;
mod control_panel;
mod event_item;
mod footer;
mod header;
mod map_view;
mod not_found;
mod placeholder_page;
mod status_banner;

pub use content::Content;
pub use control_panel::ControlPanel;
pub use event_item::EventItem;
pub use footer::Footer;
pub use header::Header;
pub use map_view::MapView;
pub use not_found::NotFound;
pub use placeholder_page::PlaceholderPage;
pub use status_banner::StatusBanner;
