// Shared pieces drawn by several screens

pub mod footer;
pub mod header;
pub mod help_overlay;
pub mod member_detail;

pub use footer::{Footer, FOOTER_HEIGHT};
pub use header::{Header, HEADER_HEIGHT};
pub use help_overlay::HelpOverlay;
pub use member_detail::MemberDetail;
