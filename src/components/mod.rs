mod header;
mod photo_card;
mod photo_detail;
mod photo_list;
mod scroll_trigger;

pub use header::Header;
pub use photo_card::PhotoCard;
pub use photo_detail::PhotoDetailScreen;
pub use photo_list::PhotoListScreen;
pub use scroll_trigger::ScrollTrigger;
