pub mod event_card;
pub mod header;
pub mod layout;
pub mod markdown;
pub mod page;
pub mod subscribe_form;

pub use event_card::EventCard;
pub use header::Header;
pub use layout::Layout;
pub use markdown::Markdown;
pub use page::{LoadingPage, Page, PageBanner};
pub use subscribe_form::SubscribeForm;
