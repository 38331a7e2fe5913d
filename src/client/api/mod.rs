#[cfg(feature = "web")]
pub mod helper;

#[cfg(feature = "web")]
pub mod contact;

#[cfg(feature = "web")]
pub mod event;

#[cfg(feature = "web")]
pub mod gallery;

#[cfg(feature = "web")]
pub mod news;

#[cfg(feature = "web")]
pub use contact::get_contact;

#[cfg(feature = "web")]
pub use event::get_events;

#[cfg(feature = "web")]
pub use gallery::get_gallery;

#[cfg(feature = "web")]
pub use news::get_news;
