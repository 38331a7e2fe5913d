pub mod contact;
pub mod gallery;
pub mod home;
pub mod news;
pub mod not_found;

pub use contact::Contact;
pub use gallery::Gallery;
pub use home::Home;
pub use news::News;
pub use not_found::NotFound;
