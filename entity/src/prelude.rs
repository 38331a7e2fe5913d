pub use super::event::Entity as Event;
pub use super::gallery_image::Entity as GalleryImage;
pub use super::news::Entity as News;
