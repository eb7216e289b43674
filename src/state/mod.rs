pub mod lightbox;
pub mod preload;
pub mod view;
pub mod visibility;

pub use preload::ImagePreloader;
pub use view::{StoreEvent, StoreHandle, ViewStore};
pub use visibility::{IntersectionTracker, Section, VisibilityTracker};
