pub mod adventure;
pub mod category;

pub use adventure::Adventure;
pub use category::{CallToAction, Category, CategoryImage, resolve_image_url};
