pub mod avatar;
pub mod svg;

pub use avatar::{cache_avatar, store_avatar};
pub use svg::generate_svg;
