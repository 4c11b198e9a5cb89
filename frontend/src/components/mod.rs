pub mod brand_header;
pub mod stadium_background;

pub use brand_header::BrandHeader;
pub use stadium_background::StadiumBackground;
