//! Hero section: profile image with blur toggle, revealed name, copy,
//! social links and a status badge.

pub mod blur;
pub mod config;
pub mod reveal;
pub mod view;

pub use blur::{ImageBlur, ImageDisplay};
pub use config::{HeroConfig, SocialLink, StatusBadge};
pub use view::HeroView;
