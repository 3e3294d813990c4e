mod health;
mod not_found;
mod video_url;

pub use health::health;
pub use not_found::not_found;
pub use video_url::video_url;
