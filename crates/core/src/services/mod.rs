//! Business logic services.

pub mod follow;
pub mod like;
pub mod media;
pub mod tweet;
pub mod user;

pub use follow::FollowService;
pub use like::LikeService;
pub use media::MediaService;
pub use tweet::{TweetAuthor, TweetLike, TweetService, TweetView};
pub use user::{UserProfile, UserRef, UserService};
