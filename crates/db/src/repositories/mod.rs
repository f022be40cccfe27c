//! Repositories for database access.
//!
//! Each repository wraps the shared connection and exposes the single-shot
//! queries and mutations the services are built from.

mod follower;
mod like;
mod media;
mod tweet;
mod user;

pub use follower::FollowerRepository;
pub use like::LikeRepository;
pub use media::MediaRepository;
pub use tweet::TweetRepository;
pub use user::UserRepository;
