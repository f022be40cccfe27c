//! `SeaORM` entities for the chirp schema.

pub mod follower;
pub mod like;
pub mod media;
pub mod tweet;
pub mod user;

pub use follower::Entity as Follower;
pub use like::Entity as Like;
pub use media::Entity as Media;
pub use tweet::Entity as Tweet;
pub use user::Entity as User;
