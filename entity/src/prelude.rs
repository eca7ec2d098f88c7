pub use super::background::Entity as Background;
pub use super::character::Entity as Character;
pub use super::resource::Entity as Resource;
pub use super::rote::Entity as Rote;
pub use super::user::Entity as User;
