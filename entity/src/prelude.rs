pub use super::share_note::Entity as ShareNote;
pub use super::user::Entity as User;
