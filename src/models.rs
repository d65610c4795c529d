pub mod user;

pub use user::{FormAction, User, UserForm};
