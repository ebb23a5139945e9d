pub mod contact;
pub mod projects;

pub use contact::ContactService;
pub use projects::ProjectService;
