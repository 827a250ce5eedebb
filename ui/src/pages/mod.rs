pub mod home;
pub mod logout;
pub mod not_found;

pub use home::HomePage;
pub use logout::LogoutPage;
pub use not_found::NotFoundPage;
