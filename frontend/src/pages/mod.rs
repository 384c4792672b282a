pub mod home;
pub mod puzzle;
