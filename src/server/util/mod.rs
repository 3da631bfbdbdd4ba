pub mod media;
pub mod password;
