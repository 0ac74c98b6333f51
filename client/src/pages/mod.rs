pub mod about;
pub mod dashboard;
pub mod experience_detail;
pub mod experiences;
pub mod home;
pub mod register;
