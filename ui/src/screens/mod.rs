// This file makes the screen modules available to the rest of the application.

pub mod donate;
pub mod home;
pub mod login;
pub mod my_donations;
pub mod register;
pub mod request;
pub mod request_blood;
