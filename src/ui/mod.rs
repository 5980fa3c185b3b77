pub mod background;
pub mod cli_demo;
pub mod features;
pub mod footer;
pub mod icon;
pub mod navbar;
pub mod pages;
pub mod waitlist_form;

pub use pages::WaitlistPage;
