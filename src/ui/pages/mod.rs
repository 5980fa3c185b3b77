mod waitlist;

pub use waitlist::WaitlistPage;
