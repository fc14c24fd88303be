pub mod booking;
pub mod health;
pub mod request_id;
