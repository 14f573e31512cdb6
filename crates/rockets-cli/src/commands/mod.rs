pub mod countries;
pub mod dispatch;
pub mod rankings;
pub mod revenue;
pub mod stats;
