pub mod calculator;
pub mod item_service;
pub mod notification_service;
