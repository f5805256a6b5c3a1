//! Data models module
//!
//! This module contains all data structures used throughout the application

pub mod complaint;
pub mod meter;
pub mod notification;
pub mod user;

// Re-export commonly used models
pub use complaint::{Complaint, ComplaintCategory, ComplaintStatus, ComplaintUpdate, NewComplaint, Priority};
pub use meter::{MeterReading, MeterType, MeterTypeInfo, NewReading};
pub use notification::{Notification, NotificationKind, NotificationRequest};
pub use user::{
    AuthResponse, LastReading, LoginRequest, TelegramAuthRequest, UpdateProfileRequest, User,
    UserStats,
};
