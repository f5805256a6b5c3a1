//! Persisted store document and its mutation helpers
//!
//! The document mirrors what the Mini App kept in browser storage: the
//! authenticated session plus the offline collections. The mutation helpers
//! implement the backend's write semantics so the offline responder can reuse
//! them verbatim.

use std::collections::HashMap;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::models::{
    Complaint, ComplaintStatus, ComplaintUpdate, MeterReading, MeterType, NewComplaint,
    NewReading, Notification, NotificationKind, User,
};

/// Authenticated session persisted across launches
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: User,
}

/// The whole on-disk document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreData {
    pub session: Option<Session>,
    pub users: Vec<User>,
    pub complaints: Vec<Complaint>,
    pub readings: HashMap<MeterType, Vec<MeterReading>>,
    pub notifications: Vec<Notification>,
}

impl StoreData {
    /// Append a complaint with initial status `new`. Ids follow the backend's
    /// length+1 scheme; single-writer assumption, same as the original.
    pub fn append_complaint(&mut self, new: NewComplaint) -> Complaint {
        let now = Utc::now();
        let complaint = Complaint {
            id: self.complaints.len() as i64 + 1,
            title: new.title,
            description: new.description,
            category: new.category,
            priority: new.priority,
            status: ComplaintStatus::New,
            response: None,
            created_at: now,
            updated_at: now,
        };
        self.complaints.push(complaint.clone());
        complaint
    }

    /// Apply an admin status update in place. Transitions are not validated;
    /// any status may replace any other.
    pub fn update_complaint(&mut self, id: i64, update: ComplaintUpdate) -> Option<&Complaint> {
        let complaint = self.complaints.iter_mut().find(|c| c.id == id)?;
        complaint.status = update.status;
        if update.response.is_some() {
            complaint.response = update.response;
        }
        complaint.updated_at = Utc::now();
        Some(complaint)
    }

    /// Append a reading, deriving consumption from the most recent prior
    /// reading of the same meter type. Negative consumption is accepted.
    /// Ids are unique across all meter types, matching the backend's single
    /// autoincrement column.
    pub fn append_reading(&mut self, meter_type: MeterType, new: NewReading) -> MeterReading {
        let id = self.readings_count() as i64 + 1;
        let list = self.readings.entry(meter_type).or_default();
        let previous_value = list.last().map(|r| r.value);
        let reading = MeterReading {
            id,
            meter_type,
            value: new.value,
            previous_value,
            consumption: previous_value.map(|p| new.value - p),
            notes: new.notes,
            is_verified: false,
            created_at: Utc::now(),
        };
        list.push(reading.clone());
        reading
    }

    /// Most recent reading across all meter types
    pub fn last_reading(&self) -> Option<&MeterReading> {
        self.readings
            .values()
            .filter_map(|list| list.last())
            .max_by_key(|r| r.created_at)
    }

    pub fn readings_count(&self) -> usize {
        self.readings.values().map(|list| list.len()).sum()
    }

    pub fn active_complaints_count(&self) -> usize {
        self.complaints.iter().filter(|c| c.status.is_active()).count()
    }

    /// Mark a reading verified by id, across all meter types
    pub fn verify_reading(&mut self, id: i64) -> Option<&MeterReading> {
        for list in self.readings.values_mut() {
            if let Some(reading) = list.iter_mut().find(|r| r.id == id) {
                reading.is_verified = true;
                return Some(reading);
            }
        }
        None
    }

    /// Insert or update a user keyed by telegram_id
    pub fn upsert_user(&mut self, user: User) {
        match self
            .users
            .iter()
            .position(|u| u.telegram_id == user.telegram_id)
        {
            Some(pos) => self.users[pos] = user,
            None => self.users.push(user),
        }
    }

    pub fn append_notification(
        &mut self,
        title: String,
        message: String,
        kind: NotificationKind,
    ) -> Notification {
        let notification = Notification {
            id: self.notifications.len() as i64 + 1,
            title,
            message,
            kind,
            read: false,
            created_at: Utc::now(),
        };
        self.notifications.push(notification.clone());
        notification
    }

    pub fn mark_notification_read(&mut self, id: i64) -> bool {
        match self.notifications.iter_mut().find(|n| n.id == id) {
            Some(n) => {
                n.read = true;
                true
            }
            None => false,
        }
    }
}
