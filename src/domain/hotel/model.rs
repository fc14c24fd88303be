use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hotel {
    pub id: i32,
    pub name: String,
    pub image: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub id: i32,
    pub name: String,
    /// Available slots; only zero / non-zero is consulted
    pub capacity: i32,
    pub hotel_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Room {
    pub fn has_capacity(&self) -> bool {
        self.capacity > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room(capacity: i32) -> Room {
        let now = Utc::now();
        Room {
            id: 1,
            name: "Suite".into(),
            capacity,
            hotel_id: 1,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn zero_capacity_room_is_full() {
        assert!(!room(0).has_capacity());
        assert!(room(1).has_capacity());
        assert!(room(3).has_capacity());
    }
}
