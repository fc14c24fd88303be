//! Ticket domain entity

use chrono::{DateTime, Utc};

/// Payment status of a ticket
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicketStatus {
    Reserved,
    Paid,
}

impl TicketStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Reserved => "RESERVED",
            Self::Paid => "PAID",
        }
    }
}

impl std::fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketType {
    pub id: i32,
    pub name: String,
    /// Price in cents
    pub price: i32,
    pub is_remote: bool,
    pub includes_hotel: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    pub id: i32,
    pub enrollment_id: i32,
    pub status: TicketStatus,
    pub ticket_type: TicketType,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Ticket {
    /// A ticket entitles its holder to a hotel room when it is paid,
    /// in-person and its type includes lodging.
    pub fn grants_hotel(&self) -> bool {
        self.status == TicketStatus::Paid
            && !self.ticket_type.is_remote
            && self.ticket_type.includes_hotel
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn ticket(status: TicketStatus, is_remote: bool, includes_hotel: bool) -> Ticket {
        let now = Utc::now();
        Ticket {
            id: 1,
            enrollment_id: 1,
            status,
            ticket_type: TicketType {
                id: 1,
                name: "Presencial + Hotel".into(),
                price: 60000,
                is_remote,
                includes_hotel,
            },
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn paid_in_person_with_hotel_grants_hotel() {
        assert!(ticket(TicketStatus::Paid, false, true).grants_hotel());
    }

    #[test]
    fn every_disqualifier_revokes_hotel() {
        for status in [TicketStatus::Paid, TicketStatus::Reserved] {
            for is_remote in [false, true] {
                for includes_hotel in [false, true] {
                    let eligible =
                        status == TicketStatus::Paid && !is_remote && includes_hotel;
                    assert_eq!(
                        ticket(status, is_remote, includes_hotel).grants_hotel(),
                        eligible,
                        "status={status} remote={is_remote} hotel={includes_hotel}"
                    );
                }
            }
        }
    }

    #[test]
    fn status_displays_as_stored() {
        assert_eq!(TicketStatus::Paid.to_string(), "PAID");
        assert_eq!(TicketStatus::Reserved.to_string(), "RESERVED");
    }
}
