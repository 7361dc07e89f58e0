//! Shared data model of the room reservation app.
//!
//! The frontend crate builds its state from these types; they are kept free of
//! any UI dependency so a future API server could exchange them as-is.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type ReservationId = Uuid;

/// The closed set of bookable conference rooms.
///
/// Rooms are identified by a fixed kebab-case id (`room-a` etc.) on the wire
/// and in form values. Adding a room is a code change by design.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Room {
    #[serde(rename = "room-a")]
    A,
    #[serde(rename = "room-b")]
    B,
    #[serde(rename = "room-c")]
    C,
}

impl Room {
    /// All rooms, in the order they are offered for selection.
    pub const ALL: [Room; 3] = [Room::A, Room::B, Room::C];

    pub fn id(&self) -> &'static str {
        match self {
            Room::A => "room-a",
            Room::B => "room-b",
            Room::C => "room-c",
        }
    }

    /// Human-readable label for selection lists.
    pub fn label(&self) -> &'static str {
        match self {
            Room::A => "Room A",
            Room::B => "Room B",
            Room::C => "Room C",
        }
    }

    /// Look up a room by its id string. Returns `None` for anything outside
    /// the closed set, including the empty string.
    pub fn from_id(id: &str) -> Option<Room> {
        Room::ALL.into_iter().find(|room| room.id() == id)
    }

    /// Badge text for list rows: the id with hyphens as spaces, upper-cased
    /// (`room-a` → `ROOM A`).
    pub fn badge_label(&self) -> String {
        self.id().replace('-', " ").to_uppercase()
    }

    /// Single-character avatar text: the last character of the id, upper-cased
    /// (`room-a` → `A`).
    pub fn avatar(&self) -> char {
        self.id()
            .chars()
            .next_back()
            .map(|c| c.to_ascii_uppercase())
            .unwrap_or('?')
    }
}

/// One submitted room booking.
///
/// Immutable once constructed: the app appends reservations to a list and
/// never edits or removes them. `date` and `time` keep the exact strings the
/// date/time inputs produced (`YYYY-MM-DD` / `HH:MM`); they are displayed
/// verbatim, never reparsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: ReservationId,
    pub room: Room,
    pub date: String,
    pub time: String,
    pub name: String,
}

impl Reservation {
    /// The "{date} at {time}" line shown in list rows.
    pub fn schedule_line(&self) -> String {
        format!("{} at {}", self.date, self.time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::uuid;

    #[test]
    fn test_room_from_id() {
        assert_eq!(Room::from_id("room-a"), Some(Room::A));
        assert_eq!(Room::from_id("room-b"), Some(Room::B));
        assert_eq!(Room::from_id("room-c"), Some(Room::C));
        assert_eq!(Room::from_id(""), None);
        assert_eq!(Room::from_id("room-d"), None);
        assert_eq!(Room::from_id("Room A"), None);
    }

    #[test]
    fn test_room_labels() {
        assert_eq!(Room::A.label(), "Room A");
        assert_eq!(Room::B.badge_label(), "ROOM B");
        assert_eq!(Room::C.badge_label(), "ROOM C");
        assert_eq!(Room::A.avatar(), 'A');
        assert_eq!(Room::C.avatar(), 'C');
    }

    #[test]
    fn test_room_serde_uses_ids() {
        assert_eq!(
            serde_json::to_value(Room::B).unwrap(),
            serde_json::json!("room-b")
        );
        assert_eq!(
            serde_json::from_str::<Room>("\"room-c\"").unwrap(),
            Room::C
        );
        assert!(serde_json::from_str::<Room>("\"room-d\"").is_err());
    }

    #[test]
    fn test_schedule_line_is_verbatim() {
        let reservation = Reservation {
            id: uuid!("165c1143-5a9c-4b2c-8548-d68658486763"),
            room: Room::B,
            date: "2024-03-01".to_owned(),
            time: "14:30".to_owned(),
            name: "Alice".to_owned(),
        };
        assert_eq!(reservation.schedule_line(), "2024-03-01 at 14:30");
    }
}
