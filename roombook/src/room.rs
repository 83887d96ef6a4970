//! Room identifiers, the room catalog, and room filters.
//!
//! Rooms are short identifiers such as `A` or `B`. The [`RoomCatalog`] fixes
//! which rooms may be booked and the order in which they are displayed.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Longest accepted room identifier.
const MAX_ROOM_LEN: usize = 32;

/// A validated meeting-room identifier.
///
/// Identifiers are trimmed and must consist of ASCII letters, digits, `-` or
/// `_`.
///
/// # Examples
///
/// ```
/// use roombook::Room;
///
/// let room = Room::new(" A ").unwrap();
/// assert_eq!(room.as_str(), "A");
///
/// assert!(Room::new("").is_err());
/// assert!(Room::new("A,B").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Room(String);

impl Room {
    /// Creates a room identifier, validating its characters.
    ///
    /// # Errors
    ///
    /// Returns an error if the trimmed identifier is empty, too long, or
    /// contains characters other than ASCII alphanumerics, `-` and `_`.
    pub fn new(id: impl AsRef<str>) -> Result<Self, InvalidRoomError> {
        let trimmed = id.as_ref().trim();
        if trimmed.is_empty() {
            return Err(InvalidRoomError {
                value: trimmed.to_string(),
                reason: "room must be non-empty".into(),
            });
        }
        if trimmed.len() > MAX_ROOM_LEN {
            return Err(InvalidRoomError {
                value: trimmed.to_string(),
                reason: format!("room must be at most {MAX_ROOM_LEN} characters"),
            });
        }
        if !trimmed
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(InvalidRoomError {
                value: trimmed.to_string(),
                reason: "room may only contain ASCII letters, digits, '-' and '_'".into(),
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Room {
    type Err = InvalidRoomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Room {
    type Error = InvalidRoomError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Room> for String {
    fn from(room: Room) -> Self {
        room.0
    }
}

/// Error type for invalid room identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidRoomError {
    /// The rejected identifier (trimmed).
    pub value: String,
    /// The reason the identifier is invalid.
    pub reason: String,
}

impl fmt::Display for InvalidRoomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid room '{}': {}", self.value, self.reason)
    }
}

impl std::error::Error for InvalidRoomError {}

impl From<InvalidRoomError> for crate::Error {
    fn from(err: InvalidRoomError) -> Self {
        Self::Validation {
            field: "room".into(),
            message: err.to_string(),
        }
    }
}

/// The ordered set of bookable rooms.
///
/// Order matters: grouped listings show rooms in catalog order.
///
/// # Examples
///
/// ```
/// use roombook::{Room, RoomCatalog};
///
/// let catalog = RoomCatalog::default();
/// let ids: Vec<&str> = catalog.rooms().iter().map(Room::as_str).collect();
/// assert_eq!(ids, ["A", "B", "C"]);
/// assert!(catalog.contains(&Room::new("B").unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomCatalog {
    rooms: Vec<Room>,
}

impl RoomCatalog {
    /// Creates a catalog from an ordered list of rooms.
    ///
    /// # Errors
    ///
    /// Returns an error if the list is empty or names a room twice.
    pub fn new(rooms: Vec<Room>) -> crate::Result<Self> {
        if rooms.is_empty() {
            return Err(crate::Error::Validation {
                field: "rooms".into(),
                message: "at least one room must be configured".into(),
            });
        }
        for (i, room) in rooms.iter().enumerate() {
            if rooms[..i].contains(room) {
                return Err(crate::Error::Validation {
                    field: "rooms".into(),
                    message: format!("room '{room}' is listed more than once"),
                });
            }
        }
        Ok(Self { rooms })
    }

    /// Parses a catalog from identifier strings.
    ///
    /// # Errors
    ///
    /// Returns an error if any identifier is invalid or the list is empty or
    /// contains duplicates.
    pub fn from_ids<I, S>(ids: I) -> crate::Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let rooms = ids
            .into_iter()
            .map(Room::new)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(rooms)
    }

    /// Returns the rooms in display order.
    #[must_use]
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Returns `true` if the room is bookable.
    #[must_use]
    pub fn contains(&self, room: &Room) -> bool {
        self.rooms.contains(room)
    }

    /// Returns the display position of a room, if it is in the catalog.
    #[must_use]
    pub fn position(&self, room: &Room) -> Option<usize> {
        self.rooms.iter().position(|r| r == room)
    }

    /// Resolves free text to a catalog room.
    ///
    /// # Errors
    ///
    /// Returns a validation error for malformed identifiers and
    /// [`crate::Error::UnknownRoom`] for well-formed rooms outside the catalog.
    pub fn resolve(&self, id: &str) -> crate::Result<Room> {
        let room = Room::new(id)?;
        if self.contains(&room) {
            Ok(room)
        } else {
            Err(crate::Error::UnknownRoom {
                room: room.as_str().to_string(),
            })
        }
    }
}

impl Default for RoomCatalog {
    fn default() -> Self {
        Self {
            rooms: ["A", "B", "C"].into_iter().map(|id| Room(id.to_string())).collect(),
        }
    }
}

/// Narrows listings and exports to one room.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RoomFilter {
    /// Every room.
    #[default]
    All,
    /// A single room.
    Room(Room),
}

impl RoomFilter {
    /// Returns `true` if a reservation in `room` passes the filter.
    #[must_use]
    pub fn matches(&self, room: &Room) -> bool {
        match self {
            Self::All => true,
            Self::Room(wanted) => wanted == room,
        }
    }

    /// Returns the selected room, if any.
    #[must_use]
    pub fn room(&self) -> Option<&Room> {
        match self {
            Self::All => None,
            Self::Room(room) => Some(room),
        }
    }
}

impl From<Option<Room>> for RoomFilter {
    fn from(room: Option<Room>) -> Self {
        room.map_or(Self::All, Self::Room)
    }
}
