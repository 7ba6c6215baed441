//! Local state mirrored by resource objects.
//!
//! A [`ResourceRecord`] is populated from the caller's input when a resource
//! is created and replaced wholesale by the input of each successful update.
//! Server responses never flow into it, apart from the identifier assigned
//! on creation.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Opaque key-value data attached to a resource.
pub type DataMap = Map<String, Value>;

/// A point in an environment's coordinate space.
///
/// Either coordinate may be left unset; unset coordinates are omitted from
/// request bodies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Horizontal coordinate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    /// Vertical coordinate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
}

impl Position {
    /// Creates a position with both coordinates set.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
        }
    }
}

/// The rectangular size of a zone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Extent {
    /// Width of the zone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    /// Height of the zone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

/// The mutable local mirror of a resource's server state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResourceRecord {
    /// Display name.
    pub name: Option<String>,
    /// Free-form description.
    pub description: Option<String>,
    /// Opaque auxiliary data.
    pub data: Option<DataMap>,
    /// Position (for zones, the origin of the perimeter).
    pub position: Position,
    /// Rectangular extent. Only zones carry one.
    pub extent: Option<Extent>,
}

/// Caller-supplied fields of a zone, used both to create and to update one.
///
/// # Example
///
/// ```rust
/// use flare_sdk::rest::ZoneDetails;
///
/// let details = ZoneDetails {
///     name: Some("Lobby".to_string()),
///     x_parameter: Some(1.0),
///     y_parameter: Some(2.0),
///     width: Some(10.0),
///     height: Some(4.0),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ZoneDetails {
    /// Display name.
    pub name: Option<String>,
    /// Free-form description.
    pub description: Option<String>,
    /// Opaque auxiliary data.
    pub data: Option<DataMap>,
    /// Horizontal coordinate of the zone's origin.
    pub x_parameter: Option<f64>,
    /// Vertical coordinate of the zone's origin.
    pub y_parameter: Option<f64>,
    /// Width of the zone.
    pub width: Option<f64>,
    /// Height of the zone.
    pub height: Option<f64>,
}

impl From<ZoneDetails> for ResourceRecord {
    fn from(details: ZoneDetails) -> Self {
        Self {
            name: details.name,
            description: details.description,
            data: details.data,
            position: Position {
                x: details.x_parameter,
                y: details.y_parameter,
            },
            extent: Some(Extent {
                width: details.width,
                height: details.height,
            }),
        }
    }
}

/// Caller-supplied fields of a device or thing, used both to create and to
/// update one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemDetails {
    /// Display name.
    pub name: Option<String>,
    /// Free-form description.
    pub description: Option<String>,
    /// Opaque auxiliary data.
    pub data: Option<DataMap>,
    /// Horizontal coordinate.
    pub x_parameter: Option<f64>,
    /// Vertical coordinate.
    pub y_parameter: Option<f64>,
}

impl From<ItemDetails> for ResourceRecord {
    fn from(details: ItemDetails) -> Self {
        Self {
            name: details.name,
            description: details.description,
            data: details.data,
            position: Position {
                x: details.x_parameter,
                y: details.y_parameter,
            },
            extent: None,
        }
    }
}
