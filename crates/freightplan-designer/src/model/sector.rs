//! Named rectangular regions of a floor.

use freightplan_core::{ContractViolation, GridPos, SectorId};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::HasStableId;

/// Axis-aligned rectangle in grid units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl GridRect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Exclusive right edge.
    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    /// Exclusive bottom edge.
    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn contains(&self, pos: GridPos) -> bool {
        (self.x..self.right()).contains(&pos.x) && (self.y..self.bottom()).contains(&pos.y)
    }

    fn check(&self) -> Result<(), ContractViolation> {
        if self.width <= 0 || self.height <= 0 {
            return Err(ContractViolation::new(
                "rect",
                format!("{}x{} is not a positive size", self.width, self.height),
            ));
        }
        Ok(())
    }
}

/// RGBA display colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::rgb(255, 255, 255)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }
}

/// A labelled region of a floor, e.g. "Engineering".
///
/// Sectors may overlap each other and are independent of tile placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sector {
    id: SectorId,
    rect: GridRect,
    name: String,
    color: Color,
}

impl Sector {
    pub(crate) fn new(
        id: SectorId,
        rect: GridRect,
        name: impl Into<String>,
        color: Color,
    ) -> Result<Self, ContractViolation> {
        rect.check()?;
        Ok(Self {
            id,
            rect,
            name: name.into(),
            color,
        })
    }

    pub fn rect(&self) -> GridRect {
        self.rect
    }

    pub fn set_rect(&mut self, rect: GridRect) -> Result<(), ContractViolation> {
        rect.check()?;
        self.rect = rect;
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }
}

impl HasStableId for Sector {
    type Id = SectorId;

    fn id(&self) -> SectorId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_contains_is_half_open() {
        let rect = GridRect::new(2, 2, 3, 1);
        assert!(rect.contains(GridPos::new(2, 2)));
        assert!(rect.contains(GridPos::new(4, 2)));
        assert!(!rect.contains(GridPos::new(5, 2)));
        assert!(!rect.contains(GridPos::new(2, 3)));
    }

    #[test]
    fn test_sector_rejects_empty_rect() {
        let err = Sector::new(SectorId(0), GridRect::new(0, 0, 0, 4), "Cargo", Color::default())
            .unwrap_err();
        assert_eq!(err.field, "rect");

        let mut sector =
            Sector::new(SectorId(0), GridRect::new(0, 0, 2, 2), "Cargo", Color::default()).unwrap();
        assert!(sector.set_rect(GridRect::new(0, 0, 2, -1)).is_err());
        assert_eq!(sector.rect(), GridRect::new(0, 0, 2, 2));
    }

    #[test]
    fn test_color_display() {
        assert_eq!(Color::rgba(255, 0, 16, 128).to_string(), "#ff001080");
    }
}
