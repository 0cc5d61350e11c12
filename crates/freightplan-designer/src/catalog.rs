//! Component catalog
//!
//! Display metadata for every placeable component. The catalog is built once
//! and shared by `Arc` between the plan manager, its editors, and the
//! palette.

use freightplan_core::{ComponentId, ContractViolation};
use std::collections::HashMap;
use std::fmt;

/// Prefix of every component icon resource key.
pub const ICON_PREFIX: &str = ":/images/components/";

const BUILTIN_NAMES: [(ComponentId, &str); 8] = [
    (ComponentId::RoomLarge, "Large Room"),
    (ComponentId::RoomStorage, "Storage Room"),
    (ComponentId::RoomFleet, "Fleet Command Room"),
    (ComponentId::CorridorStraight, "Straight Corridor"),
    (ComponentId::CorridorCurved, "Curved Corridor"),
    (ComponentId::Junction, "T-Junction"),
    (ComponentId::JunctionCross, "Cross Junction"),
    (ComponentId::Stairs, "Stairs"),
];

/// Resource key of a component icon. Resolving it to pixels is up to the
/// view layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IconRef(String);

impl IconRef {
    /// Icon key for a component identifier.
    pub fn for_component(id: ComponentId) -> Self {
        Self(format!("{}{}", ICON_PREFIX, id.as_str()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IconRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A placeable component as shown in the palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    id: ComponentId,
    name: String,
    icon: IconRef,
}

impl Component {
    fn new(id: ComponentId, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            icon: IconRef::for_component(id),
        }
    }

    pub fn id(&self) -> ComponentId {
        self.id
    }

    /// Human-readable name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn icon(&self) -> &IconRef {
        &self.icon
    }
}

/// Immutable registry of every component, indexed by id and by name.
///
/// A catalog always holds exactly one entry per [`ComponentId`], so lookups
/// by id cannot fail.
#[derive(Debug, Clone)]
pub struct ComponentCatalog {
    /// Entries in component code order
    components: Vec<Component>,
    by_name: HashMap<String, ComponentId>,
}

impl ComponentCatalog {
    /// The catalog of built-in freighter components.
    pub fn builtin() -> Self {
        let components: Vec<Component> = BUILTIN_NAMES
            .iter()
            .map(|(id, name)| Component::new(*id, name))
            .collect();
        let by_name = components
            .iter()
            .map(|c| (c.name.clone(), c.id))
            .collect();
        Self {
            components,
            by_name,
        }
    }

    /// Build a catalog from custom display names.
    ///
    /// Every component identifier must appear exactly once and names must
    /// be unique and non-empty.
    pub fn from_entries<'a>(
        entries: impl IntoIterator<Item = (ComponentId, &'a str)>,
    ) -> Result<Self, ContractViolation> {
        let mut slots: Vec<Option<Component>> = vec![None; ComponentId::ALL.len()];
        let mut by_name = HashMap::new();

        for (id, name) in entries {
            let name = name.trim();
            if name.is_empty() {
                return Err(ContractViolation::new(
                    "name",
                    format!("component {} has an empty name", id),
                ));
            }
            if by_name.insert(name.to_string(), id).is_some() {
                return Err(ContractViolation::new(
                    "name",
                    format!("duplicate component name '{}'", name),
                ));
            }
            let slot = &mut slots[Self::slot(id)];
            if slot.is_some() {
                return Err(ContractViolation::new(
                    "id",
                    format!("duplicate component id {}", id),
                ));
            }
            *slot = Some(Component::new(id, name));
        }

        let mut components = Vec::with_capacity(slots.len());
        for (slot, id) in slots.into_iter().zip(ComponentId::ALL) {
            match slot {
                Some(component) => components.push(component),
                None => {
                    return Err(ContractViolation::new(
                        "id",
                        format!("component {} is missing from the catalog", id),
                    ))
                }
            }
        }

        Ok(Self {
            components,
            by_name,
        })
    }

    /// Entry for a component identifier.
    pub fn by_id(&self, id: ComponentId) -> &Component {
        &self.components[Self::slot(id)]
    }

    /// Entry with the given display name.
    pub fn by_name(&self, name: &str) -> Result<&Component, ContractViolation> {
        self.by_name
            .get(name)
            .map(|id| self.by_id(*id))
            .ok_or_else(|| {
                ContractViolation::new("name", format!("no component named '{}'", name))
            })
    }

    /// All entries in component code order.
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Entries laid out row by row for a palette with `columns` columns.
    pub fn palette_rows(&self, columns: usize) -> Vec<&[Component]> {
        self.components.chunks(columns.max(1)).collect()
    }

    fn slot(id: ComponentId) -> usize {
        usize::from(id.code()) - 1
    }
}

impl Default for ComponentCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
