//! Open plans and their editors.
//!
//! The plan manager owns every open plan, each bound to exactly one
//! [`Editor`], and tracks which one is active. Lifecycle changes are
//! published as [`PlanEvent`]s so the window can keep its tabs in sync.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use freightplan_core::{Error, EventBus, PlanError, PlanEvent, PlanId, Result};
use freightplan_settings::EditorSettings;

use crate::catalog::ComponentCatalog;
use crate::editor::Editor;
use crate::model::Plan;

/// Tab label for an open plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanTab {
    pub plan: PlanId,
    /// Plan name
    pub title: String,
    /// Absolute path of the backing file
    pub tooltip: String,
    pub modified: bool,
}

/// Owner of all open plans.
#[derive(Debug)]
pub struct PlanManager {
    /// Editors in tab order
    editors: Vec<Editor>,
    active: Option<PlanId>,
    new_plan_count: u32,
    catalog: Arc<ComponentCatalog>,
    bus: Arc<EventBus>,
    settings: EditorSettings,
}

impl PlanManager {
    pub fn new(
        catalog: Arc<ComponentCatalog>,
        bus: Arc<EventBus>,
        settings: EditorSettings,
    ) -> Self {
        Self {
            editors: Vec::new(),
            active: None,
            new_plan_count: 0,
            catalog,
            bus,
            settings,
        }
    }

    /// Create an empty plan named `"New Plan {n}"` and make it active.
    pub fn new_plan(&mut self) -> PlanId {
        self.new_plan_count += 1;
        let plan = Plan::new(format!("New Plan {}", self.new_plan_count));
        let name = plan.name();
        let id = self.bind(plan);

        tracing::info!("Created {} '{}'", id, name);
        self.publish(PlanEvent::Created { plan: id, name });
        self.activate(id);
        id
    }

    /// Open the plan at `path` and make it active.
    ///
    /// The file is not read; the new plan is only bound to it.
    pub fn open_plan(&mut self, path: impl AsRef<Path>) -> Result<PlanId> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(Error::contract("path", "must not be empty"));
        }
        let id = self.bind(Plan::new(path));

        tracing::info!("Opened {} from {}", id, path.display());
        self.publish(PlanEvent::Opened {
            plan: id,
            path: path.to_path_buf(),
        });
        self.activate(id);
        Ok(id)
    }

    /// Save a plan to its backing file.
    ///
    /// Returns `Ok(false)` when there is nothing to save.
    pub fn save_plan(&mut self, id: PlanId) -> Result<bool> {
        let editor = self.find_mut(id)?;
        if !editor.plan().modified() {
            tracing::debug!("{} has no changes to save", id);
            return Ok(false);
        }
        let path = editor.plan().document().file_path().to_path_buf();
        self.write(id, path)?;
        Ok(true)
    }

    /// Save a plan to `path` and rebind it there.
    ///
    /// The plan keeps its current path if the save fails.
    pub fn save_plan_as(&mut self, id: PlanId, path: impl Into<PathBuf>) -> Result<()> {
        let path = path.into();
        if path.as_os_str().is_empty() {
            return Err(Error::contract("path", "must not be empty"));
        }
        self.index_of(id)?;
        self.write(id, path)
    }

    fn write(&mut self, id: PlanId, path: PathBuf) -> Result<()> {
        self.publish(PlanEvent::Saving { plan: id });
        let document = self.find_mut(id)?.plan_mut().document_mut();
        document.save(&path)?;
        document.set_file_path(path.clone());
        document.mark_saved();

        tracing::info!("Saved {} to {}", id, path.display());
        self.publish(PlanEvent::Saved { plan: id, path });
        Ok(())
    }

    /// Close a plan, discarding unsaved changes, and return it.
    pub fn close_plan(&mut self, id: PlanId) -> Result<Plan> {
        let index = self.index_of(id)?;
        self.publish(PlanEvent::Closing { plan: id });
        let editor = self.editors.remove(index);
        tracing::info!("Closed {}", id);

        if self.active == Some(id) {
            self.active = None;
            let next = index.min(self.editors.len().saturating_sub(1));
            if let Some(next) = self.editors.get(next).map(Editor::plan_id) {
                self.activate(next);
            }
        }
        Ok(editor.into_plan())
    }

    /// Make an open plan the active one.
    pub fn set_active(&mut self, id: PlanId) -> Result<()> {
        self.index_of(id)?;
        if self.active != Some(id) {
            self.activate(id);
        }
        Ok(())
    }

    pub fn active_plan(&self) -> Option<PlanId> {
        self.active
    }

    pub fn active_editor(&self) -> Option<&Editor> {
        self.active.and_then(|id| self.editor(id))
    }

    pub fn active_editor_mut(&mut self) -> Option<&mut Editor> {
        self.active.and_then(|id| self.editor_mut(id))
    }

    pub fn editor(&self, id: PlanId) -> Option<&Editor> {
        self.editors.iter().find(|e| e.plan_id() == id)
    }

    pub fn editor_mut(&mut self, id: PlanId) -> Option<&mut Editor> {
        self.editors.iter_mut().find(|e| e.plan_id() == id)
    }

    /// Open plans in tab order.
    pub fn plan_ids(&self) -> Vec<PlanId> {
        self.editors.iter().map(Editor::plan_id).collect()
    }

    /// Tab labels for every open plan, in order.
    pub fn tabs(&self) -> Vec<PlanTab> {
        self.editors
            .iter()
            .map(|editor| {
                let plan = editor.plan();
                PlanTab {
                    plan: editor.plan_id(),
                    title: plan.name(),
                    tooltip: plan.document().absolute_file_path().display().to_string(),
                    modified: plan.modified(),
                }
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.editors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.editors.is_empty()
    }

    fn bind(&mut self, plan: Plan) -> PlanId {
        let editor = Editor::new(
            plan,
            Arc::clone(&self.catalog),
            Arc::clone(&self.bus),
            self.settings.clone(),
        );
        let id = editor.plan_id();
        self.editors.push(editor);
        id
    }

    fn activate(&mut self, id: PlanId) {
        self.active = Some(id);
        tracing::debug!("Activated {}", id);
        self.publish(PlanEvent::Activated { plan: id });
    }

    fn index_of(&self, id: PlanId) -> Result<usize> {
        self.editors
            .iter()
            .position(|e| e.plan_id() == id)
            .ok_or_else(|| {
                PlanError::PlanNotFound {
                    id: id.to_string(),
                }
                .into()
            })
    }

    fn find_mut(&mut self, id: PlanId) -> Result<&mut Editor> {
        let index = self.index_of(id)?;
        Ok(&mut self.editors[index])
    }

    fn publish(&self, event: PlanEvent) {
        if self.bus.publish(event).is_err() {
            tracing::trace!("No subscribers for plan event");
        }
    }
}
