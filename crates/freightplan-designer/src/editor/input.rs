//! Pointer and keyboard dispatch.
//!
//! The view layer forwards raw input here. Positions are in view
//! coordinates; the editor maps them through its viewport. Input that lands
//! outside the grid is ignored.

use freightplan_core::{GridPos, Result, RotationDirection};

use super::Editor;
use crate::grid;
use crate::viewport::ViewPoint;

/// Wheel delta of one notch.
const WHEEL_NOTCH: i32 = 120;

/// Horizontal delta some mice report per notch instead of `WHEEL_NOTCH`.
const OVERSIZED_HORIZONTAL_NOTCH: i32 = 15240;

/// View pixels scrolled per wheel notch.
const WHEEL_SCROLL_PIXELS: f64 = 60.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Buttons held during a pointer move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MouseButtons {
    pub left: bool,
    pub right: bool,
    pub middle: bool,
}

impl MouseButtons {
    pub const NONE: MouseButtons = MouseButtons {
        left: false,
        right: false,
        middle: false,
    };

    /// Only `button` held.
    pub fn only(button: MouseButton) -> Self {
        let mut buttons = Self::NONE;
        match button {
            MouseButton::Left => buttons.left = true,
            MouseButton::Right => buttons.right = true,
            MouseButton::Middle => buttons.middle = true,
        }
        buttons
    }

    pub fn contains(self, button: MouseButton) -> bool {
        match button {
            MouseButton::Left => self.left,
            MouseButton::Right => self.right,
            MouseButton::Middle => self.middle,
        }
    }
}

/// Keyboard modifiers held during an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        shift: false,
        ctrl: false,
    };
    pub const SHIFT: Modifiers = Modifiers {
        shift: true,
        ctrl: false,
    };
    pub const CTRL: Modifiers = Modifiers {
        shift: false,
        ctrl: true,
    };
}

/// Keys the editor reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    R,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WheelOrientation {
    Vertical,
    Horizontal,
}

impl Editor {
    /// Handle a button press.
    ///
    /// Left paints with the brush, right erases, middle starts panning.
    pub fn mouse_press(&mut self, view_pos: ViewPoint, button: MouseButton) -> Result<bool> {
        if button == MouseButton::Middle {
            self.begin_pan(view_pos);
            return Ok(true);
        }

        let pos = self.grid_pos_at(view_pos);
        if !grid::is_valid_grid_pos(pos) {
            return Ok(false);
        }
        self.last_tile_pos = Some(pos);
        self.apply_button(button, pos)?;
        Ok(true)
    }

    /// Handle pointer movement with `buttons` held.
    ///
    /// Updates the hover highlight and paints or erases each new cell the
    /// pointer enters while a button is held.
    pub fn mouse_move(&mut self, view_pos: ViewPoint, buttons: MouseButtons) -> Result<bool> {
        if self.is_panning() {
            return Ok(self.pan_to(view_pos));
        }

        let pos = self.grid_pos_at(view_pos);
        if self.last_hover_pos != Some(pos) {
            self.refresh_hover(pos);
        }

        let button = if buttons.left {
            MouseButton::Left
        } else if buttons.right {
            MouseButton::Right
        } else {
            return Ok(true);
        };

        if self.last_tile_pos == Some(pos) {
            return Ok(true);
        }
        self.last_tile_pos = Some(pos);
        if grid::is_valid_grid_pos(pos) {
            self.apply_button(button, pos)?;
        }
        Ok(true)
    }

    /// Handle a button release. Releasing the middle button ends a pan.
    pub fn mouse_release(&mut self, view_pos: ViewPoint, button: MouseButton) -> bool {
        match button {
            MouseButton::Middle => self.end_pan(view_pos),
            MouseButton::Left | MouseButton::Right => true,
        }
    }

    /// The pointer left the editing area.
    pub fn hover_leave(&mut self) -> bool {
        self.last_hover_pos = None;
        if self.hovered_cell.is_some() {
            self.unset_hovered_cell();
        }
        true
    }

    /// `R` rotates the brush clockwise, `Shift+R` counter-clockwise.
    pub fn key_press(&mut self, key: Key, modifiers: Modifiers) -> bool {
        match key {
            Key::R => {
                let direction = if modifiers.shift {
                    RotationDirection::CounterClockwise
                } else {
                    RotationDirection::Clockwise
                };
                self.rotate_brush(direction);
                true
            }
            Key::Other => false,
        }
    }

    /// Handle a wheel event at `view_pos`.
    ///
    /// `Ctrl` with the vertical wheel zooms one step, keeping the point under
    /// the cursor fixed. Otherwise the wheel scrolls the view.
    pub fn wheel(
        &mut self,
        view_pos: ViewPoint,
        delta: i32,
        orientation: WheelOrientation,
        modifiers: Modifiers,
    ) -> bool {
        if orientation == WheelOrientation::Vertical && modifiers.ctrl {
            let changed = match delta.signum() {
                1 => self.viewport.zoom_in_at(view_pos),
                -1 => self.viewport.zoom_out_at(view_pos),
                _ => false,
            };
            self.zoom_changed(changed);
            return true;
        }

        let delta = if orientation == WheelOrientation::Horizontal
            && delta.abs() == OVERSIZED_HORIZONTAL_NOTCH
        {
            delta.signum() * WHEEL_NOTCH
        } else {
            delta
        };
        if delta == 0 {
            return false;
        }

        let pixels = -f64::from(delta) / f64::from(WHEEL_NOTCH) * WHEEL_SCROLL_PIXELS;
        match orientation {
            WheelOrientation::Vertical => self.viewport.pan_by(0.0, pixels),
            WheelOrientation::Horizontal => self.viewport.pan_by(pixels, 0.0),
        }
        self.clamp_view();
        self.request_repaint();
        true
    }

    fn grid_pos_at(&self, view_pos: ViewPoint) -> GridPos {
        grid::scene_to_grid(self.viewport.view_to_scene(view_pos))
    }

    fn apply_button(&mut self, button: MouseButton, pos: GridPos) -> Result<()> {
        match button {
            MouseButton::Left => self.paint(pos),
            MouseButton::Right => self.remove_tile(pos).map(|_| ()),
            MouseButton::Middle => Ok(()),
        }
    }

    /// Place the brush at `pos`, replacing any different component there.
    ///
    /// A cell already holding the brush component keeps its rotation.
    fn paint(&mut self, pos: GridPos) -> Result<()> {
        let Some(component) = self.brush else {
            return Ok(());
        };
        match self.tile_at(pos)? {
            Some(existing) if existing.component == component => return Ok(()),
            Some(_) => {
                self.remove_tile(pos)?;
            }
            None => {}
        }
        self.place_tile(component, pos)
    }
}
