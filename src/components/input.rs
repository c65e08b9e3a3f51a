use nalgebra::Vector2;

/// Edge state of a held button over one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleEdge {
    None,
    Pressed,
    Released,
}

impl Default for ToggleEdge {
    fn default() -> Self {
        ToggleEdge::None
    }
}

/// Input snapshot for one simulation tick.
///
/// The host reads its devices and hands the edges over; the rig never
/// touches global input state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RigInput {
    /// Free-look key: `Pressed` freezes the aim point, `Released` thaws it.
    pub free_look: ToggleEdge,
    /// True on the tick the view key went down; flips first/third person.
    pub view_toggle: bool,
    /// Mouse motion in pixels, +x right and +y up.
    pub mouse_delta: Vector2<f64>,
}

impl Default for RigInput {
    fn default() -> Self {
        Self {
            free_look: ToggleEdge::None,
            view_toggle: false,
            mouse_delta: Vector2::zeros(),
        }
    }
}

impl RigInput {
    /// Input with no edges and no motion, for ticks where nothing happened.
    pub fn idle() -> Self {
        Self::default()
    }
}
