//! Command-based control for the engine.

/// Actions an external controller (menu layer, CLI, test harness) can apply
/// to an [`Engine`](crate::engine::Engine) between ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EngineAction {
    /// Load the next mode slot, wrapping after the last.
    NextMode,
    /// Load a specific mode slot.
    LoadMode(u8),
    /// Randomize the current mode and save it.
    Randomize,
    /// Save the current pattern to its mode slot.
    SaveMode,
    /// Set and persist the global brightness.
    SetBrightness(u8),
    /// Step to the next of the three brightness levels and persist it.
    CycleBrightness,
}
