/// Initialization parameters for the GL layer.
///
/// Keep this structure stable and minimal. Add configuration flags only when a
/// concrete platform or driver requirement exists.
#[derive(Debug, Clone)]
pub struct GlInit {
    /// Requested OpenGL version as `(major, minor)`.
    pub version: (u8, u8),

    /// Request a core-profile context (no deprecated fixed-function entry points).
    pub core_profile: bool,

    /// Pace buffer swaps to the display refresh interval.
    ///
    /// If the platform rejects the request the loop still runs, unpaced.
    pub vsync: bool,
}

impl Default for GlInit {
    fn default() -> Self {
        Self {
            version: (3, 3),
            core_profile: true,
            vsync: true,
        }
    }
}
