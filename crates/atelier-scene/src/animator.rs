//! Idle "showcase" motion of the mounted model.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ThemeError};
use crate::root::RootTransform;

/// Largest amplitude a theme may ask for.
pub const MAX_AMPLITUDE: f32 = 0.05;

/// A slow uniform pulse of the root scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Breathe {
    pub speed: f32,
    pub amplitude: f32,
}

/// Sway and bob parameters.
///
/// Speeds are angular frequencies in radians per second; amplitudes are in
/// radians (rotation) or scene units (bob) or a fraction of the rest scale
/// (breathe).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdleAnimation {
    pub rotation_speed: f32,
    pub rotation_amplitude: f32,
    pub bob_speed: f32,
    pub bob_amplitude: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breathe: Option<Breathe>,
}

impl IdleAnimation {
    pub fn classic() -> Self {
        Self {
            rotation_speed: 0.08,
            rotation_amplitude: 0.008,
            bob_speed: 0.12,
            bob_amplitude: 0.002,
            breathe: None,
        }
    }

    /// Barely perceptible motion.
    pub fn heritage() -> Self {
        Self {
            rotation_speed: 0.03,
            rotation_amplitude: 0.002,
            bob_speed: 0.05,
            bob_amplitude: 0.001,
            breathe: None,
        }
    }

    pub fn atelier() -> Self {
        Self {
            rotation_speed: 0.08,
            rotation_amplitude: 0.005,
            bob_speed: 0.1,
            bob_amplitude: 0.001,
            breathe: Some(Breathe {
                speed: 0.15,
                amplitude: 0.001,
            }),
        }
    }

    /// The root transform at `elapsed` seconds.
    ///
    /// Depends only on the rest pose and the elapsed time, never on the
    /// previous frame.
    pub fn advance(&self, root: RootTransform, elapsed: f64) -> RootTransform {
        let wave =
            |speed: f32, amplitude: f32| (elapsed * f64::from(speed)).sin() as f32 * amplitude;

        let mut next = root;
        next.rotation.y = wave(self.rotation_speed, self.rotation_amplitude);
        next.position.y = root.base_y + wave(self.bob_speed, self.bob_amplitude);
        next.scale = match self.breathe {
            Some(breathe) => root.base_scale * (1.0 + wave(breathe.speed, breathe.amplitude)),
            None => root.base_scale,
        };
        next
    }

    /// Advance a mounted root in place. Does nothing before the first mount.
    pub fn tick(&self, root: Option<&mut RootTransform>, elapsed: f64) {
        if let Some(root) = root {
            *root = self.advance(*root, elapsed);
        }
    }

    pub fn validate(&self) -> Result<()> {
        let mut amplitudes = vec![
            ("rotationAmplitude", self.rotation_amplitude),
            ("bobAmplitude", self.bob_amplitude),
        ];
        let mut speeds = vec![("rotationSpeed", self.rotation_speed), ("bobSpeed", self.bob_speed)];
        if let Some(breathe) = self.breathe {
            amplitudes.push(("breathe.amplitude", breathe.amplitude));
            speeds.push(("breathe.speed", breathe.speed));
        }

        for (field, value) in amplitudes {
            if !(value > 0.0 && value <= MAX_AMPLITUDE) {
                return Err(ThemeError::InvalidAnimation {
                    field,
                    value,
                    range: "(0, 0.05]",
                });
            }
        }
        for (field, value) in speeds {
            if !value.is_finite() || value < 0.0 {
                return Err(ThemeError::InvalidAnimation {
                    field,
                    value,
                    range: "[0, inf)",
                });
            }
        }
        Ok(())
    }
}

impl Default for IdleAnimation {
    fn default() -> Self {
        Self::heritage()
    }
}
