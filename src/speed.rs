//! Mapping from score to the time between snake movements
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

/// The snake speeds up by `speed_step_ms` every `speed_up_every` points,
/// until the tick interval reaches `min_tick_ms`.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(try_from = "RawSpeedPolicy")]
pub(crate) struct SpeedPolicy {
    base_tick_ms: u32,
    speed_step_ms: u32,
    speed_up_every: u32,
    min_tick_ms: u32,
}

impl SpeedPolicy {
    pub(crate) fn new(
        base_tick_ms: u32,
        speed_step_ms: u32,
        speed_up_every: u32,
        min_tick_ms: u32,
    ) -> Result<SpeedPolicy, SpeedPolicyError> {
        if speed_up_every == 0 {
            return Err(SpeedPolicyError::ZeroSpeedUpEvery);
        }
        if min_tick_ms == 0 {
            return Err(SpeedPolicyError::ZeroMinTick);
        }
        if min_tick_ms > base_tick_ms {
            return Err(SpeedPolicyError::MinAboveBase {
                min_tick_ms,
                base_tick_ms,
            });
        }
        Ok(SpeedPolicy {
            base_tick_ms,
            speed_step_ms,
            speed_up_every,
            min_tick_ms,
        })
    }

    /// Time between ticks at the start of a round
    pub(crate) fn base_interval(&self) -> Duration {
        Duration::from_millis(self.base_tick_ms.into())
    }

    /// Time between ticks once the player has scored `score` points
    pub(crate) fn tick_interval(&self, score: u32) -> Duration {
        let level = score / self.speed_up_every;
        let ms = self
            .base_tick_ms
            .saturating_sub(level.saturating_mul(self.speed_step_ms))
            .max(self.min_tick_ms);
        Duration::from_millis(ms.into())
    }
}

impl Default for SpeedPolicy {
    fn default() -> SpeedPolicy {
        SpeedPolicy {
            base_tick_ms: 140,
            speed_step_ms: 6,
            speed_up_every: 4,
            min_tick_ms: 70,
        }
    }
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
struct RawSpeedPolicy {
    base_tick_ms: u32,
    speed_step_ms: u32,
    speed_up_every: u32,
    min_tick_ms: u32,
}

impl Default for RawSpeedPolicy {
    fn default() -> RawSpeedPolicy {
        let SpeedPolicy {
            base_tick_ms,
            speed_step_ms,
            speed_up_every,
            min_tick_ms,
        } = SpeedPolicy::default();
        RawSpeedPolicy {
            base_tick_ms,
            speed_step_ms,
            speed_up_every,
            min_tick_ms,
        }
    }
}

impl TryFrom<RawSpeedPolicy> for SpeedPolicy {
    type Error = SpeedPolicyError;

    fn try_from(value: RawSpeedPolicy) -> Result<SpeedPolicy, SpeedPolicyError> {
        SpeedPolicy::new(
            value.base_tick_ms,
            value.speed_step_ms,
            value.speed_up_every,
            value.min_tick_ms,
        )
    }
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub(crate) enum SpeedPolicyError {
    #[error("speed-up-every must be at least 1")]
    ZeroSpeedUpEvery,
    #[error("min-tick-ms must be at least 1")]
    ZeroMinTick,
    #[error("min-tick-ms ({min_tick_ms}) is greater than base-tick-ms ({base_tick_ms})")]
    MinAboveBase { min_tick_ms: u32, base_tick_ms: u32 },
}
