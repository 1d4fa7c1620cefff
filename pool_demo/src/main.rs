//! Pooled VFX and audio-voice demo
//!
//! Simulates a handful of update ticks: every tick spawns a burst of
//! visual effects at random positions with a matching one-shot audio
//! voice, ages the live instances, and despawns the finished ones.

#![allow(dead_code)]

use nalgebra::{UnitQuaternion, Vector3};
use rand::Rng;
use spawn_pool::prelude::*;

// Demo tuning
const TICKS: u32 = 30;
const BURSTS_PER_TICK: usize = 3;
const BURST_LIFETIME: u32 = 8; // ticks
const SPAWN_RADIUS: f32 = 5.0;

/// A short-lived visual effect placed in the scene.
#[derive(Default)]
struct VfxBurst {
    position: Vector3<f32>,
    rotation: UnitQuaternion<f32>,
    enabled: bool,
    age: u32,
}

impl Poolable for VfxBurst {
    fn on_spawn(&mut self) {
        self.age = 0;
    }
}

impl Placeable for VfxBurst {
    fn set_placement(&mut self, position: Vector3<f32>, rotation: UnitQuaternion<f32>) {
        self.position = position;
        self.rotation = rotation;
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }
}

/// A one-shot audio voice, reset to neutral playback state per lease.
struct AudioVoice {
    clip: Option<String>,
    volume: f32,
    pitch: f32,
    pan: f32,
    remaining: u32,
}

impl Default for AudioVoice {
    fn default() -> Self {
        Self {
            clip: None,
            volume: 1.0,
            pitch: 1.0,
            pan: 0.0,
            remaining: 0,
        }
    }
}

impl AudioVoice {
    fn play(&mut self, clip: &str, length: u32) {
        self.clip = Some(clip.to_string());
        self.remaining = length;
    }

    fn tick(&mut self) -> bool {
        self.remaining = self.remaining.saturating_sub(1);
        self.remaining == 0
    }
}

impl Poolable for AudioVoice {
    fn on_spawn(&mut self) {
        self.volume = 1.0;
        self.pitch = 1.0;
        self.pan = 0.0;
    }

    fn on_despawn(&mut self) {
        self.clip = None;
        self.remaining = 0;
    }
}

fn main() -> Result<(), PoolError> {
    env_logger::init();

    let config = PoolConfig {
        initial_size: 10,
        can_grow: true,
    };

    let mut vfx_pool: ScenePool<VfxBurst, _> =
        ScenePool::new("vfx", config.initial_size, FnFactory::new(VfxBurst::default))?;
    let mut voice_pool = Pool::from_config(&config, FnFactory::new(AudioVoice::default))?;

    let mut rng = rand::thread_rng();
    let mut live: Vec<(PoolHandle, PoolHandle)> = Vec::new();

    for tick in 0..TICKS {
        // Spawn a burst of paired VFX + audio
        for _ in 0..BURSTS_PER_TICK {
            let position = Vector3::new(
                rng.gen_range(-SPAWN_RADIUS..SPAWN_RADIUS),
                rng.gen_range(-SPAWN_RADIUS..SPAWN_RADIUS),
                0.0,
            );

            let Some(vfx) = vfx_pool.spawn_at(position, UnitQuaternion::identity())? else {
                log::info!("vfx pool depleted on tick {}", tick);
                break;
            };

            let Some(voice) = voice_pool.spawn()? else {
                vfx_pool.despawn(vfx)?;
                log::info!("voice pool depleted on tick {}", tick);
                break;
            };

            if let Some(instance) = voice_pool.get_mut(voice) {
                instance.play("explosion", BURST_LIFETIME);
                instance.pan = position.x / SPAWN_RADIUS;
            }

            live.push((vfx, voice));
        }

        // Age live instances and despawn the finished ones
        let mut index = 0;
        while index < live.len() {
            let (vfx, voice) = live[index];

            if let Some(burst) = vfx_pool.get_mut(vfx) {
                burst.age += 1;
            }

            let finished = voice_pool
                .get_mut(voice)
                .map_or(true, AudioVoice::tick);

            if finished || vfx_pool.get(vfx).map_or(true, |b| b.age >= BURST_LIFETIME) {
                vfx_pool.despawn(vfx)?;
                voice_pool.despawn(voice)?;
                live.swap_remove(index);
            } else {
                index += 1;
            }
        }

        log::info!(
            "tick {:2}: vfx {}/{} active, voices {}/{} active",
            tick,
            vfx_pool.active_count(),
            vfx_pool.capacity(),
            voice_pool.active_count(),
            voice_pool.capacity()
        );
    }

    // Scene teardown: bulk reset, no per-instance hooks
    vfx_pool.despawn_all();
    voice_pool.despawn_all();
    live.clear();

    log::info!(
        "done: vfx capacity grew to {}, voice capacity grew to {}",
        vfx_pool.capacity(),
        voice_pool.capacity()
    );

    Ok(())
}
