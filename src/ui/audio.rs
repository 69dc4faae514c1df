//! Sound effects for tool actions

use bevy::prelude::*;
use std::collections::HashMap;

use super::components::SoundCueMessage;
use crate::simulation::SoundCue;

/// Minimum seconds between two plays of the same cue
pub const SOUND_COOLDOWN_SECS: f32 = 0.5;

/// Rate limit so rapid clicks don't stack the same sound
#[derive(Resource)]
pub struct SoundCooldown {
    cooldown_secs: f32,
    last_played: HashMap<SoundCue, f32>,
}

impl Default for SoundCooldown {
    fn default() -> Self {
        Self {
            cooldown_secs: SOUND_COOLDOWN_SECS,
            last_played: HashMap::new(),
        }
    }
}

impl SoundCooldown {
    /// Returns true and restarts the cooldown if `cue` may play at `now`
    pub fn try_start(&mut self, cue: SoundCue, now: f32) -> bool {
        if let Some(last) = self.last_played.get(&cue) {
            if now - last < self.cooldown_secs {
                return false;
            }
        }
        self.last_played.insert(cue, now);
        true
    }
}

/// System to play queued sound cues
pub fn play_sound_cues(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    time: Res<Time>,
    mut cooldown: ResMut<SoundCooldown>,
    mut cues: MessageReader<SoundCueMessage>,
) {
    for SoundCueMessage(cue) in cues.read() {
        if !cooldown.try_start(*cue, time.elapsed_secs()) {
            continue;
        }
        commands.spawn((
            AudioPlayer::<AudioSource>::new(asset_server.load(cue.asset_path())),
            PlaybackSettings::DESPAWN,
        ));
    }
}
