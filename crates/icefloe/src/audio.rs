use bevy::prelude::*;
use bevy_asset_loader::prelude::*;
use bevy_kira_audio::prelude::*;

use crate::bear::MoveStarted;
use crate::board::{FloeSunk, OrbCollected};

#[derive(Clone, Eq, PartialEq, Debug, Hash, Default, States)]
enum AssetState {
    #[default]
    Loading,
    Loaded,
}

#[derive(AssetCollection, Resource)]
struct AudioAssets {
    #[asset(path = "audio/slide.ogg")]
    slide: Handle<bevy_kira_audio::prelude::AudioSource>,
    #[asset(path = "audio/pickupCoin.ogg")]
    pickup: Handle<bevy_kira_audio::prelude::AudioSource>,
    #[asset(path = "audio/splash.ogg")]
    splash: Handle<bevy_kira_audio::prelude::AudioSource>,
}

pub struct GameAudioPlugin;

impl Plugin for GameAudioPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(AudioPlugin)
            .init_state::<AssetState>()
            .add_loading_state(
                LoadingState::new(AssetState::Loading)
                    .continue_to_state(AssetState::Loaded)
                    .load_collection::<AudioAssets>(),
            )
            .add_systems(
                Update,
                (slide_audio, pickup_audio, splash_audio).run_if(in_state(AssetState::Loaded)),
            );
    }
}

fn slide_audio(
    audio_assets: Res<AudioAssets>,
    audio: Res<Audio>,
    mut move_events: EventReader<MoveStarted>,
) {
    for _ in move_events.read() {
        audio.play(audio_assets.slide.clone_weak());
    }
}

fn pickup_audio(
    audio_assets: Res<AudioAssets>,
    audio: Res<Audio>,
    mut orb_events: EventReader<OrbCollected>,
) {
    for _ in orb_events.read() {
        audio.play(audio_assets.pickup.clone_weak());
    }
}

fn splash_audio(
    audio_assets: Res<AudioAssets>,
    audio: Res<Audio>,
    mut sunk_events: EventReader<FloeSunk>,
) {
    for _ in sunk_events.read() {
        audio.play(audio_assets.splash.clone_weak());
    }
}
