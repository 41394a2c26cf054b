//! One wallpaper screen: scene, music toggle and pointer tracking owned
//! together, driven by the frontends' raw input callbacks.

use crate::constants::MUSIC_ASSET;
use crate::gesture::{Gesture, GestureTracker};
use crate::layout::Viewport;
use crate::music::{AudioError, AudioLoader, MusicToggle, PlaybackState};
use crate::state::{Frame, Scene, SceneEvent};
use crate::wave::WaveParams;
use glam::Vec2;
use rand::Rng;

/// What a pointer release turned into.
#[derive(Clone, Debug, PartialEq)]
pub enum PointerOutcome {
    /// Released without a gesture in flight, or a tap outside the button.
    Ignored,
    Swiped,
    MusicToggled(Result<PlaybackState, AudioError>),
}

pub struct Wallpaper<L: AudioLoader, R: Rng> {
    scene: Scene,
    music: MusicToggle<L>,
    pointer: GestureTracker,
    rng: R,
}

impl<L: AudioLoader, R: Rng> Wallpaper<L, R> {
    pub fn launch(viewport: Viewport, loader: L, mut rng: R, now_secs: f64) -> Self {
        let scene = Scene::launch(viewport, WaveParams::default(), now_secs, &mut rng);
        Self {
            scene,
            music: MusicToggle::new(loader, MUSIC_ASSET),
            pointer: GestureTracker::default(),
            rng,
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn music(&self) -> &MusicToggle<L> {
        &self.music
    }

    pub fn is_muted(&self) -> bool {
        self.music.is_muted()
    }

    /// Forward a late "track not found" report from the platform player.
    pub fn music_asset_lost(&mut self) {
        self.music.asset_lost();
    }

    /// Apply a surface size. Identical sizes are dropped so repeated
    /// resize notifications don't restart the scroll.
    pub fn resize(&mut self, viewport: Viewport, now_secs: f64) {
        if viewport == self.scene.viewport() {
            return;
        }
        self.scene.dispatch(
            &SceneEvent::Resized {
                viewport,
                at_secs: now_secs,
            },
            &mut self.rng,
        );
    }

    pub fn pointer_down(&mut self, at: Vec2) {
        self.pointer.press(at);
    }

    pub fn pointer_move(&mut self, at: Vec2) {
        self.pointer.moved(at);
    }

    pub fn pointer_cancel(&mut self) {
        self.pointer.cancel();
    }

    pub fn pointer_up(&mut self, at: Vec2, now_secs: f64) -> PointerOutcome {
        match self.pointer.release(at) {
            None => PointerOutcome::Ignored,
            Some(Gesture::Tap { at }) => {
                if self.scene.layout().hits_mute_button(at) {
                    PointerOutcome::MusicToggled(self.music.tap())
                } else {
                    PointerOutcome::Ignored
                }
            }
            Some(Gesture::DragEnded { translation, .. }) => {
                self.scene.dispatch(
                    &SceneEvent::DragEnded {
                        translation,
                        at_secs: now_secs,
                    },
                    &mut self.rng,
                );
                PointerOutcome::Swiped
            }
        }
    }

    pub fn frame(&self, now_secs: f64) -> Frame {
        self.scene.frame(now_secs)
    }
}
