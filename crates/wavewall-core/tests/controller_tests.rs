// Pointer routing through the combined scene + music owner.

use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use wavewall_core::*;

struct SilentHandle;

impl PlaybackHandle for SilentHandle {
    fn play(&mut self) -> Result<(), AudioError> {
        Ok(())
    }
    fn pause(&mut self) {}
}

#[derive(Default)]
struct SilentLoader {
    loads: usize,
}

impl AudioLoader for SilentLoader {
    type Handle = SilentHandle;

    fn load_looping(&mut self, _name: &str) -> Result<SilentHandle, AudioError> {
        self.loads += 1;
        Ok(SilentHandle)
    }
}

fn wallpaper() -> Wallpaper<SilentLoader, StdRng> {
    Wallpaper::launch(
        Viewport::new(400.0, 800.0),
        SilentLoader::default(),
        StdRng::seed_from_u64(11),
        0.0,
    )
}

#[test]
fn tap_on_mute_button_toggles_music() {
    let mut w = wallpaper();
    let button = w.scene().layout().mute_button.center();
    w.pointer_down(button);
    assert_eq!(
        w.pointer_up(button, 1.0),
        PointerOutcome::MusicToggled(Ok(PlaybackState::Playing))
    );
    assert!(!w.is_muted());
    assert_eq!(w.music().loader().loads, 1);
}

#[test]
fn tap_elsewhere_is_ignored() {
    let mut w = wallpaper();
    let p = Vec2::new(200.0, 400.0);
    w.pointer_down(p);
    assert_eq!(w.pointer_up(p + Vec2::new(1.0, 1.0), 1.0), PointerOutcome::Ignored);
    assert!(w.is_muted());
    assert_eq!(w.scene().direction(), SwipeDirection::Right);
}

#[test]
fn drag_recolors_scene() {
    let mut w = wallpaper();
    w.pointer_down(Vec2::new(200.0, 400.0));
    w.pointer_move(Vec2::new(200.0, 405.0));
    assert_eq!(
        w.pointer_up(Vec2::new(200.0, 410.0), 2.0),
        PointerOutcome::Swiped
    );
    assert_eq!(w.scene().direction(), SwipeDirection::Down);
}

#[test]
fn drag_starting_on_button_does_not_toggle() {
    let mut w = wallpaper();
    let button = w.scene().layout().mute_button.center();
    w.pointer_down(button);
    assert_eq!(
        w.pointer_up(button + Vec2::new(-40.0, 0.0), 1.0),
        PointerOutcome::Swiped
    );
    assert!(w.is_muted());
    assert_eq!(w.scene().direction(), SwipeDirection::Left);
}

#[test]
fn drag_released_outside_the_window_still_swipes() {
    let mut w = wallpaper();
    w.pointer_down(Vec2::new(200.0, 400.0));
    w.pointer_move(Vec2::new(200.0, 10.0));
    // cursor positions past the top edge keep arriving while the button is held
    w.pointer_move(Vec2::new(200.0, -30.0));
    assert_eq!(
        w.pointer_up(Vec2::new(200.0, -30.0), 2.0),
        PointerOutcome::Swiped
    );
    assert_eq!(w.scene().direction(), SwipeDirection::Up);
}

#[test]
fn lost_track_after_tap_returns_to_muted() {
    let mut w = wallpaper();
    let button = w.scene().layout().mute_button.center();
    w.pointer_down(button);
    w.pointer_up(button, 1.0);
    assert!(!w.is_muted());

    w.music_asset_lost();
    assert!(w.is_muted());
    assert_eq!(w.music().state(), PlaybackState::Unloaded);

    w.pointer_down(button);
    assert_eq!(
        w.pointer_up(button, 2.0),
        PointerOutcome::MusicToggled(Ok(PlaybackState::Playing))
    );
    assert_eq!(w.music().loader().loads, 2);
}

#[test]
fn release_without_press_is_ignored() {
    let mut w = wallpaper();
    assert_eq!(w.pointer_up(Vec2::new(5.0, 5.0), 0.5), PointerOutcome::Ignored);
}

#[test]
fn cancelled_press_produces_nothing() {
    let mut w = wallpaper();
    w.pointer_down(Vec2::new(10.0, 10.0));
    w.pointer_cancel();
    assert_eq!(w.pointer_up(Vec2::new(100.0, 10.0), 1.0), PointerOutcome::Ignored);
}

#[test]
fn repeated_resize_with_same_size_keeps_periods() {
    let mut w = wallpaper();
    let before: Vec<f32> = w.scene().waves().iter().map(|s| s.period).collect();
    w.resize(Viewport::new(400.0, 800.0), 3.0);
    let after: Vec<f32> = w.scene().waves().iter().map(|s| s.period).collect();
    assert_eq!(before, after);

    w.resize(Viewport::new(500.0, 800.0), 4.0);
    for s in w.scene().waves() {
        assert!(s.period >= 500.0 && s.period < 1500.0);
    }
}
