// Host-side tests for the music toggle state machine using a fake loader.

use std::cell::RefCell;
use std::rc::Rc;
use wavewall_core::*;

#[derive(Default)]
struct Calls {
    loads: usize,
    plays: usize,
    pauses: usize,
}

struct FakeHandle {
    id: usize,
    calls: Rc<RefCell<Calls>>,
    fail_play: bool,
}

impl PlaybackHandle for FakeHandle {
    fn play(&mut self) -> Result<(), AudioError> {
        self.calls.borrow_mut().plays += 1;
        if self.fail_play {
            Err(AudioError::Engine("device gone".into()))
        } else {
            Ok(())
        }
    }

    fn pause(&mut self) {
        self.calls.borrow_mut().pauses += 1;
    }
}

enum Behaviour {
    Ok,
    MissingAsset,
    EngineFailure,
    PlayFails,
}

struct FakeLoader {
    behaviour: Behaviour,
    calls: Rc<RefCell<Calls>>,
    requested: Vec<String>,
}

impl FakeLoader {
    fn new(behaviour: Behaviour) -> (Self, Rc<RefCell<Calls>>) {
        let calls = Rc::new(RefCell::new(Calls::default()));
        (
            Self {
                behaviour,
                calls: calls.clone(),
                requested: Vec::new(),
            },
            calls,
        )
    }
}

impl AudioLoader for FakeLoader {
    type Handle = FakeHandle;

    fn load_looping(&mut self, name: &str) -> Result<FakeHandle, AudioError> {
        self.requested.push(name.to_string());
        let id = {
            let mut calls = self.calls.borrow_mut();
            calls.loads += 1;
            calls.loads
        };
        match self.behaviour {
            Behaviour::Ok | Behaviour::PlayFails => Ok(FakeHandle {
                id,
                calls: self.calls.clone(),
                fail_play: matches!(self.behaviour, Behaviour::PlayFails),
            }),
            Behaviour::MissingAsset => Err(AudioError::AssetUnavailable {
                name: name.to_string(),
            }),
            Behaviour::EngineFailure => Err(AudioError::Engine("bad frame header".into())),
        }
    }
}

#[test]
fn starts_muted_and_unloaded() {
    let (loader, calls) = FakeLoader::new(Behaviour::Ok);
    let toggle = MusicToggle::new(loader, MUSIC_ASSET);
    assert!(toggle.is_muted());
    assert_eq!(toggle.state(), PlaybackState::Unloaded);
    assert_eq!(calls.borrow().loads, 0);
}

#[test]
fn first_unmute_loads_bundled_track_and_plays() {
    let (loader, calls) = FakeLoader::new(Behaviour::Ok);
    let mut toggle = MusicToggle::new(loader, MUSIC_ASSET);
    assert_eq!(toggle.tap(), Ok(PlaybackState::Playing));
    assert!(!toggle.is_muted());
    assert_eq!(toggle.loader().requested, vec!["music.mp3".to_string()]);
    assert_eq!(calls.borrow().loads, 1);
    assert_eq!(calls.borrow().plays, 1);
}

#[test]
fn two_taps_restore_previous_state() {
    let (loader, _calls) = FakeLoader::new(Behaviour::Ok);
    let mut toggle = MusicToggle::new(loader, MUSIC_ASSET);
    toggle.tap().ok();
    let playing = toggle.state();
    toggle.tap().ok();
    assert_eq!(toggle.state(), PlaybackState::Paused);
    toggle.tap().ok();
    assert_eq!(toggle.state(), playing);
}

#[test]
fn resume_reuses_the_same_handle() {
    let (loader, calls) = FakeLoader::new(Behaviour::Ok);
    let mut toggle = MusicToggle::new(loader, MUSIC_ASSET);
    toggle.tap().ok();
    let first_id = toggle.player().map(|h| h.id);
    for _ in 0..3 {
        toggle.tap().ok(); // mute
        toggle.tap().ok(); // unmute
    }
    assert_eq!(toggle.player().map(|h| h.id), first_id);
    let c = calls.borrow();
    assert_eq!(c.loads, 1);
    assert_eq!(c.plays, 4);
    assert_eq!(c.pauses, 3);
}

#[test]
fn missing_asset_is_recoverable_and_stays_muted() {
    let (loader, calls) = FakeLoader::new(Behaviour::MissingAsset);
    let mut toggle = MusicToggle::new(loader, MUSIC_ASSET);
    let err = toggle.tap().unwrap_err();
    assert_eq!(
        err,
        AudioError::AssetUnavailable {
            name: "music.mp3".into()
        }
    );
    assert!(toggle.is_muted());
    assert!(toggle.player().is_none());
    assert_eq!(toggle.state(), PlaybackState::Unloaded);

    // the screen stays usable: a later tap simply tries again
    assert!(toggle.tap().is_err());
    assert_eq!(calls.borrow().loads, 2);
}

#[test]
fn engine_failure_is_logged_and_retried_on_next_unmute() {
    let (loader, calls) = FakeLoader::new(Behaviour::EngineFailure);
    let mut toggle = MusicToggle::new(loader, MUSIC_ASSET);
    assert_eq!(toggle.tap(), Ok(PlaybackState::Unloaded));
    assert!(!toggle.is_muted());
    assert!(toggle.player().is_none());

    // muting with no player is a no-op on audio
    assert_eq!(toggle.tap(), Ok(PlaybackState::Unloaded));
    assert!(toggle.is_muted());

    toggle.tap().ok();
    assert_eq!(calls.borrow().loads, 2);
    assert_eq!(calls.borrow().pauses, 0);
}

#[test]
fn play_failure_keeps_handle() {
    let (loader, calls) = FakeLoader::new(Behaviour::PlayFails);
    let mut toggle = MusicToggle::new(loader, MUSIC_ASSET);
    assert_eq!(toggle.tap(), Ok(PlaybackState::Playing));
    assert!(toggle.player().is_some());
    toggle.tap().ok();
    // a failed resume still reads as unmuted on the same handle
    assert_eq!(toggle.tap(), Ok(PlaybackState::Playing));
    assert!(toggle.player().is_some());
    assert_eq!(calls.borrow().loads, 1);
    assert_eq!(calls.borrow().plays, 2);
}

#[test]
fn asset_lost_after_load_returns_to_muted_without_player() {
    let (loader, calls) = FakeLoader::new(Behaviour::Ok);
    let mut toggle = MusicToggle::new(loader, MUSIC_ASSET);
    assert_eq!(toggle.tap(), Ok(PlaybackState::Playing));

    toggle.asset_lost();
    assert!(toggle.is_muted());
    assert!(toggle.player().is_none());
    assert_eq!(toggle.state(), PlaybackState::Unloaded);
    assert_eq!(calls.borrow().pauses, 1);

    // next unmute loads afresh
    assert_eq!(toggle.tap(), Ok(PlaybackState::Playing));
    assert_eq!(calls.borrow().loads, 2);
}

#[test]
fn asset_lost_while_muted_is_harmless() {
    let (loader, calls) = FakeLoader::new(Behaviour::Ok);
    let mut toggle = MusicToggle::new(loader, MUSIC_ASSET);
    toggle.asset_lost();
    assert!(toggle.is_muted());
    assert_eq!(toggle.state(), PlaybackState::Unloaded);
    assert_eq!(calls.borrow().pauses, 0);
}
