// Availability of a bundled file as the page learns about it. A HEAD
// request answers early; a media `error` event may arrive later. Once a
// file is known missing it stays missing for the session.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AssetStatus {
    #[default]
    Unknown,
    Available,
    Missing,
}

impl AssetStatus {
    pub fn from_http_status(status: u16) -> Self {
        if (200..300).contains(&status) || status == 304 {
            AssetStatus::Available
        } else {
            AssetStatus::Missing
        }
    }

    /// Combine with a newer observation. `Missing` is sticky.
    pub fn update(self, observed: AssetStatus) -> Self {
        match (self, observed) {
            (AssetStatus::Missing, _) => AssetStatus::Missing,
            (_, AssetStatus::Unknown) => self,
            (_, observed) => observed,
        }
    }

    /// Whether a player may be handed out. Unknown is let through; a late
    /// failure is reported back through [`should_drop_player`].
    pub fn allows_load(self) -> bool {
        self != AssetStatus::Missing
    }
}

pub fn should_drop_player(status: AssetStatus, has_player: bool) -> bool {
    has_player && status == AssetStatus::Missing
}
