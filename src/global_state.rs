use crate::domain::{narrative::NarrativeState, sentiment::Language};
use leptos::*;
use once_cell::sync::OnceCell;

/// View state shared across components. The indicator snapshot itself is
/// not here: it is generated once and passed down explicitly.
pub struct Globals {
    pub language: RwSignal<Language>,
    pub narrative: RwSignal<NarrativeState>,
}

static GLOBALS: OnceCell<Globals> = OnceCell::new();

pub fn globals() -> &'static Globals {
    GLOBALS.get_or_init(|| Globals {
        language: create_rw_signal(Language::default()),
        narrative: create_rw_signal(NarrativeState::Idle),
    })
}

crate::global_signals! {
    pub language_signal => language: Language,
    pub narrative_signal => narrative: NarrativeState,
}
