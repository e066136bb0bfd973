use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use log::debug;
use thiserror::Error;
use yew::Reducible;

/// Identifier of one framework pillar card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PillarId {
    Enhance,
    Establish,
    Provide,
}

impl PillarId {
    pub const ALL: [PillarId; 3] = [PillarId::Enhance, PillarId::Establish, PillarId::Provide];

    pub fn as_str(self) -> &'static str {
        match self {
            PillarId::Enhance => "enhance",
            PillarId::Establish => "establish",
            PillarId::Provide => "provide",
        }
    }
}

impl fmt::Display for PillarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown pillar id: {0}")]
pub struct UnknownPillar(pub String);

impl FromStr for PillarId {
    type Err = UnknownPillar;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PillarId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownPillar(s.to_string()))
    }
}

/// The card currently showing its action list, if any. Holding a single
/// optional id means at most one card can ever be expanded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ActiveSection(Option<PillarId>);

impl ActiveSection {
    pub fn none() -> Self {
        Self(None)
    }

    pub fn current(self) -> Option<PillarId> {
        self.0
    }

    pub fn is_expanded(self, id: PillarId) -> bool {
        self.0 == Some(id)
    }

    /// Collapses `id` if it is the open card, otherwise opens it and closes
    /// whichever card was open before.
    pub fn toggle(self, id: PillarId) -> Self {
        if self.is_expanded(id) {
            Self(None)
        } else {
            Self(Some(id))
        }
    }
}

pub enum ExpansionAction {
    Toggle(PillarId),
}

impl Reducible for ActiveSection {
    type Action = ExpansionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ExpansionAction::Toggle(id) => {
                let next = self.toggle(id);
                debug!("Pillar {} toggled, active section now {:?}", id, next.current());
                Rc::new(next)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> PillarId {
        s.parse().expect("known pillar id")
    }

    #[test]
    fn starts_collapsed() {
        let state = ActiveSection::default();
        assert_eq!(state, ActiveSection::none());
        assert_eq!(state.current(), None);
        assert!(PillarId::ALL.iter().all(|id| !state.is_expanded(*id)));
    }

    #[test]
    fn click_sequence_expands_collapses_and_switches() {
        let state = ActiveSection::none().toggle(id("enhance"));
        assert_eq!(state.current(), Some(PillarId::Enhance));

        let state = state.toggle(id("enhance"));
        assert_eq!(state.current(), None);

        let state = state.toggle(id("establish"));
        assert_eq!(state.current(), Some(PillarId::Establish));
    }

    #[test]
    fn double_toggle_restores_previous_state() {
        for id in PillarId::ALL {
            let collapsed = ActiveSection::none();
            assert_eq!(collapsed.toggle(id).toggle(id), collapsed);

            let expanded = ActiveSection::none().toggle(id);
            assert_eq!(expanded.toggle(id).toggle(id), expanded);
        }
    }

    #[test]
    fn double_toggle_of_other_card_ends_collapsed() {
        let open = ActiveSection::none().toggle(PillarId::Enhance);
        let state = open.toggle(PillarId::Provide).toggle(PillarId::Provide);
        assert_eq!(state, ActiveSection::none());
    }

    #[test]
    fn opening_another_card_closes_the_first() {
        for a in PillarId::ALL {
            for b in PillarId::ALL.into_iter().filter(|b| *b != a) {
                let state = ActiveSection::none().toggle(a).toggle(b);
                assert_eq!(state.current(), Some(b));
                assert!(!state.is_expanded(a));
            }
        }
    }

    #[test]
    fn reducer_delegates_to_toggle() {
        let state = Rc::new(ActiveSection::none());
        let state = state.reduce(ExpansionAction::Toggle(PillarId::Provide));
        assert_eq!(state.current(), Some(PillarId::Provide));
        let state = state.reduce(ExpansionAction::Toggle(PillarId::Provide));
        assert_eq!(*state, ActiveSection::none());
    }

    #[test]
    fn parses_known_ids_only() {
        for id in PillarId::ALL {
            assert_eq!(id.as_str().parse::<PillarId>(), Ok(id));
            assert_eq!(id.to_string(), id.as_str());
        }
        assert_eq!(
            "monitor".parse::<PillarId>(),
            Err(UnknownPillar("monitor".to_string()))
        );
        assert_eq!(
            UnknownPillar("x".to_string()).to_string(),
            "unknown pillar id: x"
        );
    }
}
