//! Navigation targets: the closed set of pages.

use stackscope_core::{LayerId, NavError, ResourceId};

/// Exactly one target is active at any time. The set is closed: two fixed
/// pages, the home overview, one page per layer, one per resource group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    Home,
    BusinessValue,
    ExplodedDiagram,
    Layer(LayerId),
    Resource(ResourceId),
}

impl NavTarget {
    pub fn title(&self) -> &'static str {
        match self {
            NavTarget::Home => "System Overview",
            NavTarget::BusinessValue => "Business Value",
            NavTarget::ExplodedDiagram => "Exploded Diagram",
            NavTarget::Layer(id) => id.info().title,
            NavTarget::Resource(id) => id.info().title,
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            NavTarget::Home => "home",
            NavTarget::BusinessValue => "business",
            NavTarget::ExplodedDiagram => "exploded-diagram",
            NavTarget::Layer(id) => id.slug(),
            NavTarget::Resource(id) => id.slug(),
        }
    }

    /// Resolve a slug against the closed catalog. Anything outside it is a
    /// caller bug and is rejected without touching any state.
    pub fn from_slug(slug: &str) -> Result<NavTarget, NavError> {
        Self::all()
            .into_iter()
            .find(|target| target.slug() == slug)
            .ok_or_else(|| NavError::InvalidTarget {
                slug: slug.to_string(),
            })
    }

    /// Every target in menu order: fixed pages, then layers, then resources.
    pub fn all() -> Vec<NavTarget> {
        let mut targets = vec![
            NavTarget::Home,
            NavTarget::BusinessValue,
            NavTarget::ExplodedDiagram,
        ];
        targets.extend(LayerId::all().iter().map(|id| NavTarget::Layer(*id)));
        targets.extend(ResourceId::all().iter().map(|id| NavTarget::Resource(*id)));
        targets
    }

    pub fn index(&self) -> usize {
        Self::all().iter().position(|t| t == self).unwrap_or(0)
    }

    pub fn from_index(index: usize) -> Option<NavTarget> {
        Self::all().get(index).copied()
    }

    pub fn next(&self) -> NavTarget {
        let all = Self::all();
        all[(self.index() + 1) % all.len()]
    }

    pub fn previous(&self) -> NavTarget {
        let all = Self::all();
        let idx = self.index();
        all[if idx == 0 { all.len() - 1 } else { idx - 1 }]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closed_set_has_thirteen_targets() {
        // 3 fixed pages + 6 layers + 4 resource groups.
        assert_eq!(NavTarget::all().len(), 13);
    }

    #[test]
    fn test_slug_round_trip() {
        for target in NavTarget::all() {
            assert_eq!(NavTarget::from_slug(target.slug()), Ok(target));
        }
    }

    #[test]
    fn test_unknown_slug_rejected() {
        let err = NavTarget::from_slug("warp-core").unwrap_err();
        assert_eq!(
            err,
            NavError::InvalidTarget {
                slug: "warp-core".to_string()
            }
        );
    }

    #[test]
    fn test_next_previous_cycle() {
        for target in NavTarget::all() {
            assert_eq!(target.next().previous(), target);
        }
    }
}
