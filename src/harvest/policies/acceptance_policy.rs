use crate::harvest::domain::SbomDocument;

/// Outcome of applying the component threshold to one document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcceptanceDecision {
    Accepted { component_count: usize },
    Rejected { component_count: usize },
}

impl AcceptanceDecision {
    pub fn is_accepted(&self) -> bool {
        matches!(self, AcceptanceDecision::Accepted { .. })
    }

    pub fn component_count(&self) -> usize {
        match self {
            AcceptanceDecision::Accepted { component_count }
            | AcceptanceDecision::Rejected { component_count } => *component_count,
        }
    }
}

/// ComponentThreshold policy: keep SBOMs declaring at least `minimum` components
///
/// The boundary is inclusive on the accept side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComponentThreshold {
    minimum: usize,
}

impl ComponentThreshold {
    pub fn new(minimum: usize) -> Self {
        Self { minimum }
    }

    pub fn minimum(&self) -> usize {
        self.minimum
    }

    pub fn evaluate_count(&self, component_count: usize) -> AcceptanceDecision {
        if component_count >= self.minimum {
            AcceptanceDecision::Accepted { component_count }
        } else {
            AcceptanceDecision::Rejected { component_count }
        }
    }

    pub fn evaluate(&self, document: &SbomDocument) -> AcceptanceDecision {
        self.evaluate_count(document.component_count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_minimum_is_accepted() {
        let threshold = ComponentThreshold::new(10);
        assert_eq!(
            threshold.evaluate_count(10),
            AcceptanceDecision::Accepted {
                component_count: 10
            }
        );
    }

    #[test]
    fn test_one_below_minimum_is_rejected() {
        let threshold = ComponentThreshold::new(10);
        assert_eq!(
            threshold.evaluate_count(9),
            AcceptanceDecision::Rejected { component_count: 9 }
        );
    }

    #[test]
    fn test_zero_minimum_accepts_empty_documents() {
        let threshold = ComponentThreshold::new(0);
        let doc = SbomDocument::from_slice(b"{}").unwrap();
        assert!(threshold.evaluate(&doc).is_accepted());
    }

    #[test]
    fn test_absent_components_rejected_by_positive_threshold() {
        let threshold = ComponentThreshold::new(1);
        let doc = SbomDocument::from_slice(br#"{"bomFormat": "CycloneDX"}"#).unwrap();
        let decision = threshold.evaluate(&doc);
        assert!(!decision.is_accepted());
        assert_eq!(decision.component_count(), 0);
    }
}
