use super::ArcConsistency;
use super::ConsistencyCheck;
use super::ForwardChecking;
use super::Inference;

/// The inference which is performed by the search after every tentative colouring.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum InferenceMode {
    /// Maintain arc consistency (AC-3) over the whole graph and colour every node which has a
    /// single colour left.
    #[default]
    ArcConsistency,
    /// Remove the chosen colour from the domains of the neighbours of the coloured node.
    ForwardChecking,
    /// Only check that no coloured neighbour uses the chosen colour.
    None,
}

impl InferenceMode {
    pub(crate) fn create_inference(self) -> Box<dyn Inference> {
        match self {
            InferenceMode::ArcConsistency => Box::new(ArcConsistency::default()),
            InferenceMode::ForwardChecking => Box::new(ForwardChecking::default()),
            InferenceMode::None => Box::new(ConsistencyCheck::default()),
        }
    }
}
