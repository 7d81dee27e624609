//! Contains the reasoning which prunes the domains after every tentative colouring; the most
//! important one being [`ArcConsistency`], an implementation of AC-3 for the constraint that
//! adjacent nodes receive different colours.
mod arc_consistency;
mod arc_queue;
mod consistency_check;
mod forward_checking;
mod inference;
mod inference_mode;

pub use arc_consistency::is_arc_consistent;
pub use arc_consistency::propagate;
pub use arc_consistency::revise;
pub use arc_consistency::ArcConsistency;
pub use arc_queue::ArcQueue;
pub use arc_queue::DirectedArc;
pub use consistency_check::ConsistencyCheck;
pub use forward_checking::ForwardChecking;
pub use inference::Inference;
pub use inference_mode::InferenceMode;

use crate::create_statistics_struct;

create_statistics_struct!(
    /// The statistics related to the inference performed during search
    PropagationStatistics {
        /// The number of times the inference was invoked
        num_calls: u64,
        /// The number of arcs which were revised
        num_revisions: u64,
        /// The number of colours which were removed from domains
        num_values_pruned: u64,
        /// The number of times a domain was wiped out
        num_wipeouts: u64,
    }
);
