//! Gao-Rexford inter-domain path inference: given an AS-relationship graph
//! and an announcement, compute the complete set of tied-for-best
//! valley-free AS-paths at every reachable AS.

pub mod announcement;
pub mod engine;
pub mod error;
pub mod graph;
pub mod relationship;
pub mod state;
pub mod valley;
pub mod work_queue;

pub use announcement::Announcement;
pub use engine::{infer_paths, InferOptions, InferenceObserver};
pub use error::{AnnouncementError, InferenceError};
pub use graph::{AsGraph, Asn, ImportFilter};
pub use relationship::{PathPref, Relationship};
pub use state::{AnnouncementState, AsPath};
pub use valley::is_valley_free;
pub use work_queue::WorkQueue;
