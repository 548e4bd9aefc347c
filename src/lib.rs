//! Clinic scheduling data structures
//!
//! This crate provides the two in-memory structures a small clinic needs to
//! run its day:
//!
//! - [`TriageQueue`]: a binary min-heap of [`Patient`]s keyed by an urgency
//!   rank from 1 (most urgent) to 10 (least urgent). Patients with equal
//!   urgency are served first-come, first-served.
//! - [`StaffRoster`]: a binary tree of named staff members with insertion by
//!   parent name and preorder/inorder/postorder traversals.
//!
//! Both structures are single-threaded and owned by their caller; wrap them
//! in a mutex if you need to share one.
//!
//! # Example
//!
//! ```rust
//! use clinic_triage::{Patient, TriageQueue};
//!
//! let mut queue = TriageQueue::new();
//! queue.insert(Patient::new(3, "Jordan")?);
//! queue.insert(Patient::new(1, "Taylor")?);
//! queue.insert(Patient::new(5, "Avery")?);
//!
//! assert_eq!(queue.peek()?.name(), "Taylor");
//!
//! let served = queue.extract_min()?;
//! assert_eq!(served.urgency(), 1);
//! assert_eq!(queue.len(), 2);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod patient;
pub mod roster;
pub mod triage;

// Re-export the public surface for convenience
pub use patient::{Patient, ValidationError};
pub use roster::{NodeId, RosterError, Side, StaffRoster};
pub use triage::{EmptyQueueError, TriageQueue};
