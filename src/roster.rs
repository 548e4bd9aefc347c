//! Staff roster: a binary tree of named staff members
//!
//! Reporting lines in a small clinic form a binary tree: every member has at
//! most a left and a right report, and new members are seated under a parent
//! picked by name. The roster offers the three classic traversal orders for
//! listing staff.
//!
//! # Design
//!
//! Nodes live in an append-only arena (`Vec`) addressed by [`NodeId`]
//! handles, and a hash map resolves names to handles. Inserting under a
//! named parent is therefore an O(1) expected lookup instead of a tree walk,
//! at the cost of requiring roster-wide unique names.
//!
//! # Example
//!
//! ```rust
//! use clinic_triage::{Side, StaffRoster};
//!
//! let mut roster = StaffRoster::new();
//! roster.set_root("Dr. Croft")?;
//! roster.insert("Dr. Croft", "Dr. Phan", Side::Left)?;
//! roster.insert("Dr. Croft", "Dr. Goldsmith", Side::Right)?;
//!
//! assert_eq!(roster.preorder(), ["Dr. Croft", "Dr. Phan", "Dr. Goldsmith"]);
//! # Ok::<(), clinic_triage::RosterError>(())
//! ```

use std::fmt;
use std::str::FromStr;

use rustc_hash::FxHashMap;

/// Which report slot of a parent a new member occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    fn label(self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Side {
    type Err = RosterError;

    /// Accepts `"left"` or `"right"`, ignoring surrounding whitespace and
    /// ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(Side::Left),
            "right" => Ok(Side::Right),
            _ => Err(RosterError::InvalidSide(s.to_string())),
        }
    }
}

/// Error type for roster operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    /// An insert was attempted before any root was seated
    NoRoot,
    /// `set_root` was called on a roster that already has a root
    RootAlreadySet,
    /// The named parent is not in the roster
    UnknownParent(String),
    /// The parent already has a report on the requested side
    SlotOccupied {
        /// The parent whose slot was requested
        parent: String,
        /// The occupied side
        side: Side,
    },
    /// The name is already taken; roster names are unique
    DuplicateName(String),
    /// A side string was neither "left" nor "right"
    InvalidSide(String),
}

impl fmt::Display for RosterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RosterError::NoRoot => {
                write!(f, "cannot insert into an empty roster; seat a root first")
            }
            RosterError::RootAlreadySet => write!(f, "the roster already has a root"),
            RosterError::UnknownParent(name) => {
                write!(f, "parent '{}' not found in the roster", name)
            }
            RosterError::SlotOccupied { parent, side } => {
                write!(f, "'{}' already has a {} report", parent, side)
            }
            RosterError::DuplicateName(name) => {
                write!(f, "'{}' is already in the roster", name)
            }
            RosterError::InvalidSide(input) => {
                write!(f, "side must be 'left' or 'right', got '{}'", input)
            }
        }
    }
}

impl std::error::Error for RosterError {}

/// Opaque handle to a roster member.
///
/// Handles index the roster's internal arena and stay valid for the life of
/// the roster; members are never removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Clone)]
struct StaffNode {
    name: String,
    left: Option<NodeId>,
    right: Option<NodeId>,
}

/// A binary tree of staff reporting lines.
///
/// Members are addressed by name, which must be unique roster-wide.
#[derive(Debug, Clone)]
pub struct StaffRoster {
    /// Arena of nodes; a [`NodeId`] is an index into this vector.
    nodes: Vec<StaffNode>,
    /// Name lookup; every member's name maps to its handle.
    by_name: FxHashMap<String, NodeId>,
    root: Option<NodeId>,
}

impl StaffRoster {
    /// Creates an empty roster.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            by_name: FxHashMap::default(),
            root: None,
        }
    }

    /// Returns the number of members.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the roster has no members.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns true if a member with the given name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Name at the top of the reporting tree, if a root is seated.
    pub fn root(&self) -> Option<&str> {
        self.root.map(|id| self.nodes[id.0].name.as_str())
    }

    /// Seats the first member at the top of the reporting tree.
    ///
    /// # Errors
    ///
    /// [`RosterError::RootAlreadySet`] if the roster already has a root.
    pub fn set_root(&mut self, name: &str) -> Result<NodeId, RosterError> {
        if self.root.is_some() {
            return Err(RosterError::RootAlreadySet);
        }
        let id = self.alloc(name)?;
        self.root = Some(id);
        Ok(id)
    }

    /// Adds `child` as the `side` report of `parent`.
    ///
    /// All checks run before any mutation, so a failed insert leaves the
    /// roster unchanged.
    ///
    /// # Errors
    ///
    /// [`RosterError::NoRoot`] if no root has been seated,
    /// [`RosterError::UnknownParent`] if `parent` is not in the roster,
    /// [`RosterError::SlotOccupied`] if the parent already has a report on
    /// that side, and [`RosterError::DuplicateName`] if `child` is already a
    /// member.
    pub fn insert(&mut self, parent: &str, child: &str, side: Side) -> Result<NodeId, RosterError> {
        if self.root.is_none() {
            return Err(RosterError::NoRoot);
        }
        let parent_id = *self
            .by_name
            .get(parent)
            .ok_or_else(|| RosterError::UnknownParent(parent.to_string()))?;

        let occupied = match side {
            Side::Left => self.nodes[parent_id.0].left.is_some(),
            Side::Right => self.nodes[parent_id.0].right.is_some(),
        };
        if occupied {
            return Err(RosterError::SlotOccupied {
                parent: parent.to_string(),
                side,
            });
        }

        let child_id = self.alloc(child)?;
        let parent_node = &mut self.nodes[parent_id.0];
        match side {
            Side::Left => parent_node.left = Some(child_id),
            Side::Right => parent_node.right = Some(child_id),
        }
        Ok(child_id)
    }

    /// Names in preorder: member, left subtree, right subtree.
    pub fn preorder(&self) -> Vec<&str> {
        let mut out = Vec::with_capacity(self.nodes.len());
        self.walk_preorder(self.root, &mut out);
        out
    }

    /// Names in inorder: left subtree, member, right subtree.
    pub fn inorder(&self) -> Vec<&str> {
        let mut out = Vec::with_capacity(self.nodes.len());
        self.walk_inorder(self.root, &mut out);
        out
    }

    /// Names in postorder: left subtree, right subtree, member.
    pub fn postorder(&self) -> Vec<&str> {
        let mut out = Vec::with_capacity(self.nodes.len());
        self.walk_postorder(self.root, &mut out);
        out
    }

    /// Reserves an arena slot and name-map entry for a new member.
    fn alloc(&mut self, name: &str) -> Result<NodeId, RosterError> {
        if self.by_name.contains_key(name) {
            return Err(RosterError::DuplicateName(name.to_string()));
        }
        let id = NodeId(self.nodes.len());
        self.nodes.push(StaffNode {
            name: name.to_string(),
            left: None,
            right: None,
        });
        self.by_name.insert(name.to_string(), id);
        Ok(id)
    }

    fn walk_preorder<'a>(&'a self, node: Option<NodeId>, out: &mut Vec<&'a str>) {
        if let Some(id) = node {
            let node = &self.nodes[id.0];
            out.push(node.name.as_str());
            self.walk_preorder(node.left, out);
            self.walk_preorder(node.right, out);
        }
    }

    fn walk_inorder<'a>(&'a self, node: Option<NodeId>, out: &mut Vec<&'a str>) {
        if let Some(id) = node {
            let node = &self.nodes[id.0];
            self.walk_inorder(node.left, out);
            out.push(node.name.as_str());
            self.walk_inorder(node.right, out);
        }
    }

    fn walk_postorder<'a>(&'a self, node: Option<NodeId>, out: &mut Vec<&'a str>) {
        if let Some(id) = node {
            let node = &self.nodes[id.0];
            self.walk_postorder(node.left, out);
            self.walk_postorder(node.right, out);
            out.push(node.name.as_str());
        }
    }
}

impl Default for StaffRoster {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clinic_roster() -> StaffRoster {
        let mut roster = StaffRoster::new();
        roster.set_root("Dr. Croft").unwrap();
        roster
            .insert("Dr. Croft", "Dr. Goldsmith", Side::Right)
            .unwrap();
        roster.insert("Dr. Croft", "Dr. Phan", Side::Left).unwrap();
        roster.insert("Dr. Phan", "Dr. Carson", Side::Right).unwrap();
        roster.insert("Dr. Phan", "Dr. Morgan", Side::Left).unwrap();
        roster
    }

    #[test]
    fn test_traversal_orders() {
        let roster = clinic_roster();

        assert_eq!(
            roster.preorder(),
            ["Dr. Croft", "Dr. Phan", "Dr. Morgan", "Dr. Carson", "Dr. Goldsmith"]
        );
        assert_eq!(
            roster.inorder(),
            ["Dr. Morgan", "Dr. Phan", "Dr. Carson", "Dr. Croft", "Dr. Goldsmith"]
        );
        assert_eq!(
            roster.postorder(),
            ["Dr. Morgan", "Dr. Carson", "Dr. Phan", "Dr. Goldsmith", "Dr. Croft"]
        );
    }

    #[test]
    fn test_empty_roster() {
        let roster = StaffRoster::new();

        assert!(roster.is_empty());
        assert_eq!(roster.len(), 0);
        assert_eq!(roster.root(), None);
        assert!(roster.preorder().is_empty());
        assert!(roster.inorder().is_empty());
        assert!(roster.postorder().is_empty());
    }

    #[test]
    fn test_insert_requires_root() {
        let mut roster = StaffRoster::new();

        assert_eq!(
            roster.insert("Dr. Croft", "Dr. Phan", Side::Left),
            Err(RosterError::NoRoot)
        );
        assert!(roster.is_empty());
    }

    #[test]
    fn test_root_can_only_be_seated_once() {
        let mut roster = StaffRoster::new();
        roster.set_root("Dr. Croft").unwrap();

        assert_eq!(roster.set_root("Dr. Phan"), Err(RosterError::RootAlreadySet));
        assert_eq!(roster.root(), Some("Dr. Croft"));
    }

    #[test]
    fn test_unknown_parent_rejected() {
        let mut roster = StaffRoster::new();
        roster.set_root("Dr. Croft").unwrap();

        assert_eq!(
            roster.insert("Dr. Nobody", "Dr. Phan", Side::Left),
            Err(RosterError::UnknownParent("Dr. Nobody".to_string()))
        );
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn test_occupied_slot_rejected() {
        let mut roster = StaffRoster::new();
        roster.set_root("Dr. Croft").unwrap();
        roster.insert("Dr. Croft", "Dr. Phan", Side::Left).unwrap();

        assert_eq!(
            roster.insert("Dr. Croft", "Dr. Carson", Side::Left),
            Err(RosterError::SlotOccupied {
                parent: "Dr. Croft".to_string(),
                side: Side::Left,
            })
        );
        assert!(!roster.contains("Dr. Carson"));
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let mut roster = StaffRoster::new();
        roster.set_root("Dr. Croft").unwrap();

        assert_eq!(
            roster.insert("Dr. Croft", "Dr. Croft", Side::Left),
            Err(RosterError::DuplicateName("Dr. Croft".to_string()))
        );
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn test_contains_and_len() {
        let roster = clinic_roster();

        assert_eq!(roster.len(), 5);
        assert!(roster.contains("Dr. Morgan"));
        assert!(!roster.contains("Dr. Nobody"));
    }

    #[test]
    fn test_side_parsing() {
        assert_eq!("left".parse::<Side>(), Ok(Side::Left));
        assert_eq!(" RIGHT ".parse::<Side>(), Ok(Side::Right));
        assert_eq!("Left".parse::<Side>(), Ok(Side::Left));
        assert_eq!(
            "up".parse::<Side>(),
            Err(RosterError::InvalidSide("up".to_string()))
        );
    }

    #[test]
    fn test_side_display() {
        assert_eq!(Side::Left.to_string(), "left");
        assert_eq!(Side::Right.to_string(), "right");
    }
}
