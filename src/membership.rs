//! Mesh membership snapshots and node ranks
//!
//! A snapshot is the sorted, de-duplicated list of node ids on the mesh,
//! always including this node. A node's rank is its position in that list,
//! so every node holding the same snapshot derives a distinct rank without
//! talking to the others.

use core::cell::RefCell;
use core::fmt;

use critical_section::Mutex;
use heapless::Vec;

#[cfg(feature = "esp32-log")]
use esp_println::println;

/// Identifier of a node on the mesh
pub type NodeId = u32;

/// Source of the current mesh membership
pub trait MembershipProvider {
    /// Identifier of this node
    fn self_id(&self) -> NodeId;

    /// Visit every known member
    ///
    /// The provider may or may not report this node; snapshots add it
    /// either way.
    fn for_each_member<F: FnMut(NodeId)>(&self, f: F);
}

impl<P: MembershipProvider> MembershipProvider for &P {
    fn self_id(&self) -> NodeId {
        (**self).self_id()
    }

    fn for_each_member<F: FnMut(NodeId)>(&self, f: F) {
        (**self).for_each_member(f);
    }
}

/// This node's id is missing from its own membership snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsistencyError {
    pub self_id: NodeId,
}

impl fmt::Display for ConsistencyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node {} is missing from the membership snapshot", self.self_id)
    }
}

/// More members were reported than a membership list can hold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MembershipOverflow {
    /// Number of ids that were dropped
    pub dropped: usize,
}

impl fmt::Display for MembershipOverflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} members dropped over capacity", self.dropped)
    }
}

/// Sorted, de-duplicated membership captured at one point in time
///
/// When more ids are offered than fit, the largest ones are dropped first.
/// This node's own id is never dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MembershipSnapshot<const N: usize> {
    self_id: NodeId,
    members: Vec<NodeId, N>,
    dropped: usize,
}

impl<const N: usize> MembershipSnapshot<N> {
    /// Snapshot containing only this node
    pub fn solo(self_id: NodeId) -> Self {
        let mut members = Vec::new();
        // Only fails for a zero-capacity snapshot, which then has no ranks
        let _ = members.push(self_id);
        Self {
            self_id,
            members,
            dropped: 0,
        }
    }

    /// Build a snapshot from an explicit member list
    pub fn from_members<I: IntoIterator<Item = NodeId>>(self_id: NodeId, ids: I) -> Self {
        let mut snapshot = Self::solo(self_id);
        for id in ids {
            snapshot.insert(id);
        }
        snapshot
    }

    /// Capture the provider's membership atomically
    pub fn capture<P: MembershipProvider>(provider: &P) -> Self {
        let mut snapshot = Self::solo(provider.self_id());
        provider.for_each_member(|id| snapshot.insert(id));

        #[cfg(feature = "esp32-log")]
        if snapshot.dropped > 0 {
            println!(
                "[MembershipSnapshot.capture] dropped {} members over capacity {}",
                snapshot.dropped, N
            );
        }

        snapshot
    }

    fn insert(&mut self, id: NodeId) {
        if !insert_sorted(&mut self.members, id, Some(self.self_id)) {
            self.dropped += 1;
        }
    }

    /// Identifier of this node
    pub const fn self_id(&self) -> NodeId {
        self.self_id
    }

    /// Members in ascending order
    pub fn members(&self) -> &[NodeId] {
        &self.members
    }

    /// Number of nodes in the group, never less than 1
    pub fn group_size(&self) -> usize {
        self.members.len().max(1)
    }

    /// Number of ids dropped because the snapshot was full
    pub const fn dropped(&self) -> usize {
        self.dropped
    }

    /// Rank of this node within the snapshot
    pub fn rank(&self) -> Result<usize, ConsistencyError> {
        rank_of(self.self_id, self)
    }
}

/// Insert `id` into an ascending, de-duplicated list
///
/// A full list evicts its largest id other than `keep` when `id` is smaller,
/// so the kept subset does not depend on arrival order. Returns `false` when
/// an id was lost, either `id` itself or the evicted one.
fn insert_sorted<const N: usize>(members: &mut Vec<NodeId, N>, id: NodeId, keep: Option<NodeId>) -> bool {
    let Err(position) = members.binary_search(&id) else {
        return true;
    };
    if !members.is_full() {
        let _ = members.insert(position, id);
        return true;
    }

    let victim = match members.last() {
        None => None,
        Some(&last) if Some(last) == keep => members.len().checked_sub(2),
        Some(_) => Some(members.len() - 1),
    };
    let Some(victim) = victim else {
        return false;
    };
    if id > members[victim] {
        return false;
    }
    members.remove(victim);
    let position = members.binary_search(&id).unwrap_or_else(|p| p);
    let _ = members.insert(position, id);
    false
}

/// Zero-based position of `id` in the snapshot
pub fn rank_of<const N: usize>(
    id: NodeId,
    snapshot: &MembershipSnapshot<N>,
) -> Result<usize, ConsistencyError> {
    snapshot
        .members
        .iter()
        .position(|member| *member == id)
        .ok_or(ConsistencyError { self_id: id })
}

/// Membership list shared between mesh callbacks and the frame loop
///
/// The mesh layer calls [`SharedMembership::update`] whenever connections
/// change; snapshots read it inside a single critical section.
pub struct SharedMembership<const N: usize> {
    self_id: NodeId,
    members: Mutex<RefCell<Vec<NodeId, N>>>,
}

impl<const N: usize> SharedMembership<N> {
    /// Create an empty membership for this node
    pub const fn new(self_id: NodeId) -> Self {
        Self {
            self_id,
            members: Mutex::new(RefCell::new(Vec::new())),
        }
    }

    /// Replace the member list
    ///
    /// The list is kept sorted and de-duplicated. Over capacity the largest
    /// ids are dropped and reported, whatever order they arrive in.
    pub fn update<I: IntoIterator<Item = NodeId>>(&self, ids: I) -> Result<(), MembershipOverflow> {
        let dropped = critical_section::with(|cs| {
            let mut members = self.members.borrow(cs).borrow_mut();
            members.clear();
            let mut dropped = 0;
            for id in ids {
                if !insert_sorted(&mut *members, id, None) {
                    dropped += 1;
                }
            }
            dropped
        });

        if dropped > 0 {
            #[cfg(feature = "esp32-log")]
            println!("[SharedMembership.update] dropped {} members", dropped);
            return Err(MembershipOverflow { dropped });
        }
        Ok(())
    }
}

impl<const N: usize> MembershipProvider for SharedMembership<N> {
    fn self_id(&self) -> NodeId {
        self.self_id
    }

    fn for_each_member<F: FnMut(NodeId)>(&self, mut f: F) {
        critical_section::with(|cs| {
            for id in self.members.borrow(cs).borrow().iter() {
                f(*id);
            }
        });
    }
}

/// Fixed membership backed by a slice
#[derive(Debug, Clone, Copy)]
pub struct StaticMembership<'a> {
    pub self_id: NodeId,
    pub members: &'a [NodeId],
}

impl MembershipProvider for StaticMembership<'_> {
    fn self_id(&self) -> NodeId {
        self.self_id
    }

    fn for_each_member<F: FnMut(NodeId)>(&self, f: F) {
        self.members.iter().copied().for_each(f);
    }
}
