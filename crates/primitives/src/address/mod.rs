use crate::ids::SlotId;
use crate::site::{Site, SiteIdx};


/// Where the cursor rests inside an expression.
///
/// The cursor only ever rests in a gap: either between top-level nodes, or
/// between the children of some slot. Resting "on" a node is expressed by
/// the top-level ancestor of the slot, see [`crate::Site::Item`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Address {
	/// Gap `gap` of the top-level node sequence.
	Top {
		/// Insertion index among the top-level nodes.
		gap: SiteIdx,
	},
	/// Gap `gap` of the children of `slot`.
	Slot {
		/// Slot currently containing the cursor.
		slot: SlotId,
		/// Insertion index among the slot's children.
		gap: SiteIdx,
	},
}

impl Address {
	/// The very start of the document.
	pub const START: Self = Address::Top { gap: 0 };

	/// Creates an address at `gap` inside `slot`.
	pub fn in_slot(slot: SlotId, gap: SiteIdx) -> Self {
		Address::Slot { slot, gap }
	}

	/// Creates a top-level address at `gap`.
	pub fn top(gap: SiteIdx) -> Self {
		Address::Top { gap }
	}

	/// Returns the insertion index within the current sequence.
	#[inline]
	pub fn gap(&self) -> SiteIdx {
		match *self {
			Address::Top { gap } | Address::Slot { gap, .. } => gap,
		}
	}

	/// Returns the slot containing the cursor, or [`None`] at top level.
	#[inline]
	pub fn slot(&self) -> Option<SlotId> {
		match *self {
			Address::Top { .. } => None,
			Address::Slot { slot, .. } => Some(slot),
		}
	}

	/// Returns `true` when the cursor sits between top-level nodes.
	#[inline]
	pub fn is_top(&self) -> bool {
		matches!(self, Address::Top { .. })
	}

	/// Returns the same sequence with a different gap.
	pub fn with_gap(self, gap: SiteIdx) -> Self {
		match self {
			Address::Top { .. } => Address::Top { gap },
			Address::Slot { slot, .. } => Address::Slot { slot, gap },
		}
	}

	/// Returns the in-sequence site of this address.
	pub fn site(&self) -> Site {
		Site::Gap(self.gap())
	}
}

impl Default for Address {
	fn default() -> Self {
		Self::START
	}
}
