use std::fmt;

/// An index into a sibling sequence (top-level nodes or slot children).
pub type SiteIdx = usize;

/// A point on a sequence of siblings.
///
/// A sequence of `n` items has `n + 1` gaps and `n` items, interleaved as
/// `gap 0, item 0, gap 1, item 1, ..., item n-1, gap n`. Every point is also
/// addressable in half units, where gap `g` sits at `g - 0.5` and item `i`
/// at `i`. This is the coordinate space the cursor reports to hosts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Site {
	/// The gap before item `index` (or after the last item when `index == len`).
	Gap(SiteIdx),
	/// The item at `index`.
	Item(SiteIdx),
}

impl Site {
	/// The gap before the first item.
	pub const START: Self = Site::Gap(0);

	/// Returns the position in doubled half-integer units.
	#[inline]
	pub fn half_units(self) -> isize {
		match self {
			Site::Gap(g) => 2 * g as isize - 1,
			Site::Item(i) => 2 * i as isize,
		}
	}

	/// Index of the item at or immediately before this site.
	///
	/// This is `floor(position)`; the start gap has no such item.
	#[inline]
	pub fn floor(self) -> Option<SiteIdx> {
		match self {
			Site::Gap(g) => g.checked_sub(1),
			Site::Item(i) => Some(i),
		}
	}

	/// Index of the item at or immediately after this site (`ceil(position)`).
	///
	/// This is also the insertion index for a new item at this site.
	#[inline]
	pub fn ceil(self) -> SiteIdx {
		match self {
			Site::Gap(g) => g,
			Site::Item(i) => i,
		}
	}

	/// Returns `true` if the site lies on a sequence of `len` items.
	pub fn fits(self, len: usize) -> bool {
		match self {
			Site::Gap(g) => g <= len,
			Site::Item(i) => i < len,
		}
	}
}

impl Default for Site {
	fn default() -> Self {
		Self::START
	}
}

impl fmt::Display for Site {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.half_units() {
			-1 => f.write_str("-0.5"),
			units if units % 2 == 0 => write!(f, "{}", units / 2),
			units => write!(f, "{}.5", (units - 1) / 2),
		}
	}
}
