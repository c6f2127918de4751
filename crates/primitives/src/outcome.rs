/// Result of applying one edit event to a session.
///
/// Editing never surfaces errors to the host; boundary conditions are
/// [`EditOutcome::Unchanged`] and internal inconsistencies are repaired and
/// reported as [`EditOutcome::Recovered`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
	/// The tree was mutated (and the cursor possibly moved).
	Changed,
	/// Only the cursor moved.
	Moved,
	/// Nothing happened (boundary no-op or ignored input).
	Unchanged,
	/// The cursor address was inconsistent and has been reset to the start.
	Recovered,
}

impl EditOutcome {
	/// Returns `true` if the host should re-render.
	#[inline]
	pub fn needs_render(self) -> bool {
		!matches!(self, EditOutcome::Unchanged)
	}
}
