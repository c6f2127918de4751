use std::sync::Arc;

use super::*;
use crate::template::LatexTemplate;

/// Builds a fraction with the given text in each slot and returns it detached.
fn fraction(expr: &mut Expression, num: &str, den: &str) -> NodeId {
	let frac = expr.create(NodeKind::Fraction);
	let slots = expr.node(frac).unwrap().slots().to_vec();
	for (slot, text) in slots.into_iter().zip([num, den]) {
		if !text.is_empty() {
			let t = expr.create_text(text);
			expr.insert_child(slot, Child::Node(t), 0).unwrap();
		}
	}
	frac
}

#[test]
fn empty_expression_renders_empty() {
	let expr = Expression::new();
	assert!(expr.is_empty());
	assert_eq!(expr.to_latex(), "");
}

#[test]
fn create_allocates_slots_per_arity() {
	let mut expr = Expression::new();
	for (kind, arity) in [
		(NodeKind::symbol("\\pi"), 0),
		(NodeKind::Text, 1),
		(NodeKind::Sqrt, 1),
		(NodeKind::Fraction, 2),
		(NodeKind::big_operator("sum"), 3),
	] {
		let id = expr.create(kind);
		let node = expr.node(id).unwrap();
		assert_eq!(node.slots().len(), arity);
		assert_eq!(node.link(), Link::Detached);
		for &slot in node.slots() {
			assert_eq!(expr.slot(slot).unwrap().owner(), id);
		}
	}
}

#[test]
fn insert_and_remove_top_level() {
	let mut expr = Expression::new();
	let a = expr.create_text("a");
	let b = expr.create_text("b");
	let c = expr.create_text("c");
	expr.insert(a, 0).unwrap();
	expr.insert(c, 1).unwrap();
	expr.insert(b, 1).unwrap();
	assert_eq!(expr.roots(), &[a, b, c]);
	assert_eq!(expr.to_latex(), "abc");

	let removed = expr.remove_at(1).unwrap();
	assert_eq!(removed, b);
	assert_eq!(expr.node(b).unwrap().link(), Link::Detached);
	assert_eq!(expr.roots(), &[a, c]);
}

#[test]
fn out_of_range_index_is_invalid() {
	let mut expr = Expression::new();
	let a = expr.create_text("a");
	assert_eq!(expr.insert(a, 1), Err(DocumentError::InvalidIndex { index: 1, len: 0 }));
	assert_eq!(expr.remove_at(0), Err(DocumentError::InvalidIndex { index: 0, len: 0 }));

	let frac = expr.create(NodeKind::Fraction);
	let slot = expr.node(frac).unwrap().slots()[0];
	assert_eq!(
		expr.remove_child_at(slot, 0),
		Err(DocumentError::InvalidIndex { index: 0, len: 0 })
	);
	assert_eq!(
		expr.insert_child(slot, Child::Text("x".into()), 2),
		Err(DocumentError::InvalidIndex { index: 2, len: 0 })
	);
}

#[test]
fn attached_node_cannot_be_inserted_twice() {
	let mut expr = Expression::new();
	let a = expr.create_text("a");
	expr.insert(a, 0).unwrap();
	assert_eq!(expr.insert(a, 1), Err(DocumentError::AlreadyAttached(a)));

	let frac = expr.create(NodeKind::Fraction);
	let slot = expr.node(frac).unwrap().slots()[0];
	assert_eq!(expr.insert_child(slot, Child::Node(a), 0), Err(DocumentError::AlreadyAttached(a)));
}

#[test]
fn slot_children_record_parent() {
	let mut expr = Expression::new();
	let frac = fraction(&mut expr, "x", "y");
	expr.insert(frac, 0).unwrap();

	let num = expr.node(frac).unwrap().slots()[0];
	let x = expr.slot(num).unwrap().children()[0].as_node().unwrap();
	assert_eq!(expr.node(x).unwrap().parent(), Some(num));
	assert_eq!(expr.node(frac).unwrap().parent(), None);
	assert_eq!(expr.child_index(num, x), Some(0));
	assert_eq!(expr.slot_index(num), Some(0));
	assert_eq!(expr.root_of(num), Some(0));
}

#[test]
fn fraction_round_trip() {
	let mut expr = Expression::new();
	let frac = fraction(&mut expr, "x", "y");
	expr.insert(frac, 0).unwrap();
	assert_eq!(expr.to_latex(), "\\frac{x}{y}");
	assert_eq!(expr.node_latex(frac), "\\frac{x}{y}");
}

#[test]
fn join_glues_text_and_spaces_markup() {
	let mut expr = Expression::new();
	let a = expr.create_text("a");
	let b = expr.create_text("b");
	let frac = fraction(&mut expr, "x", "y");
	let alpha = expr.create(NodeKind::symbol("\\alpha"));
	let z = expr.create_text("z");
	for (i, id) in [a, b, frac, alpha, z].into_iter().enumerate() {
		expr.insert(id, i).unwrap();
	}
	assert_eq!(expr.to_latex(), "ab \\frac{x}{y} \\alpha z");
}

#[test]
fn raw_fragments_glue_inside_slots() {
	let mut expr = Expression::new();
	let sqrt = expr.create(NodeKind::Sqrt);
	let slot = expr.node(sqrt).unwrap().slots()[0];
	expr.insert_child(slot, Child::Text("1".into()), 0).unwrap();
	expr.insert_child(slot, Child::Text("2".into()), 1).unwrap();
	let pi = expr.create(NodeKind::symbol("\\pi"));
	expr.insert_child(slot, Child::Node(pi), 2).unwrap();
	expr.insert(sqrt, 0).unwrap();
	assert_eq!(expr.to_latex(), "\\sqrt{12 \\pi}");
}

#[test]
fn empty_slots_render_empty_groups() {
	let mut expr = Expression::new();
	let trig = expr.create(NodeKind::trig("sin"));
	expr.insert(trig, 0).unwrap();
	assert_eq!(expr.to_latex(), "\\sin^{}{}");
}

#[test]
fn rendering_does_not_mutate() {
	let mut expr = Expression::new();
	let frac = fraction(&mut expr, "1", "2");
	expr.insert(frac, 0).unwrap();
	let first = expr.to_latex();
	let allocated = expr.allocated_nodes();
	for _ in 0..3 {
		assert_eq!(expr.to_latex(), first);
	}
	assert_eq!(expr.allocated_nodes(), allocated);
}

#[test]
fn is_node_empty_checks_every_slot() {
	let mut expr = Expression::new();
	let empty = expr.create(NodeKind::Fraction);
	assert_eq!(expr.is_node_empty(empty), Ok(true));

	let half = fraction(&mut expr, "", "y");
	assert_eq!(expr.is_node_empty(half), Ok(false));

	let symbol = expr.create(NodeKind::symbol("\\pi"));
	assert_eq!(expr.is_node_empty(symbol), Ok(true));
}

#[test]
fn discard_frees_whole_subtree() {
	let mut expr = Expression::new();
	let outer = expr.create(NodeKind::Sqrt);
	let inner = fraction(&mut expr, "x", "y");
	let slot = expr.node(outer).unwrap().slots()[0];
	expr.insert_child(slot, Child::Node(inner), 0).unwrap();
	expr.insert(outer, 0).unwrap();
	assert_eq!(expr.allocated_nodes(), 4);

	expr.delete_at(0).unwrap();
	assert_eq!(expr.allocated_nodes(), 0);
	assert!(expr.node(inner).is_none());
	assert!(expr.slot(slot).is_none());
}

#[test]
fn discard_refuses_attached_nodes() {
	let mut expr = Expression::new();
	let a = expr.create_text("a");
	expr.insert(a, 0).unwrap();
	assert_eq!(expr.discard(a), Err(DocumentError::StillAttached(a)));
}

#[test]
fn delete_child_frees_nested_node() {
	let mut expr = Expression::new();
	let outer = expr.create(NodeKind::Frame);
	let slot = expr.node(outer).unwrap().slots()[0];
	let inner = fraction(&mut expr, "a", "b");
	expr.insert_child(slot, Child::Node(inner), 0).unwrap();
	expr.insert(outer, 0).unwrap();

	expr.delete_child_at(slot, 0).unwrap();
	assert_eq!(expr.to_latex(), "\\boxed{}");
	assert_eq!(expr.allocated_nodes(), 1);
}

#[test]
fn freed_handles_do_not_resolve() {
	let mut expr = Expression::new();
	let a = expr.create_text("a");
	expr.discard(a).unwrap();
	let b = expr.create_text("b");
	assert_ne!(a, b);
	assert!(expr.node(a).is_none());
	assert_eq!(expr.is_node_empty(a), Err(DocumentError::UnknownNode(a)));
}

#[test]
fn root_of_follows_nesting() {
	let mut expr = Expression::new();
	let first = expr.create_text("q");
	let sqrt = expr.create(NodeKind::Sqrt);
	let sqrt_slot = expr.node(sqrt).unwrap().slots()[0];
	let frac = expr.create(NodeKind::Fraction);
	let den = expr.node(frac).unwrap().slots()[1];
	expr.insert_child(sqrt_slot, Child::Node(frac), 0).unwrap();
	expr.insert(first, 0).unwrap();
	expr.insert(sqrt, 1).unwrap();

	assert_eq!(expr.root_of(den), Some(1));
	assert_eq!(expr.root_of(sqrt_slot), Some(1));

	let detached = expr.remove_at(1).unwrap();
	assert_eq!(expr.root_of(den), None);
	expr.discard(detached).unwrap();
	assert_eq!(expr.root_of(den), None);
}

#[test]
fn wrap_and_unwrap_slot_restore_tree() {
	let mut expr = Expression::new();
	let frac = fraction(&mut expr, "x", "y");
	expr.insert(frac, 0).unwrap();
	let before_slots = expr.node(frac).unwrap().slots().to_vec();
	let allocated = expr.allocated_nodes();

	let wrapper = expr.wrap_slot(frac, 1).unwrap();
	assert_eq!(expr.to_latex(), "\\frac{x}{\\boxed{y}}");
	assert_eq!(expr.slot(before_slots[1]).unwrap().owner(), wrapper);
	assert_eq!(expr.root_of(before_slots[1]), Some(0));

	expr.unwrap_slot(frac, 1).unwrap();
	assert_eq!(expr.to_latex(), "\\frac{x}{y}");
	assert_eq!(expr.node(frac).unwrap().slots(), before_slots.as_slice());
	assert_eq!(expr.slot(before_slots[1]).unwrap().owner(), frac);
	assert_eq!(expr.allocated_nodes(), allocated);
	assert!(expr.node(wrapper).is_none());
}

#[test]
fn wrap_rejects_missing_slots() {
	let mut expr = Expression::new();
	let frac = expr.create(NodeKind::Fraction);
	assert!(matches!(expr.wrap_slot(frac, 5), Err(DocumentError::BadWrap { .. })));
	assert!(matches!(expr.unwrap_slot(frac, 0), Err(DocumentError::BadWrap { .. })));
	assert!(matches!(expr.unwrap_slot(frac, 2), Err(DocumentError::BadWrap { .. })));
}

#[test]
fn unwrap_leaves_non_frame_content_alone() {
	let mut expr = Expression::new();
	let frac = fraction(&mut expr, "", "");
	expr.insert(frac, 0).unwrap();
	let num = expr.node(frac).unwrap().slots()[0];
	let sqrt = expr.create(NodeKind::Sqrt);
	expr.insert_child(num, Child::Node(sqrt), 0).unwrap();
	let radicand = expr.node(sqrt).unwrap().slots()[0];
	let x = expr.create_text("x");
	expr.insert_child(radicand, Child::Node(x), 0).unwrap();
	let allocated = expr.allocated_nodes();
	assert_eq!(expr.to_latex(), "\\frac{\\sqrt{x}}{}");

	assert_eq!(
		expr.unwrap_slot(frac, 0),
		Err(DocumentError::BadWrap {
			node: frac,
			slot: 0,
			action: "unwrapped",
		})
	);
	assert_eq!(expr.to_latex(), "\\frac{\\sqrt{x}}{}");
	assert_eq!(expr.allocated_nodes(), allocated);
	assert_eq!(expr.node(sqrt).unwrap().parent(), Some(num));
}

#[test]
fn custom_template_node() {
	let mut expr = Expression::new();
	let template = Arc::new(LatexTemplate::parse("\\binom{#1}{#2}").unwrap());
	let binom = expr.create(NodeKind::Custom(template));
	let slots = expr.node(binom).unwrap().slots().to_vec();
	assert_eq!(slots.len(), 2);
	expr.insert_child(slots[0], Child::Text("n".into()), 0).unwrap();
	expr.insert_child(slots[1], Child::Text("k".into()), 0).unwrap();
	expr.insert(binom, 0).unwrap();
	assert_eq!(expr.to_latex(), "\\binom{n}{k}");
}

#[test]
fn clear_drops_everything() {
	let mut expr = Expression::new();
	let frac = fraction(&mut expr, "x", "y");
	expr.insert(frac, 0).unwrap();
	expr.clear();
	assert!(expr.is_empty());
	assert_eq!(expr.allocated_nodes(), 0);
	assert_eq!(expr.to_latex(), "");
}

mod properties {
	use proptest::prelude::*;

	use super::*;

	#[derive(Debug, Clone)]
	enum Op {
		Insert(usize, char),
		Delete(usize),
	}

	fn op() -> impl Strategy<Value = Op> {
		prop_oneof![
			(any::<usize>(), proptest::char::range('a', 'z')).prop_map(|(i, c)| Op::Insert(i, c)),
			any::<usize>().prop_map(Op::Delete),
		]
	}

	proptest! {
		#[test]
		fn arena_tracks_a_plain_sequence(ops in proptest::collection::vec(op(), 0..40)) {
			let mut expr = Expression::new();
			let mut model: Vec<char> = Vec::new();
			for op in ops {
				match op {
					Op::Insert(i, c) => {
						let i = i % (model.len() + 1);
						let id = expr.create_text(c.to_string());
						expr.insert(id, i).unwrap();
						model.insert(i, c);
					}
					Op::Delete(i) if !model.is_empty() => {
						let i = i % model.len();
						expr.delete_at(i).unwrap();
						model.remove(i);
					}
					Op::Delete(_) => {}
				}
			}
			prop_assert_eq!(expr.to_latex(), model.iter().collect::<String>());
			prop_assert_eq!(expr.allocated_nodes(), model.len());
		}
	}
}
