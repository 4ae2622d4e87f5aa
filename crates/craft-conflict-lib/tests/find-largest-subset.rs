use craft_conflict::conflict::is_set_safely_coexistent;
use craft_conflict::solver::solve_exact;
use craft_conflict::solver::solve_greedy;
use craft_conflict_test_utils::recipe;
use craft_conflict_test_utils::universe;

#[test]
fn coexisting_universe_is_kept_whole() {
	let mandatory = recipe("smelt_iron", &[("item:minecraft:iron_ore", 1)]);
	let wire = recipe("copper_wire", &[("item:minecraft:copper_ingot", 2)]);
	let alloy = recipe("rose_gold", &[("item:minecraft:copper_ingot", 1), ("item:minecraft:gold_ingot", 1)]);
	let scope = universe(&[mandatory.clone(), wire.clone(), alloy.clone()]);
	let candidates = vec![wire, alloy];

	let resolution = solve_exact(&mandatory, &candidates, &scope);

	assert!(resolution.is_safe());
	assert_eq!(resolution.set().len(), 3);
	assert!(resolution.set().contains(&mandatory));
	assert!(is_set_safely_coexistent(resolution.set(), &scope));
}

#[test]
fn mandatory_with_pairwise_subset_in_scope_is_degenerate() {
	/* The candidate's requirements are contained in the mandatory recipe's,
	   so even the mandatory singleton is ambiguous within this scope. */
	let mandatory = recipe("double_smelt", &[("item:minecraft:iron_ore", 2)]);
	let smaller = recipe("single_smelt", &[("item:minecraft:iron_ore", 1)]);
	let scope = universe(&[mandatory.clone(), smaller.clone()]);

	let resolution = solve_exact(&mandatory, &[smaller.clone()], &scope);

	assert!(!resolution.is_safe());
	assert_eq!(resolution.set().len(), 1);
	assert!(resolution.set().contains(&mandatory));
	assert!(!resolution.set().contains(&smaller));
}

#[test]
fn candidate_subsumed_by_sibling_is_dropped() {
	/* `large` cannot be accepted: doing so would make `small` (still in
	   scope) coverable. `small` alone is fine. */
	let mandatory = recipe("press_plate", &[("item:minecraft:iron_ingot", 1)]);
	let large = recipe("large_coil", &[("item:minecraft:copper_ingot", 2), ("item:minecraft:tin_ingot", 1)]);
	let small = recipe("small_coil", &[("item:minecraft:copper_ingot", 1), ("item:minecraft:tin_ingot", 1)]);
	let scope = universe(&[mandatory.clone(), large.clone(), small.clone()]);
	let candidates = vec![large.clone(), small.clone()];

	let resolution = solve_exact(&mandatory, &candidates, &scope);

	assert!(resolution.is_safe());
	assert_eq!(resolution.set().len(), 2);
	assert!(resolution.set().contains(&mandatory));
	assert!(resolution.set().contains(&small));
	assert!(is_set_safely_coexistent(resolution.set(), &scope));
}

#[test]
fn empty_candidate_pool_returns_the_singleton() {
	let mandatory = recipe("smelt_iron", &[("item:minecraft:iron_ore", 1)]);
	let scope = universe(&[mandatory.clone()]);

	let resolution = solve_exact(&mandatory, &[], &scope);

	assert!(resolution.is_safe());
	assert_eq!(resolution.set().len(), 1);
	assert!(resolution.set().contains(&mandatory));
}

#[test]
fn greedy_never_beats_exact_and_always_keeps_mandatory() {
	let mandatory = recipe("press_plate", &[("item:minecraft:iron_ingot", 1)]);
	let recipes = vec![
		mandatory.clone(),
		recipe("small_coil", &[("item:minecraft:copper_ingot", 1), ("item:minecraft:tin_ingot", 1)]),
		recipe("large_coil", &[("item:minecraft:copper_ingot", 3), ("item:minecraft:tin_ingot", 3), ("item:minecraft:gold_ingot", 1)]),
		recipe("mix_mortar", &[("item:minecraft:sand", 4), ("fluid:minecraft:water", 1)]),
		recipe("wash_gravel", &[("fluid:minecraft:water", 2)]),
	];
	let scope = universe(&recipes);
	let candidates: Vec<_> = recipes[1..].to_vec();

	let greedy = solve_greedy(&mandatory, &recipes, &scope);
	let exact = solve_exact(&mandatory, &candidates, &scope);

	assert!(greedy.set().contains(&mandatory));
	assert!(exact.set().contains(&mandatory));
	assert!(exact.set().len() >= greedy.set().len());
	if greedy.is_safe() {
		assert!(is_set_safely_coexistent(greedy.set(), &scope));
	}
	if exact.is_safe() {
		assert!(is_set_safely_coexistent(exact.set(), &scope));
	}
}

#[test]
fn greedy_degenerate_mandatory_is_reported() {
	let mandatory = recipe("double_smelt", &[("item:minecraft:iron_ore", 2)]);
	let smaller = recipe("single_smelt", &[("item:minecraft:iron_ore", 1)]);
	let recipes = vec![mandatory.clone(), smaller];
	let scope = universe(&recipes);

	let resolution = solve_greedy(&mandatory, &recipes, &scope);

	assert!(!resolution.is_safe());
	assert_eq!(resolution.set().len(), 1);
	assert!(resolution.set().contains(&mandatory));
}
