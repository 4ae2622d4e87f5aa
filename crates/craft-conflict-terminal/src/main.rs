use craft_conflict::RecipeSet;
use craft_conflict::SimpleRecipe;
use craft_conflict::solver;

fn main() {
	env_logger::init();

	let mut opts;

	/* Parse console input */
	let parsed_options = {
		let args: Vec<String> = std::env::args().collect();

		opts = getopts::Options::new();
		opts.optflag("h", "help",      "Show help");
		opts.optflag("v", "verbose",   "Increased verbosity");
		opts.optopt( "m", "mandatory", "Id of the recipe that must stay in the result", "ID");
		opts.optopt( "s", "solver",    "Solver to use: greedy, exact or parallel (default exact)", "SOLVER");

		let parsed_options = match opts.parse(&args[1..]) {
			Ok(m)  => { m }
			Err(e) => { println!("Unable to parse options: {}", e); return }
		};

		if parsed_options.opt_present("h") || parsed_options.free.is_empty() {
			eprintln!("{}", opts.usage("Usage: craft-conflict-terminal [options] RECIPES_JSON"));
			return;
		}

		parsed_options
	};

	if let Err(e) = run(&parsed_options) {
		log::error!("{}", e);
	}
}

fn run(parsed_options: &getopts::Matches) -> Result<(), Error> {
	let universe = SimpleRecipe::load_from_json_file(&parsed_options.free[0])?;

	let mandatory_id = parsed_options.opt_str("m").ok_or(Error::MissingArgument)?;
	let mandatory = universe.iter()
		.find(|recipe| recipe.id() == mandatory_id)
		.ok_or_else(|| Error::UnknownRecipe(mandatory_id.clone()))?
		.clone();

	/* The whole input file acts as the global scope. */
	let global_scope: RecipeSet<SimpleRecipe> = universe.iter().cloned().collect();
	let candidates: Vec<SimpleRecipe> = universe.iter()
		.filter(|recipe| **recipe != mandatory)
		.cloned()
		.collect();

	let solver_name = parsed_options.opt_str("s").unwrap_or_else(|| "exact".to_owned());
	log::info!("Running {} solver over {} candidates", solver_name, candidates.len());
	let resolution = match solver_name.as_str() {
		"greedy"   => solver::solve_greedy(&mandatory, &universe, &global_scope),
		"exact"    => solver::solve_exact(&mandatory, &candidates, &global_scope),
		"parallel" => solver::solve_exact_parallel(&mandatory, &candidates, &global_scope),
		other => return Err(Error::UnknownSolver(other.to_owned())),
	};

	if !resolution.is_safe() {
		println!("Mandatory recipe [{}] conflicts with the scope on its own.", mandatory.id());
	}

	let mut ids: Vec<&str> = resolution.set().iter().map(|recipe| recipe.id()).collect();
	ids.sort_unstable();
	println!("Conflict free set ({} recipes):", ids.len());
	for id in ids {
		println!("\t{}", id);
	}

	Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("craft-conflict error: {0}")]
	Lib(#[from] craft_conflict::Error),
	#[error("Missing argument")]
	MissingArgument,
	#[error("No recipe with id [{0}] in the input file")]
	UnknownRecipe(String),
	#[error("Unknown solver [{0}]")]
	UnknownSolver(String),
}
