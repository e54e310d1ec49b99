// Copyright 2024 Irreducible Inc.

use std::sync::OnceLock;

use crate::env::usize_env_var;

/// In case when number of threads is set to 1, use rayon thread pool with
/// `use_current_thread` set to true. The performance is then almost the same as if rayon
/// wasn't used at all, and profiles of the differential checks stay readable.
///
/// NOTE: rayon doesn't allow initializing global thread pool several times, so
/// in case when it was initialized before this function returns an error.
/// The function returns reference to the result because `ThreadPoolBuildError`
/// doesn't implement `Clone`.
pub fn adjust_thread_pool() -> &'static Result<(), rayon::ThreadPoolBuildError> {
	static ONCE_GUARD: OnceLock<Result<(), rayon::ThreadPoolBuildError>> = OnceLock::new();

	ONCE_GUARD.get_or_init(|| match usize_env_var("RAYON_NUM_THREADS") {
		Ok(Some(1)) => rayon::ThreadPoolBuilder::new()
			.num_threads(1)
			.use_current_thread()
			.build_global(),
		_ => Ok(()),
	})
}

/// Number of independent work items to hand to each rayon task so that `total` items are
/// spread over the current pool without creating tiny tasks.
pub fn chunk_size(total: usize) -> usize {
	total.div_ceil(rayon::current_num_threads()).max(1)
}
