// Copyright 2023 Ulvetanna Inc.

use crate::env::boolean_env_flag_set;

/// Set to a truthy value to log a line with timings whenever a span closes.
pub const TRACE_SPANS_VAR: &str = "GF2POLY_TRACE_SPANS";

/// Installs a global subscriber filtered by `RUST_LOG` (default `info`).
///
/// Calling it more than once is harmless, only the first call takes effect.
pub fn init_tracing() {
	use tracing_subscriber::{
		fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
	};

	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
	let span_events = if boolean_env_flag_set(TRACE_SPANS_VAR) {
		FmtSpan::CLOSE
	} else {
		FmtSpan::NONE
	};

	let _ = tracing_subscriber::registry()
		.with(filter)
		.with(tracing_subscriber::fmt::layer().with_span_events(span_events))
		.try_init();
}
