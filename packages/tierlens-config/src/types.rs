use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
	pub service: Service,
	pub storage: Storage,
	#[serde(default)]
	pub query: Query,
}

#[derive(Debug, Deserialize)]
pub struct Service {
	pub http_bind: String,
	/// Blank or omitted means `info`.
	#[serde(default)]
	pub log_level: String,
}

#[derive(Debug, Deserialize)]
pub struct Storage {
	pub postgres: Postgres,
}

#[derive(Debug, Deserialize)]
pub struct Postgres {
	pub dsn: String,
	pub pool_max_conns: u32,
	/// Optional. Upper bound on waiting for a pooled connection; unset leaves the driver default.
	pub acquire_timeout_ms: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub struct Query {
	#[serde(default = "default_limit")]
	pub default_limit: u64,
	/// Optional. When set, list requests asking for more than this many records are rejected.
	pub max_limit: Option<u64>,
}
impl Default for Query {
	fn default() -> Self {
		Self { default_limit: default_limit(), max_limit: None }
	}
}

fn default_limit() -> u64 {
	100
}
