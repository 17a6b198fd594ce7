#![deny(missing_docs)]
//! Standardized initialization for lambda entrypoint binaries.
//! Every binary calls [Entrypoint::init] before doing anything else so tracing output is
//! consistent between functions.

mod environment;

pub use environment::Environment;

use tracing_subscriber::EnvFilter;

/// unit struct which defines the behaviour for instantiation
#[derive(Debug)]
pub struct Entrypoint {
    env: Environment,
}

impl Default for Entrypoint {
    fn default() -> Self {
        Entrypoint {
            env: Environment::new_or_prod(),
        }
    }
}

/// sentinel struct which guarantees that we called [Entrypoint::init]
#[derive(Debug)]
pub struct InitializedEntrypoint(Environment);

impl InitializedEntrypoint {
    /// the environment the binary was initialized for
    pub fn environment(&self) -> Environment {
        self.0
    }
}

impl Entrypoint {
    /// consume self, initialize this binary, and return a proof that it was initialized [InitializedEntrypoint]
    pub fn init(self) -> InitializedEntrypoint {
        dotenv::dotenv().ok();
        std::panic::set_hook(Box::new(tracing_panic::panic_hook));

        match self.env {
            Environment::Local => {
                tracing_subscriber::fmt()
                    .with_ansi(true)
                    .with_env_filter(EnvFilter::from_default_env())
                    .with_file(true)
                    .with_line_number(true)
                    .pretty()
                    .init();
            }
            Environment::Production | Environment::Develop => {
                tracing_subscriber::fmt()
                    .with_ansi(false)
                    .with_env_filter(EnvFilter::from_default_env())
                    .with_file(true)
                    .with_line_number(true)
                    .json()
                    .with_current_span(true)
                    .with_span_list(false)
                    .flatten_event(true)
                    .init();
            }
        }

        tracing::trace!(environment=%self.env, "initialized entrypoint");

        InitializedEntrypoint(self.env)
    }
}
