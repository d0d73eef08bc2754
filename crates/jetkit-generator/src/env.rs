//! Generator environment context.

use jetkit_types::{GeneratorRuntime, JetkitError, Options, Outcome, Result};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

/// Receives every error raised while looking up or running generators.
pub type ErrorSink = Arc<dyn Fn(&JetkitError) + Send + Sync>;

/// Generator context for one CLI invocation.
///
/// Errors are never returned to the caller; they go to the error sink chosen
/// at construction (logging by default) and the run reports `Outcome::Failed`.
pub struct GeneratorEnv {
    runtime: Arc<dyn GeneratorRuntime>,
    namespace: String,
    on_error: ErrorSink,
}

impl fmt::Debug for GeneratorEnv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeneratorEnv")
            .field("namespace", &self.namespace)
            .finish_non_exhaustive()
    }
}

impl GeneratorEnv {
    /// Create a context that logs errors through `tracing`.
    pub fn new(runtime: Arc<dyn GeneratorRuntime>, namespace: impl Into<String>) -> Self {
        Self {
            runtime,
            namespace: namespace.into(),
            on_error: Arc::new(|e: &JetkitError| tracing::error!("{}", e)),
        }
    }

    /// Route errors to `sink` instead of the log.
    pub fn with_error_sink(mut self, sink: impl Fn(&JetkitError) + Send + Sync + 'static) -> Self {
        self.on_error = Arc::new(sink);
        self
    }

    /// Fully qualified identifier, `<namespace>:<generator>`.
    pub fn identifier(&self, generator: &str) -> String {
        format!("{}:{}", self.namespace, generator)
    }

    /// Command string for a run: the identifier, then the parameter if any.
    pub fn command(&self, generator: &str, parameter: Option<&str>) -> String {
        let identifier = self.identifier(generator);
        match parameter.map(str::trim).filter(|p| !p.is_empty()) {
            Some(parameter) => [identifier.as_str(), parameter].join(" "),
            None => identifier,
        }
    }

    /// Send an error to the error sink.
    pub fn report(&self, err: &JetkitError) {
        (self.on_error)(err);
    }

    /// Discover installed generators.
    pub async fn lookup(&self) -> Result<Vec<String>> {
        let found = self.runtime.lookup().await?;
        debug!("found {} generators", found.len());
        Ok(found)
    }

    /// Look up generators, then run `generator` with `parameter` and `options`.
    pub async fn lookup_and_run(
        &self,
        generator: &str,
        parameter: Option<&str>,
        options: &Options,
    ) -> Outcome {
        let available = match self.lookup().await {
            Ok(available) => available,
            Err(e) => {
                self.report(&e);
                return Outcome::Failed;
            }
        };

        let identifier = self.identifier(generator);
        if !available.is_empty() && !available.contains(&identifier) {
            warn!("Generator {} was not found by lookup, trying it anyway", identifier);
        }

        self.run(generator, parameter, options).await
    }

    /// Run `generator` by name.
    pub async fn run(&self, generator: &str, parameter: Option<&str>, options: &Options) -> Outcome {
        let command = self.command(generator, parameter);
        debug!("running generator `{}`", command);

        match self.runtime.run(&command, options).await {
            Ok(()) => Outcome::Succeeded,
            Err(e) => {
                self.report(&e);
                Outcome::Failed
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Runtime that records runs and can fail either phase.
    #[derive(Default)]
    pub struct RecordingRuntime {
        pub listing: Vec<String>,
        pub runs: Mutex<Vec<(String, Options)>>,
        pub fail_lookup: bool,
        pub fail_run: bool,
    }

    #[async_trait]
    impl GeneratorRuntime for RecordingRuntime {
        async fn lookup(&self) -> Result<Vec<String>> {
            if self.fail_lookup {
                return Err(JetkitError::Generator("yo is not installed".to_string()));
            }
            Ok(self.listing.clone())
        }

        async fn run(&self, command: &str, options: &Options) -> Result<()> {
            self.runs
                .lock()
                .unwrap()
                .push((command.to_string(), options.clone()));
            if self.fail_run {
                return Err(JetkitError::Generator(format!("{} crashed", command)));
            }
            Ok(())
        }
    }

    pub fn collecting_env(runtime: Arc<RecordingRuntime>) -> (GeneratorEnv, Arc<Mutex<Vec<String>>>) {
        let errors = Arc::new(Mutex::new(Vec::new()));
        let sink = errors.clone();
        let env = GeneratorEnv::new(runtime, "@oracle/oraclejet")
            .with_error_sink(move |e| sink.lock().unwrap().push(e.to_string()));
        (env, errors)
    }

    #[test]
    fn test_command_string() {
        let runtime = Arc::new(RecordingRuntime::default());
        let env = GeneratorEnv::new(runtime, "@oracle/oraclejet");

        assert_eq!(env.command("app", None), "@oracle/oraclejet:app");
        assert_eq!(env.command("app", Some("myApp")), "@oracle/oraclejet:app myApp");
        assert_eq!(env.command("hybrid", Some("  ")), "@oracle/oraclejet:hybrid");
    }

    #[tokio::test]
    async fn test_run_errors_go_to_sink() {
        let runtime = Arc::new(RecordingRuntime {
            fail_run: true,
            ..Default::default()
        });
        let (env, errors) = collecting_env(runtime.clone());

        let outcome = env.lookup_and_run("app", Some("demo"), &Options::new()).await;

        assert_eq!(outcome, Outcome::Failed);
        assert_eq!(
            *errors.lock().unwrap(),
            vec!["Generator error: @oracle/oraclejet:app demo crashed"]
        );
    }

    #[test]
    fn test_lookup_failure_skips_run() {
        let runtime = Arc::new(RecordingRuntime {
            fail_lookup: true,
            ..Default::default()
        });
        let (env, errors) = collecting_env(runtime.clone());

        let outcome = tokio_test::block_on(env.lookup_and_run("app", None, &Options::new()));

        assert_eq!(outcome, Outcome::Failed);
        assert!(runtime.runs.lock().unwrap().is_empty());
        assert_eq!(errors.lock().unwrap().len(), 1);
    }
}
