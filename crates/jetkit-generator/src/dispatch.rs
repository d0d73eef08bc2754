//! Entry points the CLI calls to scaffold and build.

use crate::env::GeneratorEnv;
use jetkit_core::ProjectPaths;
use jetkit_types::{options, JetkitError, Options, Outcome, Tooling};
use std::sync::Arc;
use tracing::error;

/// Generator used for hybrid applications.
pub const HYBRID_GENERATOR: &str = "hybrid";

/// Generator used for web applications.
pub const APP_GENERATOR: &str = "app";

/// Dispatches scaffolding to generators and builds to the tooling.
pub struct Dispatcher {
    env: GeneratorEnv,
    tooling: Arc<dyn Tooling>,
    paths: ProjectPaths,
}

impl Dispatcher {
    /// Create a dispatcher for the project at `paths`.
    pub fn new(env: GeneratorEnv, tooling: Arc<dyn Tooling>, paths: ProjectPaths) -> Self {
        Self { env, tooling, paths }
    }

    /// Scaffold a new application.
    ///
    /// A `hybrid` option selects the hybrid generator whatever its value,
    /// anything else the app generator. The selecting flag (`hybrid`, or `web`
    /// for apps) is not forwarded.
    pub async fn create(&self, parameter: Option<&str>, mut options: Options) -> Outcome {
        let generator = if options::take_flag(&mut options, "hybrid") {
            HYBRID_GENERATOR
        } else {
            options.shift_remove("web");
            APP_GENERATOR
        };

        self.env.lookup_and_run(generator, parameter, &options).await
    }

    /// Run a generator of the namespace by name.
    pub async fn delegate_to_generator(
        &self,
        generator: &str,
        parameter: Option<&str>,
        options: Options,
    ) -> Outcome {
        self.env.lookup_and_run(generator, parameter, &options).await
    }

    /// Forward a build task to the tooling.
    ///
    /// The platform must be given as a positional parameter; a `platform`
    /// option is rejected. Outside a project root nothing is run.
    pub async fn run_tooling(
        &self,
        task: &str,
        scope: &str,
        parameters: &[String],
        options: Options,
    ) -> Outcome {
        if options.contains_key("platform") {
            error!(
                "Passing platform as an option is not supported, use 'jetkit {} {} <platform>'",
                task, scope
            );
            return Outcome::Failed;
        }

        if !self.paths.is_project_root().await {
            let err = JetkitError::NotAProject(format!(
                "{} is not a project root, {} is missing",
                self.paths.root().display(),
                self.paths.app_config().display()
            ));
            error!("{}", err);
            return Outcome::Failed;
        }

        match self.tooling.dispatch(task, scope, parameters, &options).await {
            Ok(()) => Outcome::Succeeded,
            Err(e) => {
                error!("{}", e);
                Outcome::Failed
            }
        }
    }
}
