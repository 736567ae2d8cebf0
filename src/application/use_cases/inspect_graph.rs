use crate::application::dto::InspectResponse;
use crate::ports::inbound::GraphViewPort;
use crate::ports::outbound::ProgressReporter;
use crate::resource_graph::domain::{LoadState, RootCoordinates};
use crate::resource_graph::services::IdentityExtractor;
use std::collections::HashMap;
use tracing::debug;

/// InspectGraphUseCase - resolves the resource forest of one entity
///
/// Reads the root coordinates from the entity annotations, loads them into
/// the graph view and reports progress along the way.
///
/// # Type Parameters
/// * `V` - GraphViewPort implementation
/// * `PR` - ProgressReporter implementation
pub struct InspectGraphUseCase<V, PR> {
    view: V,
    progress_reporter: PR,
}

impl<V, PR> InspectGraphUseCase<V, PR>
where
    V: GraphViewPort,
    PR: ProgressReporter,
{
    pub fn new(view: V, progress_reporter: PR) -> Self {
        Self {
            view,
            progress_reporter,
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub async fn execute(&self, annotations: &HashMap<String, String>) -> InspectResponse {
        let (roots, missing_coordinates) = IdentityExtractor::extract_with_issues(annotations);
        for issue in &missing_coordinates {
            debug!("{}", issue);
        }
        if roots.is_empty() {
            self.progress_reporter.report_error(
                "⚠️  Warning: The entity carries neither claim nor composite coordinates.",
            );
        }

        self.progress_reporter
            .start(&format!("🔍 Resolving {}...", Self::describe(&roots)));
        let outcome = self.view.load(&roots).await;

        for issue in &outcome.issues {
            self.progress_reporter
                .report_error(&format!("⚠️  Warning: {}", issue));
        }
        match outcome.state {
            LoadState::Empty => self
                .progress_reporter
                .report_completion("✅ Resolution complete: no resources found"),
            _ => self.progress_reporter.report_completion(&format!(
                "✅ Resolution complete: {} root(s), {} visible resource(s)",
                outcome.roots, outcome.visible
            )),
        }

        InspectResponse {
            roots,
            missing_coordinates,
            outcome,
            snapshot: self.view.snapshot(),
        }
    }

    fn describe(roots: &RootCoordinates) -> &'static str {
        match (roots.claim.is_some(), roots.composite.is_some()) {
            (true, true) => "claim and composite resource",
            (true, false) => "claim",
            (false, true) => "composite resource",
            (false, false) => "nothing",
        }
    }
}
