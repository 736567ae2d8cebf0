mod cli;

use chrono::Utc;
use cli::Args;
use std::io::IsTerminal;
use std::path::Path;
use std::process;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use xpgraph::adapters::outbound::console::StderrProgressReporter;
use xpgraph::adapters::outbound::filesystem::FileSystemReader;
use xpgraph::adapters::outbound::network::KubeProxyClient;
use xpgraph::adapters::outbound::permissions::StaticPermissionGate;
use xpgraph::application::dto::InspectResponse;
use xpgraph::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use xpgraph::application::read_models::{EventLogView, ForestReadModelBuilder};
use xpgraph::application::use_cases::{FetchEventsUseCase, InspectGraphUseCase};
use xpgraph::application::view::GraphView;
use xpgraph::config::{discover_config, load_config_from_path, ConfigFile};
use xpgraph::ports::outbound::EntityReader;
use xpgraph::resource_graph::domain::{KindClass, ResourceNode};
use xpgraph::shared::error::ExitCode;
use xpgraph::shared::Result;

#[tokio::main]
async fn main() {
    let args = Args::parse_args();
    init_logging(args.verbose);

    if let Err(e) = run(args).await {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

/// Diagnostics go to stderr; `RUST_LOG` wins unless `--verbose` is given.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("xpgraph=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}

async fn run(args: Args) -> Result<()> {
    let config = load_config(args.config.as_deref())?.with_proxy_url(args.proxy_url.clone())?;
    let annotations = FileSystemReader::new().read_annotations(&args.entity)?;

    // Create adapters (Dependency Injection)
    let client = Arc::new(KubeProxyClient::new(config.proxy_settings()?)?);
    let gate = StaticPermissionGate::new(
        config.enforces_permissions(),
        config.resource_permissions(),
    );
    let view = GraphView::new(Arc::clone(&client), gate).with_auto_expand(!args.collapsed);
    let use_case = InspectGraphUseCase::new(view, StderrProgressReporter::new());

    let response = use_case.execute(&annotations).await;

    let now = Utc::now();
    let mut model = ForestReadModelBuilder::build(&response.snapshot, now);
    if let Some(name) = args.events.as_deref() {
        let events = FetchEventsUseCase::new(client);
        model.events = Some(event_log(&events, &response, name, now).await?);
    }

    eprintln!("{}", FormatterFactory::progress_message(args.format));
    let formatter = FormatterFactory::create(args.format, use_color(&args));
    let formatted_output = formatter.format(&model)?;

    let presenter = PresenterFactory::create(PresenterType::from_output(args.output));
    presenter.present(&formatted_output)?;

    Ok(())
}

fn load_config(explicit: Option<&Path>) -> Result<ConfigFile> {
    let config = match explicit {
        Some(path) => Some(load_config_from_path(path)?),
        None => discover_config(&std::env::current_dir()?)?,
    };
    Ok(config.unwrap_or_default())
}

async fn event_log(
    events: &FetchEventsUseCase<KubeProxyClient>,
    response: &InspectResponse,
    name: &str,
    now: chrono::DateTime<Utc>,
) -> Result<EventLogView> {
    let Some(node) = response.snapshot.find_by_name(name) else {
        anyhow::bail!(
            "No resource named '{}' in the resolved tree.\n\n💡 Hint: Use a name from the NAME column of the tree output.",
            name
        );
    };
    let Some(cluster) = events_cluster(response, node) else {
        anyhow::bail!("No cluster is known for resource '{}'", name);
    };

    let items = events.execute(cluster, node).await;
    Ok(ForestReadModelBuilder::build_event_log(node, &items, now))
}

/// The claim lives on its own cluster; everything else on the cluster its
/// composite was resolved against.
fn events_cluster<'a>(response: &'a InspectResponse, node: &ResourceNode) -> Option<&'a str> {
    match node.kind_class {
        KindClass::Claim => response.roots.claim.as_ref().map(|c| c.cluster.as_str()),
        _ => response.snapshot.cluster.as_deref(),
    }
}

fn use_color(args: &Args) -> bool {
    !args.no_color
        && args.output.is_none()
        && std::env::var_os("NO_COLOR").is_none()
        && std::io::stdout().is_terminal()
}
