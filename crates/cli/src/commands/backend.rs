//! Backend Run Command

use anyhow::{Context, Result};
use clap::Args;
use opi_storage_common::backend::resolve_storage_host;
use opi_storage_common::client::connect_channel;
use opi_storage_common::{Backend, BackendPlan, LifecycleSummary, ResourceKind};
use serde::Serialize;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::config::ExerciserConfig;
use crate::output::{print_error, print_list, print_success, OutputFormat, TableDisplay};

#[derive(Args, Debug, Default)]
pub struct BackendArgs {
    /// Kinds to exercise (nvme, null, aio)
    #[arg(long, value_delimiter = ',')]
    pub kinds: Option<Vec<ResourceKind>>,

    /// Run the kinds concurrently
    #[arg(long)]
    pub parallel: bool,

    /// Storage target host, resolved into the remote controller address
    #[arg(long)]
    pub storage_host: Option<String>,
}

/// One row of the run report
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct RunRow<'a> {
    pub summary: &'a LifecycleSummary,
}

impl TableDisplay for RunRow<'_> {
    fn headers() -> Vec<&'static str> {
        vec!["Service", "ID", "State", "Steps", "Listed", "Read Ops", "Error"]
    }

    fn row(&self) -> Vec<String> {
        let s = self.summary;
        vec![
            s.kind.service_name().to_string(),
            s.id.clone(),
            format!("{:?}", s.state),
            s.completed.len().to_string(),
            s.listed_count.map(|n| n.to_string()).unwrap_or_default(),
            s.stats
                .map(|st| st.read_ops_count.to_string())
                .unwrap_or_default(),
            s.error.clone().unwrap_or_default(),
        ]
    }
}

/// Merge command line flags into the configured plan.
pub fn build_plan(args: BackendArgs, config: &ExerciserConfig) -> (BackendPlan, Option<String>) {
    let mut plan = config.backend.clone();
    if let Some(kinds) = args.kinds {
        plan.kinds = kinds;
    }
    if args.parallel {
        plan.parallel = true;
    }
    let host = args.storage_host.or_else(|| config.storage_host.clone());
    (plan, host)
}

pub async fn execute(
    args: BackendArgs,
    endpoint: &str,
    config: &ExerciserConfig,
    format: OutputFormat,
) -> Result<()> {
    let (mut plan, host) = build_plan(args, config);

    if let Some(host) = host {
        let addr = resolve_storage_host(&host)
            .await
            .with_context(|| format!("resolving storage host {}", host))?;
        info!("Storage host {} resolved to {}", host, addr);
        plan.set_storage_address(addr);
    }

    let channel = connect_channel(endpoint)
        .await
        .with_context(|| format!("connecting to {}", endpoint))?;
    let mut backend = Backend::from_channel(channel);

    let cancel = CancellationToken::new();
    let on_signal = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupted, cancelling backend run");
            on_signal.cancel();
        }
    });

    match backend.run(&plan, &cancel).await {
        Ok(report) => {
            let rows: Vec<RunRow> = report.runs.iter().map(|summary| RunRow { summary }).collect();
            print_list(&rows, format);
            print_success(&format!("Backend run passed for {} service(s)", rows.len()));
            Ok(())
        }
        Err(err) => {
            let rows: Vec<RunRow> = err
                .report
                .runs
                .iter()
                .map(|summary| RunRow { summary })
                .collect();
            print_list(&rows, format);
            print_error(&err.to_string());
            Err(err.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_config() {
        let config = ExerciserConfig {
            storage_host: Some("spdk".to_string()),
            ..Default::default()
        };
        let args = BackendArgs {
            kinds: Some(vec![ResourceKind::NullDevice]),
            parallel: true,
            storage_host: None,
        };

        let (plan, host) = build_plan(args, &config);
        assert_eq!(plan.kinds, vec![ResourceKind::NullDevice]);
        assert!(plan.parallel);
        assert_eq!(host.as_deref(), Some("spdk"));
    }

    #[test]
    fn test_defaults_run_every_kind() {
        let (plan, host) = build_plan(BackendArgs::default(), &ExerciserConfig::default());
        assert_eq!(plan.kinds, ResourceKind::ALL.to_vec());
        assert!(!plan.parallel);
        assert!(host.is_none());
    }
}
