use crate::areas::destination::Destination;
use crate::areas::folder::Folder;
use crate::artifacts::compare::comparison::FolderComparison;
use crate::artifacts::compare::pipeline::DiffPipeline;
use crate::artifacts::compare::result::{ComparisonResult, PairOutcome};
use crate::artifacts::diff::hunk::IntralineOptions;
use crate::artifacts::render::document::RenderOptions;
use crate::artifacts::render::navigation::NavigationOverlay;
use anyhow::Context;
use colored::Colorize;
use derive_new::new;
use std::cell::{RefCell, RefMut};
use std::ffi::OsString;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

#[derive(Debug, Clone, new)]
pub struct CompareOptions {
    /// Upper bound on file pairs processed at the same time
    pub jobs: usize,
    pub render: RenderOptions,
    pub intraline: IntralineOptions,
    pub navigation: Option<NavigationOverlay>,
}

impl Default for CompareOptions {
    fn default() -> Self {
        let jobs = std::thread::available_parallelism()
            .map(|jobs| jobs.get())
            .unwrap_or(1);

        CompareOptions::new(
            jobs,
            RenderOptions::default(),
            IntralineOptions::default(),
            Some(NavigationOverlay::default()),
        )
    }
}

struct Workload {
    comparison: FolderComparison,
    destination: Destination,
    pipeline: DiffPipeline,
}

pub struct Comparator {
    options: CompareOptions,
    writer: RefCell<Box<dyn std::io::Write>>,
}

impl Comparator {
    pub fn new(options: CompareOptions, writer: Box<dyn std::io::Write>) -> Self {
        Comparator {
            options,
            writer: RefCell::new(writer),
        }
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub async fn compare(
        &self,
        left: &Path,
        right: &Path,
        output: &Path,
    ) -> anyhow::Result<ComparisonResult> {
        let comparison = FolderComparison::new(Folder::open(left)?, Folder::open(right)?)?;
        let destination = Destination::create(output)?;
        let pipeline = DiffPipeline::new(
            self.options.render.clone(),
            self.options.intraline.clone(),
            self.options.navigation.clone(),
        )?;

        let workload = Arc::new(Workload {
            comparison,
            destination,
            pipeline,
        });
        let outcomes = self.compare_entries(workload.clone()).await?;
        let result = ComparisonResult::new(&workload.comparison, outcomes);

        self.report(&result)?;

        Ok(result)
    }

    async fn compare_entries(
        &self,
        workload: Arc<Workload>,
    ) -> anyhow::Result<Vec<(OsString, PairOutcome)>> {
        let semaphore = Arc::new(Semaphore::new(self.options.jobs.max(1)));
        let mut tasks = JoinSet::new();

        for name in workload.comparison.common().iter().cloned() {
            let permit = semaphore
                .clone()
                .acquire_owned()
                .await
                .context("Worker pool closed before all pairs were compared")?;
            let workload = workload.clone();

            tasks.spawn_blocking(move || {
                let _permit = permit;
                let outcome = workload.pipeline.compare_entry(
                    &workload.comparison,
                    &workload.destination,
                    &name,
                );
                (name, outcome)
            });
        }

        let mut outcomes = Vec::with_capacity(workload.comparison.common().len());
        while let Some(joined) = tasks.join_next().await {
            outcomes.push(joined.context("Comparison worker stopped unexpectedly")?);
        }

        Ok(outcomes)
    }

    fn report(&self, result: &ComparisonResult) -> anyhow::Result<()> {
        for line in result.status_lines() {
            writeln!(self.writer(), "{line}")?;
        }
        writeln!(self.writer(), "{}", result.summary().bold())?;
        self.writer()
            .flush()
            .context("Unable to flush comparison report")?;

        Ok(())
    }
}
