use crate::core::annotator::PageAnnotator;
use crate::core::{ConfigProvider, Storage};
use crate::domain::model::{PageOutcome, RunSummary};
use crate::utils::error::Result;

pub struct AnnotateEngine<S: Storage, C: ConfigProvider> {
    annotator: PageAnnotator<S>,
    config: C,
}

impl<S: Storage, C: ConfigProvider> AnnotateEngine<S, C> {
    pub fn new(annotator: PageAnnotator<S>, config: C) -> Self {
        Self { annotator, config }
    }

    pub async fn run(&self) -> Result<RunSummary> {
        let dry_run = self.config.dry_run();
        let mut summary = RunSummary {
            dry_run,
            ..RunSummary::default()
        };

        println!("Adding Related Services sections...\n");
        tracing::info!("Scanning {}", self.config.working_dir());

        for service in self.annotator.catalog().services.keys() {
            let candidates = self.candidates(service).await?;
            tracing::debug!("{} file(s) match {}-*.html", candidates.len(), service);

            for filename in candidates {
                match self.annotator.annotate(&filename, dry_run).await {
                    Ok(Some(outcome)) => {
                        report(&filename, outcome, dry_run);
                        summary.record(outcome);
                    }
                    Ok(None) => {}
                    Err(e) if self.config.continue_on_error() => {
                        tracing::error!("❌ {}: {}", filename, e);
                        println!("  ✗ Failed to process {} ({})", filename, e);
                        summary.failed += 1;
                    }
                    Err(e) => return Err(e),
                }
            }
        }

        tracing::info!(
            "Done: {} added, {} already present, {} without related services, {} without insertion point, {} failed",
            summary.added,
            summary.already_present,
            summary.no_related,
            summary.no_insertion_point,
            summary.failed
        );

        Ok(summary)
    }

    /// Files matching `{service}-*.html` that parse as `service`, sorted.
    /// Under prefix keys (`car`, `car-lockout`) each file belongs to one key only.
    async fn candidates(&self, service: &str) -> Result<Vec<String>> {
        let prefix = format!("{}-", service);
        let mut names: Vec<String> = self
            .annotator
            .storage()
            .list_files()
            .await?
            .into_iter()
            .filter(|name| name.starts_with(&prefix) && name.ends_with(".html"))
            .filter(|name| {
                self.annotator
                    .identify(name)
                    .is_some_and(|identity| identity.service == service)
            })
            .collect();
        names.sort();
        Ok(names)
    }
}

fn report(filename: &str, outcome: PageOutcome, dry_run: bool) {
    match outcome {
        PageOutcome::Added if dry_run => {
            println!("  ✓ Would add Related Services to {}", filename)
        }
        PageOutcome::Added => println!("  ✓ Added Related Services to {}", filename),
        PageOutcome::AlreadyPresent => {
            tracing::info!("{} already annotated", filename);
            println!("  Skipping {} (already has Related Services)", filename)
        }
        PageOutcome::NoRelatedServices => {
            tracing::info!("{} has no sibling pages", filename);
            println!("  Skipping {} (no related services found)", filename)
        }
        PageOutcome::NoInsertionPoint => {
            tracing::warn!("⚠️ {} has neither </main> nor <footer", filename);
            println!(
                "  ✗ No insertion point in {} (missing </main> and <footer)",
                filename
            )
        }
    }
}

/// Final line printed after a run.
pub fn summary_line(summary: &RunSummary) -> String {
    if summary.dry_run {
        format!("✓ Would add Related Services to {} pages", summary.added)
    } else {
        format!("✓ Added Related Services to {} pages", summary.added)
    }
}
