//! Row scan, season lookup and the single batched write-back.

use anyhow::Result;

use crate::api::{SheetService, ValueUpdate};
use crate::config::SheetTarget;
use crate::seasons;

/// Sentinel left by upstream formulas when a flower id could not be resolved.
const PLACEHOLDER: &str = "#N/A";
/// Rows carrying a prose note instead of an id contain this fragment.
const IGNORE_MARKER: &str = "written in expressive";

/// Build one single-cell update per row whose id resolves to a season.
///
/// Rows are skipped when the id cell is blank or missing, equals the
/// placeholder, or is a prose note. A lookup miss is also a skip, not an
/// error; plenty of catalog entries simply have no season data.
pub fn build_updates(rows: &[Vec<String>], target: &SheetTarget) -> Vec<ValueUpdate> {
    let mut updates = Vec::new();

    for (index, row) in rows.iter().enumerate() {
        let flower_id = match row.first() {
            Some(id) if !id.is_empty() => id.as_str(),
            _ => continue,
        };
        if flower_id == PLACEHOLDER || flower_id.contains(IGNORE_MARKER) {
            continue;
        }

        let key = seasons::normalize(flower_id);
        let Some(season) = seasons::lookup(&key) else {
            continue;
        };

        log::info!(
            "row {}: {} -> {}",
            target.sheet_row(index),
            flower_id,
            season
        );
        updates.push(ValueUpdate::cell(target.season_cell(index), season));
    }

    updates
}

/// Fetch the id column, resolve seasons and issue at most one batch write.
///
/// Returns the number of cells written. With nothing to write, no request is
/// made at all. Any transport failure propagates and ends the run; there is
/// no partial state to recover since the write is a single batch.
pub async fn run(service: &impl SheetService, target: &SheetTarget) -> Result<usize> {
    log::info!(
        "Fetching {} from spreadsheet {}",
        target.source_range,
        target.spreadsheet_id
    );
    let rows = service.read_range(&target.source_range).await?;
    log::debug!("Fetched {} rows", rows.len());

    let updates = build_updates(&rows, target);
    if updates.is_empty() {
        log::warn!("No rows to update");
        return Ok(0);
    }

    service.batch_update(&updates).await?;
    log::info!("Updated {} rows", updates.len());
    Ok(updates.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct RecordingService {
        rows: Vec<Vec<String>>,
        batches: Mutex<Vec<Vec<ValueUpdate>>>,
    }

    impl RecordingService {
        fn with_rows(rows: Vec<Vec<String>>) -> Self {
            RecordingService {
                rows,
                batches: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait::async_trait]
    impl SheetService for RecordingService {
        async fn read_range(&self, _range: &str) -> Result<Vec<Vec<String>>> {
            Ok(self.rows.clone())
        }

        async fn batch_update(&self, updates: &[ValueUpdate]) -> Result<()> {
            self.batches.lock().unwrap().push(updates.to_vec());
            Ok(())
        }
    }

    fn row(value: &str) -> Vec<String> {
        vec![value.to_string()]
    }

    fn target() -> SheetTarget {
        SheetTarget::default()
    }

    #[test]
    fn test_build_updates_mixed_rows() {
        // Sheet rows 2..=5: color-coded hit, placeholder, unknown species, plain hit.
        let rows = vec![
            row("rose-rd"),
            row("#N/A"),
            row("unknown-flower"),
            row("tulip"),
        ];

        let updates = build_updates(&rows, &target());

        assert_eq!(
            updates,
            vec![
                ValueUpdate::cell("N2", "All Season 01-12"),
                ValueUpdate::cell("N5", "Spring 03-05"),
            ]
        );
    }

    #[test]
    fn test_blank_and_missing_cells_skipped() {
        let rows = vec![row(""), Vec::new(), row("lily")];

        let updates = build_updates(&rows, &target());

        assert_eq!(updates, vec![ValueUpdate::cell("N4", "Summer 06-08")]);
    }

    #[test]
    fn test_prose_note_skipped_even_when_resolvable() {
        // The note mentions a real species but must still be ignored.
        let rows = vec![row("rose, written in expressive style")];

        assert!(build_updates(&rows, &target()).is_empty());
    }

    #[tokio::test]
    async fn test_run_skips_write_when_nothing_matches() {
        let service = RecordingService::with_rows(vec![row("#N/A"), row("unknown-flower")]);

        let written = run(&service, &target()).await.unwrap();

        assert_eq!(written, 0);
        assert!(service.batches.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_run_issues_single_batch_with_all_pairs() {
        let service = RecordingService::with_rows(vec![row("tulip"), row("rose-wh"), row("lily")]);

        let written = run(&service, &target()).await.unwrap();

        assert_eq!(written, 3);
        let batches = service.batches.lock().unwrap();
        assert_eq!(batches.len(), 1);
        assert_eq!(batches[0].len(), 3);
    }
}
