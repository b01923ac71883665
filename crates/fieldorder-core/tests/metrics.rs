//! Kept as the only test in this binary so no other test touches the shared
//! counters while it runs.

use fieldorder_core::{
    obs::{metrics_report, metrics_reset_all},
    prelude::*,
};
use std::thread;

#[derive(Clone, Debug)]
struct Job {
    priority: i32,
}

static PRIORITY: FieldModel = FieldModel::new("Job", "priority", FieldKind::Int);
static JOB_PRIORITY: GetInt<Job> = Getter::new(&PRIORITY, |job: &Job| job.priority);

#[test]
fn worker_thread_sorts_are_counted_on_the_caller() {
    metrics_reset_all();

    let chain = FieldComparator::descending(JOB_PRIORITY).into_chain();
    let mut batches: Vec<Vec<Job>> = (0..3)
        .map(|batch| {
            (0..4)
                .map(|i| Job {
                    priority: batch * 10 + i,
                })
                .collect()
        })
        .collect();

    thread::scope(|scope| {
        for batch in &mut batches {
            let chain = &chain;
            scope.spawn(move || chain.sort(batch));
        }
    });

    let report = metrics_report();
    assert_eq!(report.counters.ops.sorts, 3);
    assert_eq!(report.counters.ops.rows_sorted, 12);
    assert!((report.summary.avg_rows_per_sort - 4.0).abs() < f64::EPSILON);
    assert_eq!(batches[2][0].priority, 23);
}
