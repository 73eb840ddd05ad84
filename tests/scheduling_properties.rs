use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use u_assembly::models::{AssemblyLine, Job, Problem, ReferenceWorker, Worker};
use u_assembly::report::ScheduleReport;
use u_assembly::timing::actual_duration;
use u_assembly::{GreedyScheduler, ScheduleError, SchedulerConfig};

const SPEEDS: [f64; 5] = [0.5, 0.8, 1.0, 1.25, 2.0];
const MAX_SKILL: u32 = 5;

/// Random DAG instance. Dependencies only point to lower ids, and worker 0
/// always holds the top skill, so every job has a qualified worker.
fn random_problem(rng: &mut SmallRng) -> Problem {
    let n_jobs = rng.random_range(1..=15);
    let n_lines = rng.random_range(1..=4);
    let n_workers = rng.random_range(1..=4);

    let mut problem = Problem::default();
    for id in 0..n_jobs {
        let mut job = Job::new(id, rng.random_range(1..=300))
            .with_skill(rng.random_range(0..=MAX_SKILL));
        for dep in 0..id {
            if rng.random_bool(0.25) {
                job = job.with_dependency(dep);
            }
        }
        problem = problem.with_job(job);
    }
    // Inserted in reverse; the pool sorts by id
    for id in (0..n_lines).rev() {
        let speed = SPEEDS[rng.random_range(0..SPEEDS.len())];
        problem = problem.with_line(AssemblyLine::new(id, speed));
    }
    problem = problem.with_worker(Worker::new(0, MAX_SKILL));
    for id in 1..n_workers {
        problem = problem.with_worker(Worker::new(id, rng.random_range(0..=MAX_SKILL)));
    }
    problem
}

fn for_each_instance(mut check: impl FnMut(&Problem)) {
    let mut rng = SmallRng::seed_from_u64(42);
    for _ in 0..200 {
        check(&random_problem(&mut rng));
    }
}

#[test]
fn test_every_job_scheduled_once() {
    for_each_instance(|problem| {
        let schedule = GreedyScheduler::new().schedule(problem).unwrap();
        assert_eq!(schedule.scheduled_count(), problem.jobs.len());
        let mut order = schedule.commit_order().to_vec();
        order.sort_unstable();
        assert_eq!(order, (0..problem.jobs.len()).collect::<Vec<_>>());
    });
}

#[test]
fn test_precedence_respected() {
    for_each_instance(|problem| {
        let schedule = GreedyScheduler::new().schedule(problem).unwrap();
        for job in &problem.jobs {
            let start = schedule.start(job.id).unwrap();
            for &dep in &job.dependencies {
                assert!(
                    start >= schedule.end(dep).unwrap(),
                    "job {} starts before dependency {dep} ends",
                    job.id
                );
            }
        }
    });
}

#[test]
fn test_lines_never_overlap() {
    for_each_instance(|problem| {
        let schedule = GreedyScheduler::new().schedule(problem).unwrap();
        for line in &problem.lines {
            let slots = schedule.assignments_for_line(line.id);
            for pair in slots.windows(2) {
                assert!(pair[0].end <= pair[1].start, "line {} overlaps", line.id);
            }
        }
    });
}

#[test]
fn test_workers_never_overlap() {
    for_each_instance(|problem| {
        let schedule = GreedyScheduler::new().schedule(problem).unwrap();
        for worker in &problem.workers {
            let slots = schedule.assignments_for_worker(worker.id);
            for (i, a) in slots.iter().enumerate() {
                for b in &slots[i + 1..] {
                    assert!(!a.overlaps(b), "worker {} double-booked", worker.id);
                }
            }
        }
    });
}

#[test]
fn test_workers_qualified() {
    for_each_instance(|problem| {
        let schedule = GreedyScheduler::new().schedule(problem).unwrap();
        for a in schedule.assignments() {
            let worker = problem.workers.iter().find(|w| w.id == a.worker_id).unwrap();
            assert!(worker.skill_level >= problem.jobs[a.job_id].skill_required);
        }
    });
}

#[test]
fn test_durations_follow_first_worker() {
    for_each_instance(|problem| {
        let schedule = GreedyScheduler::new().schedule(problem).unwrap();
        let first = problem.workers.iter().min_by_key(|w| w.id).unwrap();
        for a in schedule.assignments() {
            let line = problem.lines.iter().find(|l| l.id == a.line_id).unwrap();
            let job = &problem.jobs[a.job_id];
            assert!(a.duration() >= 1);
            assert_eq!(a.duration(), actual_duration(job, first, line));
        }
    });
}

#[test]
fn test_clocks_match_last_slot() {
    for_each_instance(|problem| {
        let mut run = GreedyScheduler::new().start(problem).unwrap();
        run.execute().unwrap();
        let schedule = run.schedule();

        let max_end = schedule.assignments().map(|a| a.end).max().unwrap_or(0);
        assert_eq!(schedule.makespan(), max_end);

        for line in run.pool().line_candidates() {
            let last = schedule
                .jobs_on_line(line.id)
                .last()
                .and_then(|&j| schedule.end(j))
                .unwrap_or(0);
            assert_eq!(line.current_time, last);
            assert_eq!(line.scheduled_jobs, schedule.jobs_on_line(line.id));
        }
        for worker in run.pool().workers() {
            let last = schedule
                .assignments_for_worker(worker.id)
                .iter()
                .map(|a| a.end)
                .max()
                .unwrap_or(0);
            assert_eq!(worker.busy_until, last);
        }
    });
}

#[test]
fn test_deterministic() {
    for_each_instance(|problem| {
        let scheduler = GreedyScheduler::new();
        assert_eq!(
            scheduler.schedule(problem).unwrap(),
            scheduler.schedule(problem).unwrap()
        );
    });
}

#[test]
fn test_every_reference_strategy_completes() {
    let strategies = [
        ReferenceWorker::First,
        ReferenceWorker::LeastSkilled,
        ReferenceWorker::MostSkilled,
        ReferenceWorker::Assigned,
    ];
    for_each_instance(|problem| {
        for strategy in strategies {
            let config = SchedulerConfig::default().with_reference_worker(strategy);
            let schedule = GreedyScheduler::with_config(config).schedule(problem).unwrap();
            assert_eq!(schedule.scheduled_count(), problem.jobs.len());
        }
    });
}

#[test]
fn test_back_edge_aborts() {
    let mut rng = SmallRng::seed_from_u64(7);
    for _ in 0..50 {
        let mut problem = random_problem(&mut rng);
        let n = problem.jobs.len();
        if n < 2 {
            continue;
        }
        // Close a cycle between the first and last job
        problem.jobs[0].dependencies.push(n - 1);
        problem.jobs[n - 1].dependencies.push(0);

        let aborted = GreedyScheduler::new().schedule(&problem).unwrap_err();
        assert!(matches!(aborted.error, ScheduleError::InvalidInput(_)));

        let unchecked = SchedulerConfig::default().with_validation(false);
        let aborted = GreedyScheduler::with_config(unchecked)
            .schedule(&problem)
            .unwrap_err();
        assert!(matches!(aborted.error, ScheduleError::Unsatisfiable { .. }));
        assert!(!aborted.partial.is_scheduled(0));
        assert!(!aborted.partial.is_scheduled(n - 1));
    }
}

#[test]
fn test_sample_plant_from_toml() {
    let toml = r#"
        [[jobs]]
        id = 0
        processing_time = 65
        skill_required = 2

        [[jobs]]
        id = 1
        processing_time = 160
        dependencies = [0]
        skill_required = 3

        [[jobs]]
        id = 2
        processing_time = 150
        dependencies = [0]
        skill_required = 2

        [[jobs]]
        id = 3
        processing_time = 120
        dependencies = [1, 2]
        skill_required = 4

        [[lines]]
        id = 0
        speed_factor = 1.0
        maintenance_windows = [{ start = 20, duration = 5 }]

        [[lines]]
        id = 1
        speed_factor = 0.9
        maintenance_windows = [{ start = 15, duration = 3 }]

        [[workers]]
        id = 0
        skill_level = 3

        [[workers]]
        id = 1
        skill_level = 4
    "#;
    let problem = Problem::from_toml_str(toml).unwrap();
    assert_eq!(problem, Problem::sample());

    let schedule = GreedyScheduler::new().schedule(&problem).unwrap();
    let slots: Vec<_> = (0..4)
        .map(|j| {
            let a = schedule.assignment(j).unwrap();
            (a.line_id, a.worker_id, a.start, a.end)
        })
        .collect();
    assert_eq!(
        slots,
        vec![(0, 0, 0, 59), (0, 0, 59, 220), (1, 1, 59, 210), (0, 1, 220, 353)]
    );

    let report = ScheduleReport::new(&problem, &schedule).to_string();
    assert!(report.contains("Total Makespan: 353 time units"));
    assert!(report.contains("Scheduled Jobs: 4/4"));
}
