//! Skill- and speed-adjusted job durations.
//!
//! # Model
//!
//! ```text
//! skill_factor = 1 - (worker.skill_level - job.skill_required) * 0.1
//! adjusted     = job.processing_time * skill_factor / line.speed_factor
//! duration     = max(floor(adjusted) + 1, 1)
//! ```
//!
//! Each skill level above the requirement shaves 10% off the nominal time;
//! each level below adds 10%. For heavily overqualified workers the factor
//! turns negative, so the result is floored at 1.

use crate::models::{AssemblyLine, Job, Worker};

/// Skill level step, as a fraction of nominal processing time.
pub const SKILL_STEP: f64 = 0.1;

/// Minimum slot length of any job.
pub const MIN_DURATION: i64 = 1;

/// Duration multiplier for a worker's skill surplus (or deficit).
pub fn skill_factor(job: &Job, worker: &Worker) -> f64 {
    let surplus = i64::from(worker.skill_level) - i64::from(job.skill_required);
    1.0 - surplus as f64 * SKILL_STEP
}

/// Actual processing time of `job` on `line` operated by `worker`.
///
/// Always at least [`MIN_DURATION`].
///
/// # Example
/// ```
/// use u_assembly::models::{AssemblyLine, Job, Worker};
/// use u_assembly::timing::actual_duration;
///
/// let job = Job::new(0, 65).with_skill(2);
/// let worker = Worker::new(0, 3);
/// // 65 * 0.9 / 1.0 = 58.5 → 58 + 1
/// assert_eq!(actual_duration(&job, &worker, &AssemblyLine::new(0, 1.0)), 59);
/// ```
pub fn actual_duration(job: &Job, worker: &Worker, line: &AssemblyLine) -> i64 {
    let adjusted = job.processing_time as f64 * skill_factor(job, worker) / line.speed_factor;
    // The cast saturates at i64::MAX, so the +1 must too
    (adjusted.floor() as i64).saturating_add(1).max(MIN_DURATION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_factor() {
        let job = Job::new(0, 100).with_skill(3);
        assert!((skill_factor(&job, &Worker::new(0, 3)) - 1.0).abs() < 1e-10);
        assert!((skill_factor(&job, &Worker::new(0, 5)) - 0.8).abs() < 1e-10);
        assert!((skill_factor(&job, &Worker::new(0, 1)) - 1.2).abs() < 1e-10);
    }

    #[test]
    fn test_reference_plant_durations() {
        let w0 = Worker::new(0, 3);
        let normal = AssemblyLine::new(0, 1.0);
        let slow = AssemblyLine::new(1, 0.9);

        let j0 = Job::new(0, 65).with_skill(2);
        assert_eq!(actual_duration(&j0, &w0, &normal), 59);
        assert_eq!(actual_duration(&j0, &w0, &slow), 66);

        let j1 = Job::new(1, 160).with_skill(3);
        assert_eq!(actual_duration(&j1, &w0, &normal), 161);
        assert_eq!(actual_duration(&j1, &w0, &slow), 178);

        let j2 = Job::new(2, 150).with_skill(2);
        assert_eq!(actual_duration(&j2, &w0, &normal), 136);
        assert_eq!(actual_duration(&j2, &w0, &slow), 151);

        // Underqualified reference worker: factor 1.1
        let j3 = Job::new(3, 120).with_skill(4);
        assert_eq!(actual_duration(&j3, &w0, &normal), 133);
        assert_eq!(actual_duration(&j3, &w0, &slow), 147);
    }

    #[test]
    fn test_faster_line_shortens() {
        let job = Job::new(0, 100);
        let w = Worker::new(0, 0);
        assert_eq!(actual_duration(&job, &w, &AssemblyLine::new(0, 2.0)), 51);
        assert_eq!(actual_duration(&job, &w, &AssemblyLine::new(0, 0.5)), 201);
    }

    #[test]
    fn test_huge_processing_time_saturates() {
        let job = Job::new(0, i64::MAX).with_skill(2);
        let line = AssemblyLine::new(0, 0.5);
        assert_eq!(actual_duration(&job, &Worker::new(0, 2), &line), i64::MAX);
    }

    #[test]
    fn test_zero_skill_factor_floor() {
        // Surplus of 10 levels → factor 0 → adjusted 0 → 1
        let job = Job::new(0, 500);
        assert_eq!(actual_duration(&job, &Worker::new(0, 10), &AssemblyLine::new(0, 1.0)), 1);
    }

    #[test]
    fn test_negative_skill_factor_floor() {
        let line = AssemblyLine::new(0, 4.0);
        for skill in [11, 13, 20, 30, 1_000] {
            for time in [1, 10, 65, 10_000] {
                let d = actual_duration(&Job::new(0, time), &Worker::new(0, skill), &line);
                assert_eq!(d, MIN_DURATION, "skill={skill} time={time}");
            }
        }
    }
}
