//! Spring relaxation - pulls joints back onto the bone table
//!
//! After the editor drags one joint, the rest of the body has to follow.
//! Every pass walks `SEGMENTS` in order and moves both ends of each bone
//! along the bone so its length matches the rest length; the dragged joint
//! can be pinned so only its neighbours move.
//!
//! Updates are applied in place (Gauss-Seidel): a joint shared by several
//! bones collects each bone's correction additively within a pass.

use crate::geometry::V3;
use crate::skeleton::{Joint, Player, PlayerJoint, Position, JOINT_COUNT, PLAYERS, SEGMENTS};

/// Upper bound on passes per call
///
/// Pinned drags along the neck chain converge slowly (a 0.5 m head drag
/// needs several hundred passes), so this also bounds worst-case latency
/// per drag update.
pub const DEFAULT_MAX_ITERATIONS: u32 = 1000;

/// Largest bone length error (meters) accepted as converged - 1 mm
pub const DEFAULT_TOLERANCE: f64 = 0.001;

/// Bones shorter than this have no usable direction and are skipped for the pass
pub const DEGENERATE_LENGTH: f64 = 1e-9;

/// Solver tuning
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub max_iterations: u32,
    pub tolerance: f64,
}

impl SpringConfig {
    pub fn new(max_iterations: u32, tolerance: f64) -> Self {
        Self { max_iterations, tolerance }
    }

    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE)
    }
}

/// What a relaxation run did
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringReport {
    /// Passes over the bone table
    pub iterations: u32,
    /// Largest |length - rest length| on exit (meters)
    pub max_error: f64,
    /// `max_error` is within tolerance (never true for NaN coordinates)
    pub converged: bool,
}

impl SpringReport {
    /// Worst of two reports (used when both bodies are solved)
    fn merge(self, other: SpringReport) -> SpringReport {
        SpringReport {
            iterations: self.iterations.max(other.iterations),
            max_error: self.max_error.max(other.max_error),
            converged: self.converged && other.converged,
        }
    }
}

/// Largest bone length error over one body, NaN if any bone is NaN
pub fn max_segment_error(player: &Player) -> f64 {
    max_error(player.joints())
}

fn max_error(joints: &[V3; JOINT_COUNT]) -> f64 {
    SEGMENTS.iter().fold(0.0_f64, |worst, s| {
        let [a, b] = s.ends;
        let error = ((joints[b.index()] - joints[a.index()]).norm() - s.length).abs();
        // f64::max drops NaN
        if worst.is_nan() || error.is_nan() {
            f64::NAN
        } else {
            worst.max(error)
        }
    })
}

/// Bone-length relaxation with a fixed pass budget
#[derive(Clone, Copy, Debug, Default)]
pub struct SpringSolver {
    config: SpringConfig,
}

impl SpringSolver {
    pub fn new(config: SpringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> SpringConfig {
        self.config
    }

    /// Relax `joints` in place. `fixed_joint` is never written.
    ///
    /// Behaviour on NaN coordinates or coincident bone ends is unspecified,
    /// but the call always returns after at most `max_iterations` passes.
    pub fn relax(&self, joints: &mut [V3; JOINT_COUNT], fixed_joint: Option<Joint>) -> SpringReport {
        let mut iterations = 0;
        loop {
            let error = max_error(joints);
            let converged = error <= self.config.tolerance;
            if converged || iterations >= self.config.max_iterations {
                return SpringReport { iterations, max_error: error, converged };
            }

            for s in SEGMENTS.iter() {
                let [a, b] = s.ends;
                let (ia, ib) = (a.index(), b.index());

                let delta = joints[ib] - joints[ia];
                let length = delta.norm();
                if length < DEGENERATE_LENGTH {
                    continue;
                }

                // Moving a by +correction and b by -correction closes the whole gap
                let correction = delta * ((length - s.length) / length);

                if fixed_joint == Some(a) {
                    joints[ib] -= correction;
                } else if fixed_joint == Some(b) {
                    joints[ia] += correction;
                } else {
                    joints[ia] += correction * 0.5;
                    joints[ib] -= correction * 0.5;
                }
            }
            iterations += 1;
        }
    }

    pub fn solve_player(&self, player: &Player, fixed_joint: Option<Joint>) -> (Player, SpringReport) {
        let mut r = *player;
        let report = self.relax(r.joints_mut(), fixed_joint);
        (r, report)
    }

    /// Relax both bodies; the pin only applies to the body it belongs to
    pub fn solve_position(&self, position: &mut Position, fixed: Option<PlayerJoint>) -> SpringReport {
        PLAYERS
            .iter()
            .map(|&p| {
                let fixed_joint = fixed.filter(|pj| pj.player == p).map(|pj| pj.joint);
                self.relax(position.player_mut(p).joints_mut(), fixed_joint)
            })
            .reduce(SpringReport::merge)
            .unwrap_or(SpringReport { iterations: 0, max_error: 0.0, converged: true })
    }
}

/// Relax one body with the default config
pub fn spring(player: &Player, fixed_joint: Option<Joint>) -> Player {
    SpringSolver::default().solve_player(player, fixed_joint).0
}

/// Relax both bodies in place with the default config
pub fn spring_position(position: &mut Position, fixed: Option<PlayerJoint>) {
    SpringSolver::default().solve_position(position, fixed);
}
