//! Bridge circuit parameters and nodal system assembly.
//!
//! The topology is fixed: a voltage source E feeds node 2 through R1, the
//! two bridge arms run node 2 -> node 3 (R2) and node 2 -> node 4 (R4), the
//! bridging resistor R6 connects nodes 3 and 4, and R3/R5 return nodes 3
//! and 4 to ground. Node 1 sits at the source potential E and the reference
//! node is the source's negative terminal, so the unknowns are V2, V3, V4.
//!
//! The source branch is taken as its Norton equivalent: a current injection
//! of E/R1 into node 2 in parallel with the conductance 1/R1. With that,
//! every branch is a plain conductance and the system assembles by stamping.

use crate::error::{BridgeError, Result};
use crate::solver::NodalMatrix;

/// Matrix row indices of the three unknown nodes.
const NODE_2: Option<usize> = Some(0);
const NODE_3: Option<usize> = Some(1);
const NODE_4: Option<usize> = Some(2);
const GROUND: Option<usize> = None;

/// Parameter names used in error reporting, in `resistances` order.
const RESISTANCE_NAMES: [&str; 6] = ["R1", "R2", "R3", "R4", "R5", "R6"];

/// The seven parameters of the bridge circuit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BridgeCircuit {
    /// Source voltage E in volts.
    pub e: f64,
    /// Resistances R1..R6 in ohms.
    pub resistances: [f64; 6],
}

/// The solved node voltages, in volts relative to ground.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeVoltages {
    pub v2: f64,
    pub v3: f64,
    pub v4: f64,
}

impl BridgeCircuit {
    /// Create a circuit from its parameters, rejecting zero or non-finite
    /// resistances up front so no conductance ever divides by zero.
    pub fn new(e: f64, resistances: [f64; 6]) -> Result<Self> {
        if !e.is_finite() {
            return Err(BridgeError::non_finite("E", e));
        }
        for (name, &r) in RESISTANCE_NAMES.iter().zip(resistances.iter()) {
            if !r.is_finite() {
                return Err(BridgeError::non_finite(name, r));
            }
            if r == 0.0 {
                return Err(BridgeError::invalid_resistance(name, r));
            }
        }
        Ok(Self { e, resistances })
    }

    /// Assemble the 3x3 conductance matrix and current vector.
    ///
    /// Stamping the six branches produces exactly:
    ///
    /// ```text
    /// G11 = 1/R1+1/R2+1/R4   G12 = -1/R2            G13 = -1/R4
    /// G21 = -1/R2            G22 = 1/R2+1/R3+1/R6   G23 = -1/R6
    /// G31 = -1/R4            G32 = -1/R6            G33 = 1/R4+1/R5+1/R6
    /// I1  = E/R1             I2  = 0                I3  = 0
    /// ```
    pub fn assemble(&self) -> NodalMatrix {
        let [r1, r2, r3, r4, r5, r6] = self.resistances;
        let mut matrix = NodalMatrix::new(3);

        matrix.stamp_conductance(NODE_2, GROUND, 1.0 / r1);
        matrix.stamp_conductance(NODE_2, NODE_3, 1.0 / r2);
        matrix.stamp_conductance(NODE_3, GROUND, 1.0 / r3);
        matrix.stamp_conductance(NODE_2, NODE_4, 1.0 / r4);
        matrix.stamp_conductance(NODE_4, GROUND, 1.0 / r5);
        matrix.stamp_conductance(NODE_3, NODE_4, 1.0 / r6);

        // Norton equivalent of the source branch: E/R1 into node 2
        matrix.stamp_current_source(GROUND, NODE_2, self.e / r1);

        matrix
    }

    /// Solve for the three unknown node voltages.
    pub fn solve(&self) -> Result<NodeVoltages> {
        let mut matrix = self.assemble();
        matrix.factor_and_solve()?;
        Ok(NodeVoltages {
            v2: matrix.voltage(NODE_2),
            v3: matrix.voltage(NODE_3),
            v4: matrix.voltage(NODE_4),
        })
    }
}

/// Solve the bridge circuit for the given source voltage and resistances.
///
/// Returns the node voltages (V2, V3, V4), or an error if some resistance
/// is zero or the conductance matrix is singular.
pub fn solve(e: f64, r1: f64, r2: f64, r3: f64, r4: f64, r5: f64, r6: f64) -> Result<NodeVoltages> {
    BridgeCircuit::new(e, [r1, r2, r3, r4, r5, r6])?.solve()
}
