//! Console report formatting.

use crate::circuit::NodeVoltages;

/// Format the solved node voltages as a human-readable report,
/// 4 decimal places per voltage.
pub fn format_voltages(voltages: &NodeVoltages) -> String {
    format!(
        "--- Nodal Analysis Results ---\n\
         Node 2 voltage (V2): {:.4} V\n\
         Node 3 voltage (V3): {:.4} V\n\
         Node 4 voltage (V4): {:.4} V\n\
         ------------------------------",
        voltages.v2, voltages.v3, voltages.v4
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_decimal_formatting() {
        let report = format_voltages(&NodeVoltages {
            v2: 9.15107913,
            v3: 5.43884892,
            v4: 5.17985611,
        });
        assert!(report.contains("Node 2 voltage (V2): 9.1511 V"));
        assert!(report.contains("Node 3 voltage (V3): 5.4388 V"));
        assert!(report.contains("Node 4 voltage (V4): 5.1799 V"));
    }
}
