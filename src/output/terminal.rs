//! Terminal rendering of a computed plan.
//!
//! Report lines carry the planner's historical labels (Subnet Mask, CIDR,
//! Number of Hosts, Number of Subnets, First/Last Two Subnets).

use crate::models::{Network, SubnetPlan};
use colored::Colorize;

/// Width of the label column, sized to the longest label plus its colon.
const LABEL_WIDTH: usize = 18;

/// Format one labelled report line, label column padded to a fixed width.
pub fn format_line<T: ToString>(label: &str, value: T) -> String {
    let labelled = format!("{label}:");
    format!("{labelled:<LABEL_WIDTH$} {}", value.to_string())
}

/// Join networks as a comma-separated CIDR list.
fn format_subnets(subnets: &[Network]) -> String {
    subnets
        .iter()
        .map(|net| net.to_string())
        .collect::<Vec<String>>()
        .join(", ")
}

/// Build the human-readable report for a computed plan.
pub fn format_plan(plan: &SubnetPlan) -> String {
    let lines = [
        format_line("Subnet Mask", plan.mask.to_string().cyan()),
        format_line("CIDR", format!("/{}", plan.new_prefix).cyan()),
        format_line("Number of Hosts", plan.num_hosts.to_string().yellow()),
        format_line("Number of Subnets", plan.num_subnets.to_string().yellow()),
        format_line("First Two Subnets", format_subnets(&plan.first_two).cyan()),
        format_line("Last Two Subnets", format_subnets(&plan.last_two).cyan()),
    ];

    lines.join("\n")
}

/// Print the plan report to stdout.
pub fn print_plan(plan: &SubnetPlan) {
    log::info!("#Start print_plan()");
    println!("{}", format_plan(plan));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planning::summarize;

    #[test]
    fn test_format_line_pads_short_labels() {
        assert_eq!(
            format_line("Subnet Mask", "255.255.255.0"),
            "Subnet Mask:       255.255.255.0"
        );
    }

    #[test]
    fn test_format_line_exact_width() {
        assert_eq!(format_line("Number of Subnets", 4), "Number of Subnets: 4");
    }

    #[test]
    fn test_format_line_long_label() {
        assert_eq!(
            format_line("An Extremely Long Label", "x"),
            "An Extremely Long Label: x"
        );
    }

    #[test]
    fn test_format_subnets() {
        let subnets = vec![
            Network::from_cidr("192.168.1.0/26").unwrap(),
            Network::from_cidr("192.168.1.64/26").unwrap(),
        ];
        assert_eq!(format_subnets(&subnets), "192.168.1.0/26, 192.168.1.64/26");
        assert_eq!(format_subnets(&[]), "");
    }

    #[test]
    fn test_format_plan_reports_every_field() {
        let net = Network::from_cidr("192.168.1.0/24").unwrap();
        let plan = summarize(net, 26).unwrap();
        let report = format_plan(&plan);

        assert!(report.contains("Subnet Mask:"));
        assert!(report.contains("255.255.255.192"));
        assert!(report.contains("/26"));
        assert!(report.contains("Number of Hosts:"));
        assert!(report.contains("254"));
        assert!(report.contains("Number of Subnets:"));
        assert!(report.contains("192.168.1.0/26, 192.168.1.64/26"));
        assert!(report.contains("192.168.1.128/26, 192.168.1.192/26"));
        assert_eq!(report.lines().count(), 6);
    }
}
