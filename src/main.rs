use colored::Colorize;
use std::error::Error;
use std::io::{self, Write};
use subnet_planner::is_valid_address;
use subnet_planner::output::print_plan;
use subnet_planner::plan;
use subnet_planner::planning::{is_valid_cidr, parse_count};

/// Print a prompt on stdout and read one answer line from stdin.
/// Only the line ending is stripped, the answer is otherwise raw.
fn prompt(label: &str) -> Result<String, Box<dyn Error>> {
    print!("{label}");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    Ok(answer.trim_end_matches(['\r', '\n']).to_string())
}

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    log4rs::init_file("log4rs.yml", Default::default()).expect("Error initializing log4rs");
    //
    log::info!("#Start main()");

    let address = prompt("Enter an IP address: ")?;
    if !is_valid_address(&address) {
        println!("{}", "Invalid IP address.".red());
        return Ok(());
    }

    let cidr = prompt("Enter a CIDR (optional): ")?;
    let explicit_cidr = (!cidr.is_empty()).then_some(cidr.as_str());
    if let Some(text) = explicit_cidr {
        if !is_valid_cidr(text) {
            log::warn!("Ignoring CIDR {text:?}, the class default applies");
        }
    }

    let kind = prompt("Partition by number of hosts or subnets? (hosts/subnets): ")?;
    if kind != "hosts" && kind != "subnets" {
        println!("{}", "Invalid partition type.".red());
        return Ok(());
    }

    let count = prompt(&format!("Enter number of {kind}: "))?;
    if parse_count(&count).is_err() {
        println!("{}", "Invalid number.".red());
        return Ok(());
    }

    match plan(&address, explicit_cidr, &kind, &count) {
        Ok(subnet_plan) => {
            log::debug!("plan = {}", serde_json::to_string(&subnet_plan)?);
            print_plan(&subnet_plan);
        }
        Err(e) => {
            log::error!("{e}");
            println!("{}", e.to_string().red());
        }
    }

    Ok(())
}
