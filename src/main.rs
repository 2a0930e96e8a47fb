//! rosnat - MikroTik RouterOS NAT rule generator
//!
//! CLI front-end: resolves flags and environment-variable fallbacks, runs
//! the parse/generate pipeline, prints the rule script to stdout. All
//! diagnostics go to stderr so stdout stays paste-clean.

mod core;

use clap::Parser;
use core::nat::NatRuleSet;
use core::ports::parse_port_specs;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "rosnat")]
#[command(about = "Generate NAT rules for MikroTik RouterOS", long_about = None)]
#[command(after_help = "\
Examples:
  rosnat --public-ip 195.136.68.11 --dest-ip 172.16.1.10 --ports 32400/tcp
  rosnat --public-ip 195.136.68.11 --dest-ip 172.16.1.10 --ports 21/tcp,40000-40010/tcp,2001/udp
  rosnat --public-ip 195.136.68.11 --dest-ip 172.16.1.10 --ports 80/tcp,443/tcp --gateway-ip 172.16.1.1

Environment Variables:
  MIKROTIK_PUBLIC_IP   - Set default public IP
  MIKROTIK_DEST_IP     - Set default destination IP
  MIKROTIK_GATEWAY_IP  - Set default gateway IP
  MIKROTIK_APP         - Set default application name")]
struct Cli {
    /// Public IP address
    #[arg(long, env = "MIKROTIK_PUBLIC_IP", value_name = "IP")]
    public_ip: String,

    /// Destination IP address (internal)
    #[arg(long, env = "MIKROTIK_DEST_IP", value_name = "IP")]
    dest_ip: String,

    /// Ports in firewall-cmd format (e.g., 80/tcp,443/tcp,8000-8100/udp)
    #[arg(long, value_name = "SPEC")]
    ports: String,

    /// Gateway IP for src-nat (defaults to .1 in dest-ip subnet)
    #[arg(long, env = "MIKROTIK_GATEWAY_IP", value_name = "IP")]
    gateway_ip: Option<String>,

    /// Do not generate hairpin NAT rules
    #[arg(long)]
    no_hairpin: bool,

    /// Application name to include in comments
    #[arg(long, env = "MIKROTIK_APP", default_value = "")]
    app: String,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let entries = match parse_port_specs(&cli.ports) {
        Ok(entries) => entries,
        Err(e) => {
            eprintln!("Error parsing ports: {e}");
            return ExitCode::FAILURE;
        }
    };

    let ruleset = NatRuleSet {
        public_ip: cli.public_ip,
        dest_ip: cli.dest_ip,
        gateway_ip: cli.gateway_ip,
        hairpin: !cli.no_hairpin,
        app: cli.app,
        entries,
    };

    print!("{}", ruleset.to_ros_text());
    ExitCode::SUCCESS
}
