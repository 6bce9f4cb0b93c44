//! setupcheck CLI - Audit directory permissions for installation

use clap::Parser;
use setupcheck::cli::{Args, SubCommand};
use setupcheck::output::{ApplicationReport, InstallationReport};
use setupcheck::{
    format_report, BasePathResolver, CheckReport, FsInspector, OutputFormat, PermissionChecker,
};

fn main() {
    let args = Args::parse();

    match run(args) {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    }
}

fn run(args: Args) -> setupcheck::Result<i32> {
    let resolver = match args.base {
        Some(base) => BasePathResolver::new(base),
        None => BasePathResolver::from_current_dir()?,
    };
    if args.verbose {
        eprintln!("Checking installation base: {}", resolver.base().display());
    }

    let format = if args.json {
        OutputFormat::Json
    } else {
        OutputFormat::Human
    };
    let mut checker = PermissionChecker::new(resolver, FsInspector::new());

    match args.command {
        SubCommand::Install => {
            let report = InstallationReport::build(&mut checker)?;
            let ready = report.is_ready();
            println!(
                "{}",
                format_report(&CheckReport::Installation(report), &format)
            );
            // Installers gate on the exit code
            Ok(if ready { 0 } else { 1 })
        }

        SubCommand::App => {
            let report = ApplicationReport::build(&mut checker)?;
            println!(
                "{}",
                format_report(&CheckReport::Application(report), &format)
            );
            Ok(0)
        }
    }
}
