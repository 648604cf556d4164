use std::{env, process::{Command, ExitCode}};

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    let cmd = args.first().map(String::as_str).unwrap_or("check-all");
    match cmd {
        "check-all" => seq(&[
            &["cargo", "fmt", "--all", "--", "--check"],
            &["cargo", "clippy", "--workspace", "--all-targets", "--all-features", "--", "-D", "clippy::all"],
            &["cargo", "check", "--workspace", "--all-features"],
        ]),
        "test-all" => seq(&[
            &["cargo", "test", "--workspace", "--", "--nocapture"],
            &["cargo", "test", "-p", "roundtrip_runner", "--features", "bdd", "--test", "bdd_main"],
        ]),
        // Fixture conformance only; NETJSON_FIXTURE_ROOT redirects the fixture root
        "roundtrip" => seq(&[
            &["cargo", "test", "-p", "roundtrip_runner", "--test", "netjson_samples", "--", "--nocapture"],
        ]),
        "bdd" => seq(&[
            &["cargo", "test", "-p", "roundtrip_runner", "--features", "bdd", "--test", "bdd_main"],
        ]),
        other => {
            eprintln!("unknown subcommand: {}", other);
            eprintln!("usage: cargo xtask [check-all|test-all|roundtrip|bdd]");
            ExitCode::from(2)
        }
    }
}

fn seq(cmds: &[&[&str]]) -> ExitCode {
    for c in cmds {
        eprintln!("+ {}", c.join(" "));
        let status = match Command::new(c[0]).args(&c[1..]).status() {
            Ok(status) => status,
            Err(e) => {
                eprintln!("spawn {}: {}", c[0], e);
                return ExitCode::from(1);
            }
        };
        if !status.success() {
            return ExitCode::from(status.code().unwrap_or(1) as u8);
        }
    }
    ExitCode::SUCCESS
}
