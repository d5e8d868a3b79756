// Copyright 2024 FastLabs Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Dev-workflow helper invoked as `cargo run -p x -- <command>`.
//!
//! Wraps the handful of `cargo` invocations contributors run locally
//! (format check, clippy, the kernel-equivalence test suite, the throughput
//! bench) behind one binary so CI and a local dev loop call the same thing.

use std::process::{Command, ExitCode};

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "x", about = "fastcrc dev workflow helper")]
struct Cli {
    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Run `cargo fmt --check` over the workspace.
    FmtCheck,
    /// Run `cargo clippy` with the workspace's deny lints.
    Clippy,
    /// Run the full test suite (unit tests plus the cross-cutting property
    /// tests in `fastcrc/tests`).
    Test,
    /// Run the throughput benchmark suite.
    Bench,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let result = match cli.command {
        Cmd::FmtCheck => run("cargo", &["fmt", "--all", "--check"]),
        Cmd::Clippy => run(
            "cargo",
            &["clippy", "--workspace", "--all-targets", "--", "-D", "warnings"],
        ),
        Cmd::Test => run("cargo", &["test", "--workspace"]),
        Cmd::Bench => run("cargo", &["bench", "-p", "fastcrc"]),
    };

    match result {
        Ok(status) if status.success() => ExitCode::SUCCESS,
        Ok(status) => ExitCode::from(status.code().unwrap_or(1) as u8),
        Err(err) => {
            eprintln!("x: failed to run command: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(program: &str, args: &[&str]) -> std::io::Result<std::process::ExitStatus> {
    let resolved = which::which(program).unwrap_or_else(|_| program.into());
    println!("x: running {} {}", resolved.display(), args.join(" "));
    Command::new(resolved).args(args).status()
}
