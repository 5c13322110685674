// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Mustekala CLI - Fluent HTTP Transfer Client
//!
//! Example usage and demonstration of the mustekala library.

use std::env;
use std::process::ExitCode;

use mustekala::{Outcome, TraceObserver, TransferClient, TransferOpt, Verb};

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("mustekala=info".parse().unwrap()),
        )
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return ExitCode::from(1);
    }
    if matches!(args[1].as_str(), "--help" | "-h" | "help") {
        print_usage();
        return ExitCode::SUCCESS;
    }
    if args.len() < 3 {
        eprintln!("Usage: mustekala <method> <url> [flags]");
        return ExitCode::from(1);
    }

    let method = &args[1];
    let url = &args[2];

    let mut client = TransferClient::new();
    client.add_observer(TraceObserver);

    let mut flags = args[3..].iter();
    while let Some(flag) = flags.next() {
        match flag.as_str() {
            "--header" | "-H" => match flags.next() {
                Some(line) => {
                    client.add_header_line(line.clone());
                }
                None => {
                    eprintln!("--header needs a 'name: value' argument");
                    return ExitCode::from(1);
                }
            },
            "--data" | "-d" => match flags.next() {
                Some(body) => {
                    client.set_post_fields(body.clone());
                }
                None => {
                    eprintln!("--data needs a body argument");
                    return ExitCode::from(1);
                }
            },
            "--timeout" => match flags.next().and_then(|s| s.parse::<i64>().ok()) {
                Some(secs) => {
                    client.set_option(TransferOpt::TimeoutSecs, secs);
                }
                None => {
                    eprintln!("--timeout needs a whole number of seconds");
                    return ExitCode::from(1);
                }
            },
            "--insecure" | "-k" => {
                client.set_option(TransferOpt::AcceptInvalidCerts, true);
            }
            "--follow" | "-L" => {
                client.set_option(TransferOpt::FollowRedirects, true);
            }
            other => {
                eprintln!("Unknown flag: {}", other);
                print_usage();
                return ExitCode::from(1);
            }
        }
    }

    match client.http_request(method, url).await {
        Ok(Outcome::Body(text)) => {
            print!("{}", text);
            ExitCode::SUCCESS
        }
        Ok(Outcome::Pass) => {
            eprintln!(
                "{} {} -> {} (pass)",
                method.to_uppercase(),
                url,
                client.response_code().unwrap_or(0)
            );
            ExitCode::SUCCESS
        }
        Ok(Outcome::Fail) => {
            eprintln!(
                "{} {} -> {} (fail)",
                method.to_uppercase(),
                url,
                client.response_code().unwrap_or(0)
            );
            ExitCode::from(2)
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(1)
        }
    }
}

fn print_usage() {
    let verbs: Vec<&str> = Verb::ALL.iter().map(|v| v.as_str()).collect();

    println!("Mustekala - Fluent HTTP Transfer Client v{}", mustekala::VERSION);
    println!();
    println!("Usage:");
    println!("  mustekala <method> <url> [flags]");
    println!();
    println!("Methods: {}", verbs.join(", "));
    println!();
    println!("Flags:");
    println!("  -H, --header <line>   Add a 'name: value' header line");
    println!("  -d, --data <body>     Send a raw request body");
    println!("      --timeout <secs>  Overall transfer timeout");
    println!("  -k, --insecure        Skip TLS certificate verification");
    println!("  -L, --follow          Follow redirects instead of surfacing them");
    println!();
    println!("Examples:");
    println!("  mustekala get https://example.com");
    println!("  mustekala head https://example.com");
    println!("  mustekala post https://api.example.com/v1 -d 'a=1' -H 'x-api-key: secret'");
}
