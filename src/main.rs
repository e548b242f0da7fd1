// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! netchain CLI
//!
//! Sends one request through a client wired with the bundled interceptors.

use std::env;
use std::process::ExitCode;

use netchain::{HeaderInjector, LoggingInterceptor, NetworkClient, Request, ResponseValidator};
use reqwest::Method;

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("netchain=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return ExitCode::from(1);
    }

    match args[1].as_str() {
        "fetch" | "head" => {
            if args.len() < 3 {
                eprintln!("Usage: netchain {} <url>", args[1]);
                return ExitCode::from(1);
            }
            let method = if args[1] == "head" {
                Method::HEAD
            } else {
                Method::GET
            };
            send(method, &args[2]).await
        }
        "--help" | "-h" | "help" => {
            print_usage();
            ExitCode::SUCCESS
        }
        "--version" | "-v" | "version" => {
            println!("netchain {}", netchain::VERSION);
            ExitCode::SUCCESS
        }
        cmd => {
            eprintln!("Unknown command: {}", cmd);
            print_usage();
            ExitCode::from(1)
        }
    }
}

fn print_usage() {
    println!(
        r#"netchain - Interceptor chain for outbound HTTP requests

USAGE:
    netchain <COMMAND> [OPTIONS]

COMMANDS:
    fetch <url>     GET a URL through the logging, no-cache and validation interceptors
    head <url>      Same as fetch, with a HEAD request (empty bodies accepted)
    help            Show this help message
    version         Show version information

Set RUST_LOG=netchain=debug to see each interceptor at work.
"#
    );
}

fn build_client(method: &Method) -> netchain::Result<NetworkClient> {
    let validator = if *method == Method::HEAD {
        ResponseValidator::new().allow_empty_body()
    } else {
        ResponseValidator::new()
    };

    let client = NetworkClient::http()?;
    client
        .add_interceptor(LoggingInterceptor::new().with_responses())
        .add_interceptor(HeaderInjector::no_cache())
        .add_interceptor(validator);
    Ok(client)
}

async fn send(method: Method, url: &str) -> ExitCode {
    let client = match build_client(&method) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return ExitCode::from(1);
        }
    };

    let mut request = match Request::new(method, url) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Invalid request: {}", e);
            return ExitCode::from(1);
        }
    };

    match client.perform_request(&mut request).await {
        Ok(response) => {
            println!("\n=== Request ===");
            println!("{} {}", request.method, request.url);
            for (name, value) in &request.headers {
                println!("  {}: {}", name, value);
            }

            println!("\n=== Response ===");
            println!("Status: {}", response.status);
            println!("Content-Type: {:?}", response.content_type());
            println!("Size: {} bytes", response.body_len());
            println!("Time: {}ms", response.network_time_ms);
            println!("Interceptors: {}", client.interceptor_names().join(" -> "));

            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Request failed: {}", e);
            ExitCode::from(1)
        }
    }
}
