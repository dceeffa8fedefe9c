use colored::Colorize;

use ocichat_models::ChatRequest;

use crate::safe_truncate;

const BODY_PREVIEW_CHARS: usize = 5000;

/// Log HTTP request details for debugging (console output)
pub fn log_request(url: &str, request: &ChatRequest, api_key: &str, verbose: bool) {
    if !verbose {
        return;
    }

    println!("\n{}", "═".repeat(80).bright_cyan());
    println!("{}", "🔍 HTTP REQUEST DEBUG".bright_cyan().bold());
    println!("{}", "═".repeat(80).bright_cyan());

    // Parse URL to show host and port
    if let Ok(parsed_url) = reqwest::Url::parse(url) {
        println!("{}: {}", "URL".bright_yellow(), url);
        println!(
            "{}: {}",
            "Host".bright_yellow(),
            parsed_url.host_str().unwrap_or("unknown")
        );
        println!(
            "{}: {}",
            "Port".bright_yellow(),
            parsed_url.port().map(|p| p.to_string()).unwrap_or_else(|| {
                if parsed_url.scheme() == "https" {
                    "443 (default)".to_string()
                } else {
                    "80 (default)".to_string()
                }
            })
        );
        println!("{}: {}", "Scheme".bright_yellow(), parsed_url.scheme());
    } else {
        println!("{}: {}", "URL".bright_yellow(), url);
    }

    println!("\n{}", "Headers:".bright_yellow());
    println!("  Content-Type: application/json");
    println!(
        "  Authorization: Bearer {}***",
        &api_key.chars().take(10).collect::<String>()
    );

    println!("\n{}", "Request Body:".bright_yellow());
    match serde_json::to_string_pretty(&request) {
        Ok(json) => {
            if json.chars().count() > BODY_PREVIEW_CHARS {
                println!("{}", safe_truncate(&json, BODY_PREVIEW_CHARS));
                println!(
                    "\n{}",
                    format!("... (truncated, total {} bytes)", json.len()).bright_black()
                );
            } else {
                println!("{}", json);
            }
        }
        Err(e) => println!("{}", format!("Error serializing request: {}", e).red()),
    }

    println!("{}", "═".repeat(80).bright_cyan());
    println!();
}

/// Log HTTP response details for debugging (console output)
pub fn log_response(
    status: &reqwest::StatusCode,
    headers: &reqwest::header::HeaderMap,
    body: &str,
    verbose: bool,
) {
    if !verbose {
        return;
    }

    println!("\n{}", "═".repeat(80).bright_green());
    println!("{}", "📥 HTTP RESPONSE DEBUG".bright_green().bold());
    println!("{}", "═".repeat(80).bright_green());

    println!(
        "{}: {} {}",
        "Status".bright_yellow(),
        status.as_u16(),
        status.canonical_reason().unwrap_or("Unknown")
    );

    println!("\n{}", "Headers:".bright_yellow());
    for (name, value) in headers.iter() {
        if let Ok(val_str) = value.to_str() {
            println!("  {}: {}", name.as_str().bright_white(), val_str);
        }
    }

    println!("\n{}", "Response Body:".bright_yellow());
    // Try to pretty-print JSON, fall back to raw text
    let rendered = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| serde_json::to_string_pretty(&v).ok())
        .unwrap_or_else(|| body.to_string());

    if rendered.chars().count() > BODY_PREVIEW_CHARS {
        println!("{}", safe_truncate(&rendered, BODY_PREVIEW_CHARS));
        println!(
            "\n{}",
            format!("... (truncated, total {} bytes)", rendered.len()).bright_black()
        );
    } else {
        println!("{}", rendered);
    }

    println!("{}", "═".repeat(80).bright_green());
    println!();
}
