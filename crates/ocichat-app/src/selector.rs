use anyhow::Result;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

/// Locate the 1-based index of `default` within the catalog (first match).
fn find_default_index(models: &[String], default: &str) -> Option<usize> {
    models.iter().position(|m| m == default).map(|i| i + 1)
}

fn selection_prompt(len: usize, default_index: Option<usize>, default: &str) -> String {
    let mut prompt = format!("Select a model (1-{})", len);
    if let Some(idx) = default_index {
        prompt.push_str(&format!(" [default: {} - {}]", idx, default));
    }
    prompt.push_str(": ");
    prompt
}

/// Resolve one line of user input against a non-empty catalog. Never
/// fails: every path terminates in a catalog member or the declared
/// default.
///
/// Precedence, in order:
/// 1. empty input with a default present in the catalog -> default index
/// 2. input parses as an integer -> that index, unvalidated
/// 3. parse failure -> default index if one exists, else index 1
/// 4. the resulting index is range-checked; out of range returns `default`
///    when it is a catalog member, else the first entry
pub fn resolve_selection(models: &[String], default: &str, input: &str) -> String {
    let default_index = find_default_index(models, default);
    let trimmed = input.trim();

    let candidate: i64 = if trimmed.is_empty() && default_index.is_some() {
        default_index.unwrap_or(1) as i64
    } else {
        match trimmed.parse::<i64>() {
            Ok(n) => n,
            Err(_) => {
                println!(
                    "{}",
                    format!("Invalid input. Using default: {}", default).yellow()
                );
                default_index.unwrap_or(1) as i64
            }
        }
    };

    if candidate >= 1 && (candidate as usize) <= models.len() {
        models[candidate as usize - 1].clone()
    } else {
        println!(
            "{}",
            format!("Invalid selection. Using default: {}", default).yellow()
        );
        if models.iter().any(|m| m == default) {
            default.to_string()
        } else {
            models[0].clone()
        }
    }
}

/// Render the catalog and interactively pick one model.
pub fn select_model(rl: &mut DefaultEditor, models: &[String], default: &str) -> Result<String> {
    println!("\n{}", "Available Models:".bright_cyan().bold());
    println!("{}", "-".repeat(50));
    for (i, model) in models.iter().enumerate() {
        println!("{}. {}", i + 1, model);
    }
    println!("{}", "-".repeat(50));

    let prompt = selection_prompt(models.len(), find_default_index(models, default), default);
    let input = read_line(rl, &prompt)?;
    Ok(resolve_selection(models, default, &input))
}

/// Prompt for the message to send; empty input takes the default.
pub fn prompt_user_message(rl: &mut DefaultEditor, default: &str) -> Result<String> {
    let prompt = format!("\nEnter your message [default: '{}']: ", default);
    let input = read_line(rl, &prompt)?;
    let trimmed = input.trim();
    if trimmed.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(trimmed.to_string())
    }
}

/// Read one line; Ctrl-C / Ctrl-D degrade to empty input so the cascading
/// defaults apply instead of aborting the run.
fn read_line(rl: &mut DefaultEditor, prompt: &str) -> Result<String> {
    match rl.readline(prompt) {
        Ok(line) => Ok(line),
        Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(String::new()),
        Err(e) => Err(e.into()),
    }
}
