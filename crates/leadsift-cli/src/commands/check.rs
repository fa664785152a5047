//! Check command - validate a single email or phone number.

use colored::Colorize;
use leadsift::{LeadSift, ValidationResult};

pub fn run(
    engine: &LeadSift,
    email: Option<String>,
    phone: Option<String>,
    json_output: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if email.is_none() && phone.is_none() {
        return Err("Nothing to check: pass --email and/or --phone".into());
    }

    let email_result = email.as_deref().map(|e| engine.validate_email(e));
    let phone_result = phone.as_deref().map(|p| engine.validate_phone(p));

    if json_output {
        let status = serde_json::json!({
            "email": email_result,
            "phone": phone_result,
        });
        println!("{}", serde_json::to_string_pretty(&status)?);
        return Ok(());
    }

    if let (Some(input), Some(result)) = (&email, &email_result) {
        print_result("Email", input, result);
    }
    if let (Some(input), Some(result)) = (&phone, &phone_result) {
        print_result("Phone", input, result);
        if let Some(phone_type) = result.phone_type {
            println!("  {:11} {}", "Type:", phone_type);
        }
    }

    Ok(())
}

fn print_result(label: &str, input: &str, result: &ValidationResult) {
    let verdict = if result.is_valid {
        "valid".green().bold()
    } else {
        "invalid".red().bold()
    };
    println!("{} {} {}", format!("{}:", label).cyan().bold(), input.white(), verdict);
    println!("  {:11} {}/100", "Score:", result.score);
    if let Some(normalized) = result.normalized.as_deref().filter(|n| *n != input) {
        println!("  {:11} {}", "Normalized:", normalized);
    }
    if let Some(reason) = &result.reason {
        println!("  {:11} {}", "Reason:", reason.yellow());
    }
}
