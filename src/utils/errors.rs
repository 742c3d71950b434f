//! User-Friendly Error Formatting
//!
//! Provides user-friendly error messages with troubleshooting hints
//! for common error scenarios.

use std::fmt::Write;

/// Format error for user consumption
///
/// Takes technical error and produces user-friendly message with
/// troubleshooting steps and context.
pub fn format_user_error(error: &anyhow::Error) -> String {
    let mut output = String::new();

    // Header
    writeln!(&mut output).ok();
    writeln!(
        &mut output,
        "╔════════════════════════════════════════════════════════════╗"
    )
    .ok();
    writeln!(
        &mut output,
        "║                     ERROR                                  ║"
    )
    .ok();
    writeln!(
        &mut output,
        "╚════════════════════════════════════════════════════════════╝"
    )
    .ok();
    writeln!(&mut output).ok();

    // Analyze the whole chain, not just the outermost context
    let error_msg = format!("{:#}", error);

    if error_msg.contains("Unknown key") || error_msg.contains("Unknown mouse button") {
        format_key_name_error(&mut output);
    } else if error_msg.contains("script") {
        format_script_error(&mut output);
    } else if error_msg.contains("config") {
        format_config_error(&mut output);
    } else {
        format_generic_error(&mut output, &error.to_string());
    }

    // Technical details
    writeln!(&mut output).ok();
    writeln!(
        &mut output,
        "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━"
    )
    .ok();
    writeln!(&mut output, "Technical Details:").ok();
    writeln!(&mut output).ok();
    writeln!(&mut output, "{}", error_msg).ok();
    writeln!(&mut output).ok();

    // Footer with help
    writeln!(
        &mut output,
        "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━"
    )
    .ok();
    writeln!(&mut output, "Need Help?").ok();
    writeln!(
        &mut output,
        "  - Run with --verbose for detailed logs: crt-input-replay -vv <script>"
    )
    .ok();
    writeln!(
        &mut output,
        "  - Print a starting config: crt-input-replay --print-default-config"
    )
    .ok();
    writeln!(
        &mut output,
        "╚════════════════════════════════════════════════════════════╝"
    )
    .ok();

    output
}

fn format_key_name_error(output: &mut String) {
    writeln!(output, "Unknown Key or Button Name").ok();
    writeln!(output).ok();
    writeln!(output, "The replay script names an input the bridge does not know.").ok();
    writeln!(output).ok();
    writeln!(output, "Accepted Names:").ok();
    writeln!(output).ok();
    writeln!(output, "  1. Keys").ok();
    writeln!(output, "     → Letters: \"A\" .. \"Z\", digits: \"Digit0\" .. \"Digit9\"").ok();
    writeln!(output, "     → \"Enter\", \"Escape\", \"ArrowUp\", \"F1\" .. \"F24\"").ok();
    writeln!(output, "     → Modifiers: \"ShiftLeft\", \"ControlRight\", \"AltLeft\"").ok();
    writeln!(output, "     → Names are case-insensitive").ok();
    writeln!(output).ok();
    writeln!(output, "  2. Mouse buttons").ok();
    writeln!(output, "     → \"Left\", \"Right\", \"Middle\", \"Back\", \"Forward\"").ok();
}

fn format_script_error(output: &mut String) {
    writeln!(output, "Replay Script Error").ok();
    writeln!(output).ok();
    writeln!(output, "Problem with the replay script.").ok();
    writeln!(output).ok();
    writeln!(output, "Common Causes:").ok();
    writeln!(output).ok();
    writeln!(output, "  1. Script file not found").ok();
    writeln!(output, "     → Check the path passed on the command line").ok();
    writeln!(output).ok();
    writeln!(output, "  2. Unsupported extension").ok();
    writeln!(output, "     → Use .toml or .json").ok();
    writeln!(output).ok();
    writeln!(output, "  3. Invalid frame layout").ok();
    writeln!(output, "     → Each [[frames]] entry may set: held, released,").ok();
    writeln!(output, "       motion, buttons, wheel, resize").ok();
}

fn format_config_error(output: &mut String) {
    writeln!(output, "Configuration Error").ok();
    writeln!(output).ok();
    writeln!(output, "Problem with configuration file.").ok();
    writeln!(output).ok();
    writeln!(output, "Common Causes:").ok();
    writeln!(output).ok();
    writeln!(output, "  1. Configuration file not found").ok();
    writeln!(
        output,
        "     → Specify: crt-input-replay -c /path/to/config.toml <script>"
    )
    .ok();
    writeln!(output).ok();
    writeln!(output, "  2. Invalid TOML syntax").ok();
    writeln!(output, "     → Check for typos, missing quotes, etc.").ok();
    writeln!(output).ok();
    writeln!(output, "  3. Invalid values").ok();
    writeln!(output, "     → logging.level: trace, debug, info, warn, error").ok();
    writeln!(output, "     → logging.format: pretty, compact, json").ok();
}

fn format_generic_error(output: &mut String, error: &str) {
    writeln!(output, "Replay Error").ok();
    writeln!(output).ok();
    writeln!(output, "An error occurred while replaying input.").ok();
    writeln!(output).ok();
    writeln!(output, "Error: {}", error).ok();
}
