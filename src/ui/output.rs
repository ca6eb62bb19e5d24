use static_upload::config::ConfigWarning;

/// Warnings go to stderr so stdout stays clean for the summary
pub fn print_config_warnings(warnings: &[ConfigWarning]) {
    for w in warnings {
        let location = match w.line {
            Some(line) => format!("{}:{}", w.file.display(), line),
            None => w.file.display().to_string(),
        };
        match &w.suggestion {
            Some(suggestion) => eprintln!(
                "⚠ Unknown config key '{}' in {} (did you mean '{}'?)",
                w.key, location, suggestion
            ),
            None => eprintln!("⚠ Unknown config key '{}' in {}", w.key, location),
        }
    }
}
