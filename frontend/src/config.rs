use complaints::{ComplaintConfig, ExecutionMode};

#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3001"  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // Production URL
}

#[cfg(debug_assertions)]
pub fn execution_mode() -> ExecutionMode {
    ExecutionMode::Development
}

#[cfg(not(debug_assertions))]
pub fn execution_mode() -> ExecutionMode {
    ExecutionMode::Production
}

// EmailJS keys are baked in at build time, e.g.
// EMAILJS_PUBLIC_KEY=... EMAILJS_SERVICE_ID=... EMAILJS_TEMPLATE_ID=... trunk build --release
fn build_time_value(key: &str) -> Option<String> {
    let value = match key {
        "EMAILJS_PUBLIC_KEY" => option_env!("EMAILJS_PUBLIC_KEY"),
        "EMAILJS_SERVICE_ID" => option_env!("EMAILJS_SERVICE_ID"),
        "EMAILJS_TEMPLATE_ID" => option_env!("EMAILJS_TEMPLATE_ID"),
        "EMAILJS_API_URL" => option_env!("EMAILJS_API_URL"),
        "COMPLAINT_RESET_DELAY_MS" => option_env!("COMPLAINT_RESET_DELAY_MS"),
        "COMPLAINT_REQUEST_TIMEOUT_MS" => option_env!("COMPLAINT_REQUEST_TIMEOUT_MS"),
        _ => None,
    };
    value.map(str::to_string)
}

pub fn complaint_config() -> ComplaintConfig {
    let mut config = match ComplaintConfig::from_lookup(build_time_value) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid complaint configuration, using defaults: {}", e);
            ComplaintConfig::default()
        }
    };
    config.mode = execution_mode();
    config.backend_url = get_backend_url().to_string();
    config
}
