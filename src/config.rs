
#[cfg(debug_assertions)]
pub fn get_lead_endpoint() -> &'static str {
    "http://localhost:5175/api/apply"  // Local lead collector during development
}

#[cfg(not(debug_assertions))]
pub fn get_lead_endpoint() -> &'static str {
    "/api/apply"  // Same path on the serving origin
}

/// Shown to the visitor when the lead request fails.
pub const FALLBACK_CONTACT: &str = "morry4@gmail.com";
