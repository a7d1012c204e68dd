/// Base URL for API calls. Release builds are served by the backend itself,
/// so requests stay on the same origin.
pub fn get_backend_url() -> &'static str {
    if cfg!(debug_assertions) {
        "http://localhost:3000"
    } else {
        ""
    }
}
