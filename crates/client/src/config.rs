//! Client configuration loaded from environment variables.

/// Base URLs and timeouts for the backend services.
///
/// All fields have defaults matching a local development backend. In any
/// real deployment, override via environment variables.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Employee API root (default: `http://localhost:8080/api`). Hosts the
    /// section reads, upserts, and workflow endpoints.
    pub employee_api: String,
    /// Reference-data API root (default:
    /// `http://localhost:8080/api/employeeModule`).
    pub module_api: String,
    /// Common-services root hosting the PIN-code lookup (default:
    /// `http://localhost:9000/common`).
    pub common_api: String,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            employee_api: "http://localhost:8080/api".into(),
            module_api: "http://localhost:8080/api/employeeModule".into(),
            common_api: "http://localhost:9000/common".into(),
            request_timeout_secs: 30,
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                        | Default                                 |
    /// |--------------------------------|-----------------------------------------|
    /// | `ONBOARD_EMPLOYEE_API_URL`     | `http://localhost:8080/api`             |
    /// | `ONBOARD_MODULE_API_URL`       | `http://localhost:8080/api/employeeModule` |
    /// | `ONBOARD_COMMON_API_URL`       | `http://localhost:9000/common`          |
    /// | `ONBOARD_REQUEST_TIMEOUT_SECS` | `30`                                    |
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let var = |name: &str, default: String| {
            std::env::var(name)
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or(default)
        };

        Self {
            employee_api: var("ONBOARD_EMPLOYEE_API_URL", defaults.employee_api),
            module_api: var("ONBOARD_MODULE_API_URL", defaults.module_api),
            common_api: var("ONBOARD_COMMON_API_URL", defaults.common_api),
            request_timeout_secs: std::env::var("ONBOARD_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.request_timeout_secs),
        }
    }

    /// Point every base URL at one host. Used by tests against an
    /// in-process mock backend.
    pub fn for_base(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self {
            employee_api: format!("{base}/api"),
            module_api: format!("{base}/api/employeeModule"),
            common_api: format!("{base}/common"),
            request_timeout_secs: 30,
        }
    }
}
