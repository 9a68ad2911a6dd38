//! Access log formats
//!
//! One line per request, in the operator's choice of format:
//! - `common` (CLF, the default)
//! - `combined` (Apache/Nginx combined)
//! - `json` (structured, one object per line)
//! - anything else is a custom pattern with `$variable` substitution

use chrono::Local;

/// Everything a finished request contributes to its log line.
#[derive(Debug, Clone)]
pub struct AccessLogEntry {
    /// Client socket address
    pub remote_addr: String,
    /// Completion timestamp
    pub time: chrono::DateTime<Local>,
    /// HTTP method
    pub method: String,
    /// URL path, query excluded
    pub path: String,
    /// Query string without the leading `?`
    pub query: Option<String>,
    /// HTTP version as logged ("1.0", "1.1", "2")
    pub http_version: String,
    /// Response status code
    pub status: u16,
    /// Response body bytes (0 for HEAD and 304)
    pub body_bytes: u64,
    /// Referer header, if sent
    pub referer: Option<String>,
    /// User-Agent header, if sent
    pub user_agent: Option<String>,
    /// Wall time spent in the handler, microseconds
    pub request_time_us: u64,
}

impl AccessLogEntry {
    /// Render the entry in the named format.
    pub fn render(&self, format: &str) -> String {
        match format {
            "common" => self.render_common(),
            "combined" => self.render_combined(),
            "json" => self.render_json(),
            pattern => self.render_pattern(pattern),
        }
    }

    /// `METHOD /path?query HTTP/version`
    fn request_line(&self) -> String {
        format!("{} {} HTTP/{}", self.method, self.request_uri(), self.http_version)
    }

    fn request_uri(&self) -> String {
        match &self.query {
            Some(q) => format!("{}?{}", self.path, q),
            None => self.path.clone(),
        }
    }

    /// Common Log Format:
    /// `$remote_addr - - [$time_local] "$request" $status $body_bytes_sent`
    fn render_common(&self) -> String {
        format!(
            "{} - - [{}] \"{}\" {} {}",
            self.remote_addr,
            self.time.format("%d/%b/%Y:%H:%M:%S %z"),
            self.request_line(),
            self.status,
            self.body_bytes,
        )
    }

    /// Combined format: CLF plus quoted referer and user-agent.
    fn render_combined(&self) -> String {
        format!(
            "{} \"{}\" \"{}\"",
            self.render_common(),
            self.referer.as_deref().unwrap_or("-"),
            self.user_agent.as_deref().unwrap_or("-"),
        )
    }

    fn render_json(&self) -> String {
        serde_json::json!({
            "remote_addr": self.remote_addr,
            "time": self.time.to_rfc3339(),
            "method": self.method,
            "path": self.path,
            "query": self.query,
            "http_version": self.http_version,
            "status": self.status,
            "body_bytes": self.body_bytes,
            "referer": self.referer,
            "user_agent": self.user_agent,
            "request_time_us": self.request_time_us,
        })
        .to_string()
    }

    /// Custom pattern with Nginx-style variables:
    /// `$remote_addr`, `$time_local`, `$time_iso8601`, `$request`,
    /// `$request_method`, `$request_uri`, `$request_time` (seconds, 3
    /// decimals), `$status`, `$body_bytes_sent`, `$http_referer`,
    /// `$http_user_agent`.
    fn render_pattern(&self, pattern: &str) -> String {
        // Longest names first so $request_time is not eaten by $request.
        #[allow(clippy::cast_precision_loss)]
        let seconds = self.request_time_us as f64 / 1_000_000.0;

        pattern
            .replace("$remote_addr", &self.remote_addr)
            .replace(
                "$time_local",
                &self.time.format("%d/%b/%Y:%H:%M:%S %z").to_string(),
            )
            .replace("$time_iso8601", &self.time.to_rfc3339())
            .replace("$request_method", &self.method)
            .replace("$request_uri", &self.request_uri())
            .replace("$request_time", &format!("{seconds:.3}"))
            .replace("$request", &self.request_line())
            .replace("$status", &self.status.to_string())
            .replace("$body_bytes_sent", &self.body_bytes.to_string())
            .replace("$http_referer", self.referer.as_deref().unwrap_or("-"))
            .replace("$http_user_agent", self.user_agent.as_deref().unwrap_or("-"))
    }
}
